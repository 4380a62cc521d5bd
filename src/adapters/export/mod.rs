//! Report renderers for global classifications.
//!
//! Every renderer writes the same table, one row per team in global order.

pub mod csv;
pub mod pdf;
pub mod xlsx;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::model::{GlobalClassification, TeamWithContext};
use crate::utils::error::Result;

pub const HEADERS: [&str; 16] = [
    "Posició Global",
    "Equip",
    "% Punts",
    "Punts",
    "Grup",
    "Posició Grup",
    "Partits",
    "Victòries",
    "Derrotes",
    "Sets Favor",
    "Sets Contra",
    "Dif Sets",
    "Punts Favor",
    "Punts Contra",
    "Dif Punts",
    "Grup Nou",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Xlsx,
    Json,
    Pdf,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 5] = ["csv", "tsv", "xlsx", "json", "pdf"];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn render(&self, classification: &GlobalClassification) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Csv => csv::render(classification, b','),
            ExportFormat::Tsv => csv::render(classification, b'\t'),
            ExportFormat::Xlsx => xlsx::render(classification),
            ExportFormat::Json => Ok(serde_json::to_vec_pretty(classification)?),
            ExportFormat::Pdf => pdf::render(classification),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}

/// `{category}-{YYYY-MM-DD}.{ext}`, with path separators in the category
/// replaced so the file always lands in the output directory.
pub fn file_name(category: &str, date: NaiveDate, format: ExportFormat) -> String {
    let category = category.replace(['/', '\\'], "-");
    format!("{}-{}.{}", category, date.format("%Y-%m-%d"), format.extension())
}

/// Row values in `HEADERS` order; `global_position` is 1-based.
pub(crate) fn row(global_position: usize, team: &TeamWithContext) -> [String; 16] {
    let stats = &team.stats;
    [
        global_position.to_string(),
        stats.name.clone(),
        format!("{:.2}", stats.points_percentage),
        stats.total_points.to_string(),
        team.group.clone(),
        stats.position.to_string(),
        stats.matches_played.to_string(),
        stats.matches_won.to_string(),
        stats.matches_lost.to_string(),
        stats.sets_for.to_string(),
        stats.sets_against.to_string(),
        stats.sets_difference().to_string(),
        stats.points_for.to_string(),
        stats.points_against.to_string(),
        stats.points_difference().to_string(),
        stats.new_group.map(|g| g.to_string()).unwrap_or_default(),
    ]
}
