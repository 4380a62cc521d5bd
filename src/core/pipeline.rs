use crate::adapters::export::{self, ExportFormat};
use crate::adapters::files::read_html_file;
use crate::adapters::html::parse_classification;
use crate::adapters::http::HtmlFetcher;
use crate::core::{Classification, ConfigProvider, GlobalClassification, Pipeline, Storage};
use crate::domain::services::{calculate_strip_classifications, classify};
use crate::utils::error::{Result, StripError};
use std::path::Path;

/// How many teams per group are logged after extraction.
const TOP_TEAMS_LOGGED: usize = 3;

/// Fetches standings pages, optionally merges Cadet and Juvenil into strip
/// standings, deals the teams into snake groups and writes one report per
/// classification and format.
pub struct StripPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: HtmlFetcher,
}

impl<S: Storage, C: ConfigProvider> StripPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = HtmlFetcher::new(config.request_timeout_seconds(), config.user_agent())?;
        Ok(Self {
            storage,
            config,
            fetcher,
        })
    }

    fn output_formats(&self) -> Result<Vec<ExportFormat>> {
        self.config
            .output_formats()
            .iter()
            .map(|name| {
                name.parse::<ExportFormat>()
                    .map_err(|reason| StripError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: name.clone(),
                        reason,
                    })
            })
            .collect()
    }
}

fn log_top_teams(classification: &Classification) {
    tracing::info!("{}", classification.category);
    for group in &classification.groups {
        tracing::info!("  {} (jornada {})", group.name, group.round);
        for team in group.get_top(TOP_TEAMS_LOGGED) {
            tracing::info!(
                "    {}. {} - {} pts ({:.1}%)",
                team.position,
                team.name,
                team.total_points,
                team.points_percentage
            );
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StripPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Classification>> {
        let mut classifications = Vec::new();

        for url in self.config.source_urls() {
            let html = self.fetcher.fetch(url).await?;
            classifications.push(parse_classification(&html, url)?);
        }

        for file in self.config.source_files() {
            let html = read_html_file(file).await?;
            classifications.push(parse_classification(&html, file)?);
        }

        for classification in &classifications {
            log_top_teams(classification);
        }

        Ok(classifications)
    }

    async fn transform(&self, data: Vec<Classification>) -> Result<Vec<GlobalClassification>> {
        let sources = if self.config.strip_enabled() {
            calculate_strip_classifications(&data)?
        } else {
            tracing::info!("Strip mode disabled, ranking pages as they are");
            data
        };

        Ok(classify(&sources, self.config.snake_groups()))
    }

    async fn load(&self, result: Vec<GlobalClassification>) -> Result<Vec<String>> {
        let formats = self.output_formats()?;
        let today = chrono::Local::now().date_naive();
        let mut written = Vec::new();

        for classification in &result {
            for format in &formats {
                let file_name = export::file_name(&classification.category, today, *format);
                let data = format.render(classification)?;

                tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
                self.storage.write_file(&file_name, &data).await?;

                let full_path = Path::new(self.config.output_path()).join(&file_name);
                tracing::info!("Saved {}", full_path.display());
                written.push(full_path.display().to_string());
            }
        }

        Ok(written)
    }
}
