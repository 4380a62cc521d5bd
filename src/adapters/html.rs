//! Standings page parser.
//!
//! A page has one `h2` naming the competition, then per group an `h4`
//! header (`PRIMERA FASE - GRUP X`), an optional `h4` with the matchday
//! (`Jornada: N`) and the standings `table`.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::model::{Classification, Group, TeamStats};
use crate::domain::services::formula::current_percentage;
use crate::utils::error::{Result, StripError};

const TITLE_MARKER: &str = "CLASIFICACIONES";
const GROUP_MARKER: &str = "PRIMERA FASE - GRUP";
const ROUND_MARKER: &str = "Jornada:";
const AVERAGE_SUFFIXES: [&str; 2] = ["ptos./part.", "sets/part."];

/// Rows shorter than this are decoration (separators, notes) and skipped.
const MIN_ROW_CELLS: usize = 14;
/// The category is the tail of the title, e.g. `Cadet 4a Div Fem`.
const CATEGORY_WORDS: usize = 4;
const MIN_CATEGORY_WORDS: usize = 3;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| StripError::parse(format!("invalid selector '{}': {}", css, e)))
}

/// Whitespace-collapsed text of an element and its descendants.
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses one standings page. `source` is the URL or path the page came
/// from; relative team links are resolved against it when it is a URL.
pub fn parse_classification(html: &str, source: &str) -> Result<Classification> {
    let document = Html::parse_document(html);

    let h2 = selector("h2")?;
    let title = document
        .select(&h2)
        .next()
        .map(|el| element_text(&el))
        .ok_or_else(|| StripError::parse("no h2 element with the competition name"))?;
    let competition = title.replace(TITLE_MARKER, "").trim().to_string();
    let category = category_from_title(&title).unwrap_or_else(|| competition.clone());

    let base = Url::parse(source)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"));
    let groups = extract_groups(&document, base.as_ref())?;
    tracing::info!("Parsing completed: {} groups", groups.len());

    Ok(Classification {
        competition,
        category,
        url: source.to_string(),
        groups,
    })
}

fn category_from_title(title: &str) -> Option<String> {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() < MIN_CATEGORY_WORDS {
        return None;
    }
    let start = words.len().saturating_sub(CATEGORY_WORDS);
    Some(words[start..].join(" "))
}

fn resolve_link(base: Option<&Url>, href: &str) -> String {
    match base.map(|base| base.join(href)) {
        Some(Ok(url)) => url.to_string(),
        _ => href.to_string(),
    }
}

fn extract_groups(document: &Html, base: Option<&Url>) -> Result<Vec<Group>> {
    let headings_and_tables = selector("h4, table")?;
    let elements: Vec<ElementRef<'_>> = document.select(&headings_and_tables).collect();
    tracing::debug!("Found {} h4/table elements", elements.len());

    let mut groups = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        if element.value().name() != "h4" {
            continue;
        }
        let text = element_text(element);
        if text.contains(GROUP_MARKER) {
            tracing::debug!("Found group: {}", text);
            groups.push(parse_group(&text, &elements[index + 1..], base)?);
        }
    }

    Ok(groups)
}

fn parse_group(header: &str, following: &[ElementRef<'_>], base: Option<&Url>) -> Result<Group> {
    let name = header.trim().to_string();

    let round = match following.iter().find(|el| el.value().name() == "h4") {
        Some(next_h4) => {
            let text = element_text(next_h4);
            if text.contains(ROUND_MARKER) {
                let value = text.replace(ROUND_MARKER, "");
                value.trim().parse::<u32>().map_err(|_| {
                    StripError::parse(format!("group {}: invalid round '{}'", name, value.trim()))
                })?
            } else {
                0
            }
        }
        None => 0,
    };

    let table = following
        .iter()
        .find(|el| el.value().name() == "table")
        .ok_or_else(|| StripError::parse(format!("no table found for group {}", name)))?;

    let teams = parse_table(table, base)?;
    if teams.is_empty() {
        return Err(StripError::parse(format!("no teams found for group {}", name)));
    }

    Ok(Group::new(name, round, teams))
}

fn parse_table(table: &ElementRef<'_>, base: Option<&Url>) -> Result<Vec<TeamStats>> {
    let tr = selector("tr")?;
    let td = selector("td")?;

    let mut teams = Vec::new();
    for row in table.select(&tr).skip(1) {
        let cells: Vec<ElementRef<'_>> = row.select(&td).collect();
        if cells.len() < MIN_ROW_CELLS {
            continue;
        }
        teams.push(parse_team_row(&cells, base)?);
    }

    Ok(teams)
}

fn parse_int(text: &str) -> Result<u32> {
    let cleaned = text.replace('%', "");
    let first = cleaned
        .split_whitespace()
        .next()
        .ok_or_else(|| StripError::parse(format!("could not parse integer from '{}'", text)))?;
    first
        .parse::<u32>()
        .map_err(|_| StripError::parse(format!("could not parse integer from '{}'", text)))
}

/// The per-match average printed after a total, e.g. `"560 80,0 ptos./part."`.
fn parse_average(text: &str) -> Result<f64> {
    let cleaned = AVERAGE_SUFFIXES
        .iter()
        .fold(text.to_string(), |acc, suffix| acc.replace(suffix, ""));
    let last = cleaned
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c == '(' || c == ')'))
        .filter(|token| !token.is_empty())
        .last()
        .ok_or_else(|| StripError::parse(format!("could not parse average from '{}'", text)))?;
    last.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| StripError::parse(format!("could not parse average from '{}'", text)))
}

/// `"6 86%"` -> (6, 86.0); the percentage is optional.
fn parse_count_with_rate(text: &str) -> Result<(u32, f64)> {
    let mut parts = text.split_whitespace();
    let count = parse_int(parts.next().unwrap_or_default())?;
    let rate = match parts.next() {
        Some(rate) => f64::from(parse_int(rate)?),
        None => 0.0,
    };
    Ok((count, rate))
}

/// Expects at least 14 cells; the 0-3 defeats column is optional.
fn parse_team_row(cells: &[ElementRef<'_>], base: Option<&Url>) -> Result<TeamStats> {
    let text: Vec<String> = cells.iter().map(element_text).collect();

    let link = selector("a")?;
    let anchor = cells[1].select(&link).next();
    let name = anchor
        .map(|a| element_text(&a))
        .unwrap_or_else(|| text[1].clone());
    let url = anchor
        .and_then(|a| a.value().attr("href"))
        .map(|href| resolve_link(base, href))
        .unwrap_or_default();

    let total_points = parse_int(&text[3])?;
    let matches_played = parse_int(&text[4])?;
    let (matches_won, win_percentage) = parse_count_with_rate(&text[5])?;
    let (matches_lost, loss_percentage) = parse_count_with_rate(&text[6])?;

    Ok(TeamStats {
        position: parse_int(&text[0])?,
        name,
        url,
        recent_form: text[2].replace(' ', ""),
        total_points,
        points_percentage: current_percentage(total_points, matches_played),
        matches_played,
        matches_won,
        win_percentage,
        matches_lost,
        loss_percentage,
        sets_for: parse_int(&text[7])?,
        sets_against: parse_int(&text[8])?,
        points_for: parse_int(&text[9])?,
        avg_points_for: parse_average(&text[9])?,
        points_against: parse_int(&text[10])?,
        avg_points_against: parse_average(&text[10])?,
        victories_3_sets: parse_int(&text[11])?,
        victories_2_sets: parse_int(&text[12])?,
        defeats_1_point: parse_int(&text[13])?,
        defeats_0_points: match text.get(14) {
            Some(cell) => parse_int(cell)?,
            None => 0,
        },
        new_group: None,
    })
}
