//! Pairs the Cadet and Juvenil rosters of one group.
//!
//! Names are first compared in normalized form. Whatever is left is paired
//! greedily by a similarity score, in Cadet order, keeping the first of
//! equally scored candidates. This is not an optimal assignment.

use std::collections::HashSet;

use crate::domain::model::TeamStats;
use crate::domain::services::normalize::{normalize_name, tokens};
use crate::utils::error::{Result, StripError};

pub const WORD_WEIGHT: f64 = 0.8;
pub const CHAR_WEIGHT: f64 = 0.2;
/// Fuzzy candidates must score strictly above this to be paired.
pub const MATCH_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

#[derive(Debug, Clone)]
pub struct TeamMatch<'a> {
    pub definitive_name: String,
    pub cadet: &'a TeamStats,
    pub juvenil: &'a TeamStats,
    pub kind: MatchKind,
}

/// Fraction of equal characters when the shorter string is laid over the
/// start of the longer one, relative to the longer length.
pub fn character_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (longer, shorter) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    let equal = shorter
        .iter()
        .zip(longer.iter())
        .filter(|(x, y)| x == y)
        .count();

    equal as f64 / longer.len() as f64
}

/// Fuzzy score between two normalized names, or `None` when they share no
/// token at all (such a pair is never a candidate).
pub fn similarity(cadet_norm: &str, juvenil_norm: &str) -> Option<f64> {
    let cadet_words: HashSet<&str> = tokens(cadet_norm).into_iter().collect();
    let juvenil_words: HashSet<&str> = tokens(juvenil_norm).into_iter().collect();

    let common = cadet_words.intersection(&juvenil_words).count();
    if common == 0 {
        return None;
    }

    let min_words = cadet_words.len().min(juvenil_words.len());
    let word_score = common as f64 / min_words as f64;
    let char_score = character_similarity(cadet_norm, juvenil_norm);

    Some(word_score * WORD_WEIGHT + char_score * CHAR_WEIGHT)
}

const CATEGORY_WORDS: [&str; 2] = ["CADET", "JUVENIL"];

/// `Cadet`, `(JUVENIL)` and the like; punctuation around the word is ignored.
fn is_category_word(token: &str) -> bool {
    let core = token.trim_matches(|c: char| !c.is_alphanumeric());
    CATEGORY_WORDS
        .iter()
        .any(|word| core.eq_ignore_ascii_case(word))
}

/// Name shown for a paired team: the longer raw name without its category word.
pub fn definitive_name(cadet_name: &str, juvenil_name: &str) -> String {
    let longer = if cadet_name.chars().count() >= juvenil_name.chars().count() {
        cadet_name
    } else {
        juvenil_name
    };

    longer
        .split_whitespace()
        .filter(|token| !is_category_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pairs every Cadet team with one Juvenil team of the same group.
///
/// Fails with `RosterSizeMismatch` when the rosters differ in length and
/// with `IncompleteMatch` when some team is left without a partner.
pub fn match_teams<'a>(
    cadet_teams: &'a [TeamStats],
    juvenil_teams: &'a [TeamStats],
    group_name: &str,
) -> Result<Vec<TeamMatch<'a>>> {
    if cadet_teams.len() != juvenil_teams.len() {
        return Err(StripError::RosterSizeMismatch {
            group: group_name.to_string(),
            cadet: cadet_teams.len(),
            juvenil: juvenil_teams.len(),
        });
    }

    let cadet_norm: Vec<String> = cadet_teams.iter().map(|t| normalize_name(&t.name)).collect();
    let juvenil_norm: Vec<String> = juvenil_teams.iter().map(|t| normalize_name(&t.name)).collect();

    let mut matches = Vec::with_capacity(cadet_teams.len());
    let mut cadet_used = vec![false; cadet_teams.len()];
    let mut juvenil_used = vec![false; juvenil_teams.len()];

    for (ci, cadet) in cadet_teams.iter().enumerate() {
        let found = (0..juvenil_teams.len())
            .find(|&ji| !juvenil_used[ji] && juvenil_norm[ji] == cadet_norm[ci]);

        if let Some(ji) = found {
            let juvenil = &juvenil_teams[ji];
            let name = definitive_name(&cadet.name, &juvenil.name);
            tracing::debug!("  Exact match: '{}' <-> '{}' -> '{}'", cadet.name, juvenil.name, name);
            cadet_used[ci] = true;
            juvenil_used[ji] = true;
            matches.push(TeamMatch {
                definitive_name: name,
                cadet,
                juvenil,
                kind: MatchKind::Exact,
            });
        }
    }

    let pending = cadet_used.iter().filter(|used| !**used).count();
    if pending > 0 {
        tracing::warn!(
            "Group {}: {} teams without exact match, trying fuzzy matching...",
            group_name,
            pending
        );

        for (ci, cadet) in cadet_teams.iter().enumerate() {
            if cadet_used[ci] {
                continue;
            }

            let mut best: Option<(usize, f64)> = None;
            for ji in 0..juvenil_teams.len() {
                if juvenil_used[ji] {
                    continue;
                }
                let Some(score) = similarity(&cadet_norm[ci], &juvenil_norm[ji]) else {
                    continue;
                };
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((ji, score));
                }
            }

            if let Some((ji, score)) = best.filter(|(_, score)| *score > MATCH_THRESHOLD) {
                let juvenil = &juvenil_teams[ji];
                let name = definitive_name(&cadet.name, &juvenil.name);
                tracing::info!(
                    "  Fuzzy match ({:.2}): '{}' <-> '{}' -> '{}'",
                    score,
                    cadet.name,
                    juvenil.name,
                    name
                );
                cadet_used[ci] = true;
                juvenil_used[ji] = true;
                matches.push(TeamMatch {
                    definitive_name: name,
                    cadet,
                    juvenil,
                    kind: MatchKind::Fuzzy,
                });
            }
        }
    }

    if matches.len() != cadet_teams.len() {
        let unmatched_cadet = unmatched_names(cadet_teams, &cadet_used);
        let unmatched_juvenil = unmatched_names(juvenil_teams, &juvenil_used);
        tracing::error!("Group {} - teams without a partner:", group_name);
        tracing::error!("  Cadet: {:?}", unmatched_cadet);
        tracing::error!("  Juvenil: {:?}", unmatched_juvenil);
        return Err(StripError::IncompleteMatch {
            group: group_name.to_string(),
            unmatched_cadet,
            unmatched_juvenil,
        });
    }

    Ok(matches)
}

fn unmatched_names(teams: &[TeamStats], used: &[bool]) -> Vec<String> {
    teams
        .iter()
        .zip(used)
        .filter(|(_, used)| !**used)
        .map(|(team, _)| team.name.clone())
        .collect()
}
