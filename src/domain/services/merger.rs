//! Builds the "Tira" (strip) standings: each Cadet page is paired with the
//! Juvenil page of the same division and the two are merged group by group.

use std::collections::{BTreeMap, HashMap};

use crate::domain::model::{Classification, Group};
use crate::domain::services::combiner::combine_teams;
use crate::domain::services::matcher::match_teams;
use crate::domain::services::ranking::rank_group;
use crate::utils::error::{Result, StripError};

pub const DIVISIONS: [&str; 4] = ["1a Div", "2a Div", "3a Div", "4a Div"];

const CADET: &str = "Cadet";
const JUVENIL: &str = "Juvenil";

pub fn extract_division(category: &str) -> Result<&'static str> {
    DIVISIONS
        .iter()
        .copied()
        .find(|division| category.contains(division))
        .ok_or_else(|| StripError::UnknownDivision {
            category: category.to_string(),
        })
}

/// Cadet and Juvenil pages paired by division, ordered by division.
pub fn group_by_division(
    classifications: &[Classification],
) -> Result<BTreeMap<&'static str, (&Classification, &Classification)>> {
    let mut cadet_by_div = BTreeMap::new();
    let mut juvenil_by_div = BTreeMap::new();

    for classification in classifications {
        let division = extract_division(&classification.category)?;

        if classification.category.contains(CADET) {
            cadet_by_div.insert(division, classification);
        } else if classification.category.contains(JUVENIL) {
            juvenil_by_div.insert(division, classification);
        } else {
            tracing::warn!(
                "Ignoring '{}': neither Cadet nor Juvenil",
                classification.category
            );
        }
    }

    let mut divisions = BTreeMap::new();
    for (division, cadet) in cadet_by_div {
        let juvenil = juvenil_by_div
            .remove(division)
            .ok_or_else(|| StripError::MissingCounterpart {
                division: division.to_string(),
            })?;
        tracing::info!("Paired division {}: Cadet + Juvenil", division);
        divisions.insert(division, (cadet, juvenil));
    }

    for division in juvenil_by_div.keys() {
        tracing::warn!("Juvenil division {} has no Cadet page; skipped", division);
    }

    Ok(divisions)
}

/// Merges one Cadet group with its Juvenil namesake and re-ranks the result.
pub fn combine_groups(cadet_group: &Group, juvenil_group: &Group, group_name: &str) -> Result<Group> {
    let matches = match_teams(&cadet_group.teams, &juvenil_group.teams, group_name)?;
    tracing::info!("Group {}: {} teams with Cadet+Juvenil", group_name, matches.len());

    let group_size = cadet_group.total_teams();
    let mut teams: Vec<_> = matches
        .into_iter()
        .map(|m| {
            let mut team = combine_teams(group_size, m.cadet, m.juvenil);
            team.name = m.definitive_name;
            team
        })
        .collect();

    rank_group(&mut teams);

    Ok(Group::new(
        group_name,
        cadet_group.round.max(juvenil_group.round),
        teams,
    ))
}

/// Merges a division's two pages into its "Tira" page, which points at the
/// Cadet source.
pub fn combine_classifications(
    cadet: &Classification,
    juvenil: &Classification,
    division: &str,
) -> Result<Classification> {
    let cadet_groups: BTreeMap<&str, &Group> =
        cadet.groups.iter().map(|g| (g.name.as_str(), g)).collect();
    let juvenil_groups: HashMap<&str, &Group> =
        juvenil.groups.iter().map(|g| (g.name.as_str(), g)).collect();

    if cadet_groups.len() != juvenil_groups.len() {
        return Err(StripError::GroupCountMismatch {
            division: division.to_string(),
            cadet: cadet_groups.len(),
            juvenil: juvenil_groups.len(),
        });
    }

    let groups = cadet_groups
        .into_iter()
        .map(|(name, cadet_group)| {
            let juvenil_group =
                juvenil_groups
                    .get(name)
                    .ok_or_else(|| StripError::GroupNotFound {
                        division: division.to_string(),
                        group: name.to_string(),
                    })?;
            combine_groups(cadet_group, juvenil_group, name)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Classification {
        competition: format!("Tira {}", division),
        category: format!("Tira {} Fem", division),
        url: cadet.url.clone(),
        groups,
    })
}

/// One strip classification per division found among `classifications`.
pub fn calculate_strip_classifications(
    classifications: &[Classification],
) -> Result<Vec<Classification>> {
    tracing::info!("Calculating strip classifications...");

    let divisions = group_by_division(classifications)?;
    let mut strips = Vec::with_capacity(divisions.len());

    for (division, (cadet, juvenil)) in divisions {
        tracing::info!("Processing division: {}", division);
        strips.push(combine_classifications(cadet, juvenil, division)?);
    }

    tracing::info!("Calculated {} strip classifications", strips.len());
    Ok(strips)
}
