use crate::domain::model::{Classification, GlobalClassification, TeamWithContext};
use crate::domain::services::ranking::compare_by_stats;

pub const DEFAULT_SNAKE_GROUPS: usize = 4;

/// Serpentine bucket (1-based) for the team at flattened `index`:
/// 1, 2, .., n, n, .., 2, 1, 1, 2, ..
pub fn snake_group(index: usize, num_groups: usize) -> u32 {
    let cycle = num_groups * 2;
    let cycle_pos = index % cycle;
    let group = if cycle_pos < num_groups {
        cycle_pos + 1
    } else {
        cycle - cycle_pos
    };
    u32::try_from(group).unwrap_or(u32::MAX)
}

/// Flattens every group of `classification` into one ranked list.
///
/// Teams are ordered by their in-group position first, so all group leaders
/// come before any runner-up, with the stat comparison breaking ties within
/// a tier. Each team is then dealt into `num_groups` new groups in snake
/// order. `num_groups` must be at least 1.
pub fn global_classify(classification: &Classification, num_groups: usize) -> GlobalClassification {
    let num_groups = num_groups.max(1);

    let mut teams: Vec<TeamWithContext> = classification
        .groups
        .iter()
        .flat_map(|group| {
            group.teams.iter().map(move |team| TeamWithContext {
                stats: team.clone(),
                competition: classification.competition.clone(),
                category: classification.category.clone(),
                group: group.name.clone(),
            })
        })
        .collect();

    teams.sort_by(|a, b| {
        a.stats
            .position
            .cmp(&b.stats.position)
            .then_with(|| compare_by_stats(&a.stats, &b.stats))
    });

    for (index, team) in teams.iter_mut().enumerate() {
        team.stats.new_group = Some(snake_group(index, num_groups));
    }

    tracing::debug!(
        "{}: {} teams dealt into {} groups",
        classification.category,
        teams.len(),
        num_groups
    );

    GlobalClassification {
        competition: classification.competition.clone(),
        category: classification.category.clone(),
        teams,
    }
}

pub fn classify(classifications: &[Classification], num_groups: usize) -> Vec<GlobalClassification> {
    classifications
        .iter()
        .map(|classification| global_classify(classification, num_groups))
        .collect()
}
