use std::cmp::Ordering;

use crate::domain::model::TeamStats;

/// Best first: points percentage, then wins, then set and point differences.
pub fn compare_by_stats(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points_percentage
        .total_cmp(&a.points_percentage)
        .then_with(|| b.matches_won.cmp(&a.matches_won))
        .then_with(|| b.sets_difference().cmp(&a.sets_difference()))
        .then_with(|| b.points_difference().cmp(&a.points_difference()))
}

/// Stable re-sort of a group, then positions `1..=n` in the new order.
pub fn rank_group(teams: &mut [TeamStats]) {
    teams.sort_by(compare_by_stats);
    for (index, team) in teams.iter_mut().enumerate() {
        team.position = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::fixtures::team;

    fn scored(name: &str, pct: f64, won: u32, sets: (u32, u32), points: (u32, u32)) -> TeamStats {
        let mut stats = team(name, 0, won, 0);
        stats.points_percentage = pct;
        stats.sets_for = sets.0;
        stats.sets_against = sets.1;
        stats.points_for = points.0;
        stats.points_against = points.1;
        stats
    }

    fn names(teams: &[TeamStats]) -> Vec<&str> {
        teams.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_each_key_breaks_the_previous_tie() {
        let mut teams = vec![
            scored("points diff", 50.0, 5, (15, 10), (400, 300)),
            scored("low pct", 40.0, 9, (30, 0), (900, 100)),
            scored("sets diff", 50.0, 5, (16, 10), (300, 400)),
            scored("wins", 50.0, 6, (0, 30), (100, 900)),
            scored("top pct", 60.0, 1, (0, 3), (10, 75)),
            scored("last tie", 50.0, 5, (15, 10), (350, 300)),
        ];

        rank_group(&mut teams);

        assert_eq!(
            names(&teams),
            vec!["top pct", "wins", "sets diff", "points diff", "last tie", "low pct"]
        );
        let positions: Vec<u32> = teams.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let mut teams = vec![
            scored("first", 50.0, 3, (9, 9), (200, 200)),
            scored("second", 50.0, 3, (9, 9), (200, 200)),
            scored("third", 50.0, 3, (9, 9), (200, 200)),
        ];

        rank_group(&mut teams);

        assert_eq!(names(&teams), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_group() {
        let mut teams: Vec<TeamStats> = vec![];
        rank_group(&mut teams);
        assert!(teams.is_empty());
    }
}
