use crate::domain::model::TeamStats;
use crate::domain::services::formula::{average, current_percentage, rate, strip_matches};

/// Adds up a Cadet and a Juvenil line into one strip line.
///
/// `group_size` is the number of teams in the Cadet group; the points
/// percentage is measured against the full double round robin of that
/// group rather than the matches played so far. The result keeps the Cadet
/// name and link and has `position` 0 until the group is re-ranked.
pub fn combine_teams(group_size: usize, cadet: &TeamStats, juvenil: &TeamStats) -> TeamStats {
    let total_points = cadet.total_points + juvenil.total_points;
    let matches_played = cadet.matches_played + juvenil.matches_played;
    let matches_won = cadet.matches_won + juvenil.matches_won;
    let matches_lost = cadet.matches_lost + juvenil.matches_lost;
    let points_for = cadet.points_for + juvenil.points_for;
    let points_against = cadet.points_against + juvenil.points_against;

    TeamStats {
        position: 0,
        name: cadet.name.clone(),
        url: cadet.url.clone(),
        recent_form: format!("{}{}", cadet.recent_form, juvenil.recent_form),
        total_points,
        points_percentage: current_percentage(total_points, strip_matches(group_size)),
        matches_played,
        matches_won,
        win_percentage: rate(matches_won, matches_played),
        matches_lost,
        loss_percentage: rate(matches_lost, matches_played),
        sets_for: cadet.sets_for + juvenil.sets_for,
        sets_against: cadet.sets_against + juvenil.sets_against,
        points_for,
        avg_points_for: average(points_for, matches_played),
        points_against,
        avg_points_against: average(points_against, matches_played),
        victories_3_sets: cadet.victories_3_sets + juvenil.victories_3_sets,
        victories_2_sets: cadet.victories_2_sets + juvenil.victories_2_sets,
        defeats_1_point: cadet.defeats_1_point + juvenil.defeats_1_point,
        defeats_0_points: cadet.defeats_0_points + juvenil.defeats_0_points,
        new_group: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::fixtures::team;

    fn detailed(name: &str, form: &str, seed: u32) -> TeamStats {
        let mut stats = team(name, seed * 3, seed, seed + 1);
        stats.position = 3;
        stats.recent_form = form.to_string();
        stats.sets_for = seed * 3;
        stats.sets_against = seed + 4;
        stats.points_for = 100 + seed * 25;
        stats.points_against = 90 + seed * 20;
        stats.victories_3_sets = seed;
        stats.victories_2_sets = seed + 2;
        stats.defeats_1_point = 1;
        stats.defeats_0_points = seed + 5;
        stats
    }

    #[test]
    fn test_counters_are_summed() {
        let mut cadet = detailed("CE Ripollet Cadet", "GGP", 4);
        cadet.url = "https://host/equipo.php?id=7".to_string();
        let mut juvenil = detailed("CE Ripollet Juvenil", "PPG", 2);
        juvenil.url = "https://host/equipo.php?id=8".to_string();

        let merged = combine_teams(8, &cadet, &juvenil);

        assert_eq!(merged.position, 0);
        assert_eq!(merged.name, "CE Ripollet Cadet");
        assert_eq!(merged.url, "https://host/equipo.php?id=7");
        assert_eq!(merged.recent_form, "GGPPPG");
        assert_eq!(merged.total_points, 18);
        assert_eq!(merged.matches_won, 6);
        assert_eq!(merged.matches_lost, 8);
        assert_eq!(merged.matches_played, merged.matches_won + merged.matches_lost);
        assert_eq!(merged.sets_for, 18);
        assert_eq!(merged.sets_against, 14);
        assert_eq!(merged.points_for, 350);
        assert_eq!(merged.points_against, 300);
        assert_eq!(merged.victories_3_sets, 6);
        assert_eq!(merged.victories_2_sets, 10);
        assert_eq!(merged.defeats_1_point, 2);
        assert_eq!(merged.defeats_0_points, 16);
        assert_eq!(merged.points_difference(), 50);
    }

    #[test]
    fn test_rates_are_rederived() {
        let cadet = detailed("A", "", 4);
        let juvenil = detailed("A", "", 2);

        let merged = combine_teams(8, &cadet, &juvenil);

        // 18 points over the 28 matches of an 8-team strip group.
        assert!((merged.points_percentage - 18.0 / 84.0 * 100.0).abs() < 1e-9);
        assert!((merged.win_percentage - 6.0 / 14.0 * 100.0).abs() < 1e-9);
        assert!((merged.loss_percentage - 8.0 / 14.0 * 100.0).abs() < 1e-9);
        assert!((merged.avg_points_for - 25.0).abs() < 1e-9);
        assert!((merged.avg_points_against - 300.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_played_yields_zero_rates() {
        let cadet = team("A", 0, 0, 0);
        let juvenil = team("A", 0, 0, 0);

        let merged = combine_teams(8, &cadet, &juvenil);

        assert_eq!(merged.matches_played, 0);
        assert_eq!(merged.points_percentage, 0.0);
        assert_eq!(merged.win_percentage, 0.0);
        assert_eq!(merged.loss_percentage, 0.0);
        assert_eq!(merged.avg_points_for, 0.0);
        assert_eq!(merged.avg_points_against, 0.0);

        // A single-team group has no strip matches at all.
        let lonely = combine_teams(1, &team("B", 3, 1, 0), &team("B", 3, 1, 0));
        assert_eq!(lonely.points_percentage, 0.0);
    }
}
