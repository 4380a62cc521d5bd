/// Share of the points available in `matches` games (3 per win), as a percentage.
pub fn current_percentage(total_points: u32, matches: u32) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    f64::from(total_points) / (f64::from(matches) * 3.0) * 100.0
}

/// `part / whole * 100`, or 0 when nothing was played.
pub fn rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

pub fn average(total: u32, matches: u32) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    f64::from(total) / f64::from(matches)
}

/// Matches a strip team is expected to play in a group of `group_size`:
/// a double round robin (Cadet and Juvenil) against the other teams.
pub fn strip_matches(group_size: usize) -> u32 {
    let size = u32::try_from(group_size).unwrap_or(u32::MAX);
    size.saturating_mul(4).saturating_sub(4)
}
