use crate::types::table::LevelEntry;

/// Base point for `level` in `team`'s level table.
///
/// Falls back to the raw level when the team has no table or the level lies
/// outside it. When a team appears more than once the first entry wins.
pub fn point_for_level(levels: &[LevelEntry], team: &str, level: u32) -> f64 {
    levels
        .iter()
        .find(|entry| entry.team == team)
        .and_then(|entry| entry.point(level))
        .unwrap_or_else(|| f64::from(level))
}
