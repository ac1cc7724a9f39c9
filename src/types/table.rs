use serde::{Deserialize, Serialize};

/// Per-team base point values, indexed by `level - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub team: String,
    #[serde(default)]
    pub level_point: Vec<f64>,
}

impl LevelEntry {
    /// Point for `level` when it lies inside the table, `None` otherwise.
    pub fn point(&self, level: u32) -> Option<f64> {
        level_slot(&self.level_point, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Per-level fractional reduction of the base point.
    Multiplicative,
    /// Flat bonus taken from the first point entry.
    Additive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub team: String,
    pub tool_name: String,
    pub index: u32,
    #[serde(rename = "type")]
    pub kind: ToolKind,
    #[serde(default)]
    pub point: Vec<f64>,
}

impl ToolEntry {
    pub fn level_point(&self, level: u32) -> Option<f64> {
        level_slot(&self.point, level)
    }

    pub fn flat_point(&self) -> Option<f64> {
        self.point.first().copied()
    }
}

fn level_slot(points: &[f64], level: u32) -> Option<f64> {
    let slot = usize::try_from(level).ok()?.checked_sub(1)?;
    points.get(slot).copied()
}
