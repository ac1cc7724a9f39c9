use crate::types::table::{ToolEntry, ToolKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolFactor {
    /// Product of `1 - point` over contributing multiplicative tools, or
    /// `0.0` when none contributed.
    pub factor: f64,
    pub additive_sum: f64,
}

/// Combines the tools a task used into a reduction factor and a flat bonus.
///
/// Tools listed in `used` but missing from `team`'s table are ignored. A
/// multiplicative tool whose point list does not reach `level` is skipped.
/// If no multiplicative tool contributes, the factor is zero: a task done
/// without reduction tools earns no creative-task credit.
pub fn tool_factor(tools: &[ToolEntry], used: &[u32], level: u32, team: &str) -> ToolFactor {
    let mut factor = 1.0;
    let mut additive_sum = 0.0;
    let mut contributed = false;

    let matched = tools
        .iter()
        .filter(|tool| tool.team == team && used.contains(&tool.index));
    for tool in matched {
        match tool.kind {
            ToolKind::Multiplicative => {
                if let Some(point) = tool.level_point(level) {
                    factor *= 1.0 - point;
                    contributed = true;
                }
            }
            ToolKind::Additive => {
                if let Some(point) = tool.flat_point() {
                    additive_sum += point;
                }
            }
        }
    }

    if !contributed {
        factor = 0.0;
    }

    ToolFactor {
        factor,
        additive_sum,
    }
}
