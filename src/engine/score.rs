use crate::engine::level::point_for_level;
use crate::engine::tool::tool_factor;
use crate::types::points::TaskScore;
use crate::types::table::{LevelEntry, ToolEntry};
use crate::types::task::CompletedTask;

pub fn score_task(task: &CompletedTask, levels: &[LevelEntry], tools: &[ToolEntry]) -> TaskScore {
    let base = point_for_level(levels, &task.team, task.level);
    let tools = tool_factor(tools, &task.tools, task.level, &task.team);

    let base_point = base * tools.factor;
    let creative_task_point = base - base_point;
    let creative_process_point = tools.additive_sum;

    TaskScore {
        base_point,
        creative_task_point,
        creative_process_point,
        // base_point + creative_point, taken from the unsplit terms so the
        // sum carries no rounding from the split.
        total_performance: base + creative_process_point,
    }
}
