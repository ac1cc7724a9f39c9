use crate::engine::score::score_task;
use crate::types::points::PerformancePointTotal;
use crate::types::table::{LevelEntry, ToolEntry};
use crate::types::task::CompletedTask;

/// Sums the score of every task into one total for `identifier`.
/// An empty task list yields an all-zero total.
pub fn aggregate(
    identifier: &str,
    tasks: &[CompletedTask],
    levels: &[LevelEntry],
    tools: &[ToolEntry],
) -> PerformancePointTotal {
    tasks.iter().fold(
        PerformancePointTotal::zero(identifier),
        |mut total, task| {
            total.add(&score_task(task, levels, tools));
            total
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::table::ToolKind;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, level: u32, tools: Vec<u32>) -> CompletedTask {
        CompletedTask {
            task_id: id.to_string(),
            task_name: id.to_string(),
            assignee_id: "u-1".to_string(),
            team: "Art".to_string(),
            tools,
            level,
            done_date: Utc.with_ymd_and_hms(2025, 9, 2, 9, 0, 0).unwrap(),
            task_type: None,
            project: None,
        }
    }

    #[test]
    fn empty_task_list_is_all_zero() {
        let total = aggregate("Art", &[], &[], &[]);
        assert_eq!(total, PerformancePointTotal::zero("Art"));
    }

    #[test]
    fn sums_each_component_across_tasks() {
        let levels = vec![LevelEntry {
            team: "Art".to_string(),
            level_point: vec![10.0, 20.0, 30.0],
        }];
        let tools = vec![
            ToolEntry {
                team: "Art".to_string(),
                tool_name: "ref-board".to_string(),
                index: 1,
                kind: ToolKind::Multiplicative,
                point: vec![0.5, 0.5, 0.5],
            },
            ToolEntry {
                team: "Art".to_string(),
                tool_name: "workshop".to_string(),
                index: 2,
                kind: ToolKind::Additive,
                point: vec![3.0],
            },
        ];
        let tasks = vec![
            task("a", 2, vec![1]),
            task("b", 1, vec![]),
            task("c", 3, vec![1, 2]),
        ];

        let total = aggregate("u-1", &tasks, &levels, &tools);
        assert_eq!(total.identifier, "u-1");
        // a: 10 / 10 / 0, b: 0 / 10 / 0, c: 15 / 15 / 3
        assert_eq!(total.total_base_point, 25.0);
        assert_eq!(total.total_creative_task_point, 35.0);
        assert_eq!(total.total_creative_process_point, 3.0);
        assert_eq!(total.total_performance_point, 63.0);
    }
}
