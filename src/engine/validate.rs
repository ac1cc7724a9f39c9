use crate::types::report::Finding;
use crate::types::table::{LevelEntry, ToolEntry, ToolKind};
use crate::types::task::CompletedTask;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

/// Reports table and task data that the engine will silently degrade on.
///
/// Nothing here changes scoring. A multiplicative point outside `[0, 1)` is
/// blocking; every other finding marks a fallback path and is a warning.
pub fn validate_tables(
    levels: &[LevelEntry],
    tools: &[ToolEntry],
    tasks: &[CompletedTask],
) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut seen_teams = HashSet::new();
    for entry in levels {
        if !seen_teams.insert(entry.team.as_str()) {
            findings.push(Finding::warning(
                "levels.duplicate_team",
                "Duplicate level table",
                format!(
                    "Team '{}' has more than one level entry; only the first is used.",
                    entry.team
                ),
            ));
        }
    }

    let mut seen_tools = HashSet::new();
    for tool in tools {
        if !seen_tools.insert((tool.team.as_str(), tool.index)) {
            findings.push(Finding::warning(
                "tools.duplicate_index",
                "Duplicate tool index",
                format!(
                    "Team '{}' defines tool index {} more than once; every copy is applied.",
                    tool.team, tool.index
                ),
            ));
        }
        match tool.kind {
            ToolKind::Multiplicative => {
                if let Some(point) = tool.point.iter().find(|point| !(0.0..1.0).contains(*point)) {
                    findings.push(Finding::blocking(
                        "tools.point_out_of_range",
                        "Multiplicative point outside [0, 1)",
                        format!(
                            "Tool '{}' (team '{}', index {}) has point {point}.",
                            tool.tool_name, tool.team, tool.index
                        ),
                    ));
                }
            }
            ToolKind::Additive => {
                if tool.point.is_empty() {
                    findings.push(Finding::warning(
                        "tools.additive_empty",
                        "Additive tool without points",
                        format!(
                            "Tool '{}' (team '{}', index {}) never contributes.",
                            tool.tool_name, tool.team, tool.index
                        ),
                    ));
                }
            }
        }
    }

    let known_tools: BTreeMap<&str, BTreeSet<u32>> =
        tools.iter().fold(BTreeMap::new(), |mut acc, tool| {
            acc.entry(tool.team.as_str())
                .or_insert_with(BTreeSet::new)
                .insert(tool.index);
            acc
        });

    for task in tasks {
        let unknown = task
            .tools
            .iter()
            .filter(|index| {
                !known_tools
                    .get(task.team.as_str())
                    .map(|indices| indices.contains(*index))
                    .unwrap_or(false)
            })
            .map(|index| index.to_string())
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            findings.push(Finding::warning(
                "tasks.unknown_tool",
                "Task references undefined tools",
                format!(
                    "Task '{}' (team '{}') uses tool index(es) {} that are not defined; they are ignored.",
                    task.task_id,
                    task.team,
                    unknown.join(", ")
                ),
            ));
        }

        let in_table = levels
            .iter()
            .find(|entry| entry.team == task.team)
            .and_then(|entry| entry.point(task.level))
            .is_some();
        if !in_table {
            findings.push(Finding::warning(
                "tasks.level_fallback",
                "Task level not in level table",
                format!(
                    "Task '{}' (team '{}', level {}) scores its raw level.",
                    task.task_id, task.team, task.level
                ),
            ));
        }
    }

    for finding in &findings {
        warn!(id = %finding.id, blocking = finding.blocking, "{}", finding.body);
    }
    findings
}
