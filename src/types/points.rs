use crate::types::task::CompletedTask;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point breakdown of a single completed task.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TaskScore {
    pub base_point: f64,
    pub creative_task_point: f64,
    pub creative_process_point: f64,
    pub total_performance: f64,
}

impl TaskScore {
    pub fn creative_point(&self) -> f64 {
        self.creative_task_point + self.creative_process_point
    }
}

/// Summed task scores for one identifier over one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformancePointTotal {
    pub identifier: String,
    pub total_base_point: f64,
    pub total_creative_task_point: f64,
    pub total_creative_process_point: f64,
    pub total_performance_point: f64,
}

impl PerformancePointTotal {
    pub fn zero(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            total_base_point: 0.0,
            total_creative_task_point: 0.0,
            total_creative_process_point: 0.0,
            total_performance_point: 0.0,
        }
    }

    pub fn add(&mut self, score: &TaskScore) {
        self.total_base_point += score.base_point;
        self.total_creative_task_point += score.creative_task_point;
        self.total_creative_process_point += score.creative_process_point;
        self.total_performance_point += score.total_performance;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformancePointTotalWithTime {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub performance_point: PerformancePointTotal,
}

/// A task paired with its score, used by the breakdown report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBreakdown {
    pub task_id: String,
    pub task_name: String,
    pub assignee_id: String,
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub level: u32,
    pub done_date: DateTime<Utc>,
    pub score: TaskScore,
}

impl TaskBreakdown {
    pub fn new(task: &CompletedTask, score: TaskScore) -> Self {
        Self {
            task_id: task.task_id.clone(),
            task_name: task.task_name.clone(),
            assignee_id: task.assignee_id.clone(),
            team: task.team.clone(),
            task_type: task.task_type.clone(),
            project: task.project.clone(),
            level: task.level,
            done_date: task.done_date,
            score,
        }
    }
}
