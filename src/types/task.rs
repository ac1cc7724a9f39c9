use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished unit of work, as written by the task importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    #[serde(rename = "id")]
    pub task_id: String,
    pub task_name: String,
    pub assignee_id: String,
    pub team: String,
    /// Tool indices, unique within the task. Order does not affect scoring.
    #[serde(default)]
    pub tools: Vec<u32>,
    pub level: u32,
    pub done_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Which task attribute an identifier is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    Team,
    Assignee,
}

impl TaskFilter {
    pub fn from_is_team(is_team: bool) -> Self {
        if is_team {
            Self::Team
        } else {
            Self::Assignee
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Assignee => "assignee",
        }
    }

    pub fn matches(self, task: &CompletedTask, identifier: &str) -> bool {
        match self {
            Self::Team => task.team == identifier,
            Self::Assignee => task.assignee_id == identifier,
        }
    }
}

/// Inclusive `[start, end]` window over task completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn task_decodes_from_store_document() {
        let raw = r#"{
            "id": "T-1",
            "task_name": "Key visual",
            "assignee_id": "u-7",
            "team": "Art",
            "tools": [2, 1],
            "level": 3,
            "done_date": "2025-09-01T10:30:00Z",
            "project": "Autumn launch"
        }"#;
        let task: CompletedTask = serde_json::from_str(raw).expect("task should decode");
        assert_eq!(task.task_id, "T-1");
        assert_eq!(task.tools, vec![2, 1]);
        assert_eq!(task.project.as_deref(), Some("Autumn launch"));
        assert!(task.task_type.is_none());
        assert_eq!(
            task.done_date,
            Utc.with_ymd_and_hms(2025, 9, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn missing_tool_list_defaults_to_empty() {
        let raw = r#"{"id":"T-2","task_name":"x","assignee_id":"u","team":"Art","level":1,"done_date":"2025-09-01T00:00:00Z"}"#;
        let task: CompletedTask = serde_json::from_str(raw).expect("task should decode");
        assert!(task.tools.is_empty());
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let start = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 9, 2, 23, 59, 59).unwrap();
        let range = DateRange::new(start, end);
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end + chrono::Duration::seconds(1)));
    }
}
