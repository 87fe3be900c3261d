//! Background analysis task

use serde::{Deserialize, Serialize};

/// Lifecycle status of a background task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Success,
    Failed,
    Canceled,
    /// Any status this module does not know; never treated as a failure
    #[serde(other)]
    Unknown,
}

/// One background analysis job for a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub status: TaskStatus,

    /// Failure category (e.g., "LICENSING_LOC_LIMIT"); only set on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<String>,
}

impl Task {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            error_type: None,
            error_message: None,
            id: None,
            task_type: None,
            component_key: None,
            submitted_at: None,
            executed_at: None,
        }
    }

    /// Failed task with the given error category and message
    pub fn failed(error_type: Option<&str>, error_message: Option<&str>) -> Self {
        Self {
            error_type: error_type.map(str::to_string),
            error_message: error_message.map(str::to_string),
            ..Self::new(TaskStatus::Failed)
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == TaskStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form() {
        let task: Task = serde_json::from_str(r#"{"status":"IN_PROGRESS"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let json = serde_json::to_string(&TaskStatus::Failed).unwrap();
        assert_eq!(json, "\"FAILED\"");
    }

    #[test]
    fn test_unlisted_status_is_unknown_and_not_failed() {
        let task: Task = serde_json::from_str(r#"{"status":"DELETED"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
        assert!(!task.is_failed());
    }

    #[test]
    fn test_failed_task_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id":"AV1","type":"REPORT","status":"FAILED","errorType":"LICENSING_LOC","errorMessage":"Too many lines"}"#,
        )
        .unwrap();
        assert!(task.is_failed());
        assert_eq!(task.task_type.as_deref(), Some("REPORT"));
        assert_eq!(task.error_type.as_deref(), Some("LICENSING_LOC"));
        assert_eq!(task.error_message.as_deref(), Some("Too many lines"));
    }
}
