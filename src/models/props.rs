//! Render inputs: the props the host passes and the ambient viewer context

use serde::{Deserialize, Deserializer, Serialize};

use super::{Component, Task};

/// Props of the background task notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifProps {
    pub component: Component,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<Task>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub is_in_progress: bool,

    #[serde(default, deserialize_with = "null_as_false")]
    pub is_pending: bool,
}

/// Host flags may be `null`; read that the same as absent
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl NotifProps {
    pub fn new(component: Component) -> Self {
        Self {
            component,
            current_task: None,
            is_in_progress: false,
            is_pending: false,
        }
    }

    pub fn in_progress(mut self, value: bool) -> Self {
        self.is_in_progress = value;
        self
    }

    pub fn pending(mut self, value: bool) -> Self {
        self.is_pending = value;
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.current_task = Some(task);
        self
    }
}

/// Capabilities of the current viewer, supplied by the enclosing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminContext {
    #[serde(default)]
    pub can_admin: bool,
}

impl AdminContext {
    pub fn new(can_admin: bool) -> Self {
        Self { can_admin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_to_false() {
        let props: NotifProps = serde_json::from_str(r#"{"component":{"key":"p"}}"#).unwrap();
        assert!(!props.is_in_progress);
        assert!(!props.is_pending);
        assert!(props.current_task.is_none());
    }

    #[test]
    fn test_null_flags_read_as_false() {
        let props: NotifProps = serde_json::from_str(
            r#"{"component":{"key":"p"},"isInProgress":null,"isPending":true}"#,
        )
        .unwrap();
        assert!(!props.is_in_progress);
        assert!(props.is_pending);
    }

    #[test]
    fn test_camel_case_props() {
        let props: NotifProps = serde_json::from_str(
            r#"{"component":{"key":"p"},"isPending":true,"currentTask":{"status":"PENDING"}}"#,
        )
        .unwrap();
        assert!(props.is_pending);
        assert!(props.current_task.is_some());
    }
}
