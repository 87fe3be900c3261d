//! Project/module component as seen by the navigation bar

use serde::{Deserialize, Serialize};

/// A project or module the navigation bar is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Component key (e.g., "org.example:my-project")
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Qualifier such as "TRK" or "BRC"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    /// Viewer-specific settings; absent when the viewer has no extra rights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ComponentConfiguration>,
}

/// Per-viewer settings bag attached to a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfiguration {
    /// Whether the viewer may open the component's background task page
    #[serde(default)]
    pub show_background_tasks: bool,

    #[serde(default)]
    pub show_settings: bool,
}

impl Component {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            qualifier: None,
            configuration: None,
        }
    }

    /// Attach a configuration with the background task visibility flag set
    pub fn with_background_tasks(mut self, visible: bool) -> Self {
        let mut configuration = self.configuration.take().unwrap_or_default();
        configuration.show_background_tasks = visible;
        self.configuration = Some(configuration);
        self
    }

    /// True only when a configuration is present and grants task visibility
    pub fn can_see_background_tasks(&self) -> bool {
        self.configuration
            .as_ref()
            .map_or(false, |c| c.show_background_tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_hides_background_tasks() {
        let component = Component::new("my-project");
        assert!(!component.can_see_background_tasks());
    }

    #[test]
    fn test_configuration_flag_controls_visibility() {
        assert!(Component::new("p").with_background_tasks(true).can_see_background_tasks());
        assert!(!Component::new("p").with_background_tasks(false).can_see_background_tasks());
    }

    #[test]
    fn test_deserialize_camel_case_configuration() {
        let component: Component = serde_json::from_str(
            r#"{"key":"p","qualifier":"TRK","configuration":{"showBackgroundTasks":true}}"#,
        )
        .unwrap();
        assert_eq!(component.qualifier.as_deref(), Some("TRK"));
        assert!(component.can_see_background_tasks());
        assert!(!component.configuration.unwrap().show_settings);
    }
}
