//! Module configuration supplied by the host page

use serde::{Deserialize, Serialize};

/// Settings that do not change between renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifConfig {
    /// Context path the web app is served under (e.g., "/sonar"); empty at root
    #[serde(default)]
    pub base_url: String,
}

impl NotifConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
        .normalized()
    }

    /// Strip trailing slashes so URLs can be appended with a leading `/`
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(NotifConfig::new("/sonar/").base_url, "/sonar");
        assert_eq!(NotifConfig::new("/").base_url, "");
    }

    #[test]
    fn test_deserialize_default() {
        let config: NotifConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "");
        let config: NotifConfig = serde_json::from_str(r#"{"baseUrl":"/ctx"}"#).unwrap();
        assert_eq!(config.base_url, "/ctx");
    }
}
