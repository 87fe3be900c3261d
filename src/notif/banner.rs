//! Banner model produced by the selector and consumed by the renderers

use serde::Serialize;

/// Which status the banner reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    InProgress,
    Pending,
    LicensingFailure,
    Failure,
}

/// Alert severity, mapped to the alert CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Info,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerIcon {
    Spinner,
    Pending,
}

/// Banner body
///
/// `Html` comes from trusted message bundles and may carry markup (links to
/// the background task page). `Text` comes from task data and is always
/// escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BannerMessage {
    Html(String),
    Text(String),
}

impl BannerMessage {
    pub fn as_str(&self) -> &str {
        match self {
            BannerMessage::Html(s) | BannerMessage::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerLink {
    pub href: String,
    pub label: String,
}

/// One navigation bar notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub level: BannerLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<BannerIcon>,
    pub message: BannerMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<BannerLink>,
}

impl Banner {
    pub fn css_class(&self) -> &'static str {
        match self.level {
            BannerLevel::Info => "alert alert-info",
            BannerLevel::Danger => "alert alert-danger",
        }
    }
}
