//! Navigation bar notification markup
//!
//! Renders a [`Banner`] into the `navbar-notif` fragment the host page drops
//! into its navigation area. Message bundle HTML is inserted as-is; task
//! text and link labels are escaped by the template.

use lazy_static::lazy_static;
use mustache::Template;
use serde::Serialize;

use crate::error::NotifError;
use crate::notif::{Banner, BannerIcon, BannerMessage};

const NAV_BAR_NOTIF_TEMPLATE: &str = include_str!("templates/nav_bar_notif.html.mustache");

// Compiled on first render
lazy_static! {
    static ref NAV_BAR_NOTIF: Result<Template, String> =
        mustache::compile_str(NAV_BAR_NOTIF_TEMPLATE).map_err(|e| e.to_string());
}

/// Flattened template data for one banner
#[derive(Debug, Clone, Serialize)]
pub struct NavBarNotifContext {
    pub css_class: String,
    pub spinner: bool,
    pub pending_icon: bool,
    pub is_html: bool,
    pub is_text: bool,
    pub message: String,
    pub has_link: bool,
    pub link_href: String,
    pub link_label: String,
}

impl From<&Banner> for NavBarNotifContext {
    fn from(banner: &Banner) -> Self {
        let (link_href, link_label) = banner
            .link
            .as_ref()
            .map(|l| (l.href.clone(), l.label.clone()))
            .unwrap_or_default();

        Self {
            css_class: banner.css_class().to_string(),
            spinner: banner.icon == Some(BannerIcon::Spinner),
            pending_icon: banner.icon == Some(BannerIcon::Pending),
            is_html: matches!(banner.message, BannerMessage::Html(_)),
            is_text: matches!(banner.message, BannerMessage::Text(_)),
            message: banner.message.as_str().to_string(),
            has_link: banner.link.is_some(),
            link_href,
            link_label,
        }
    }
}

/// Render the banner markup; `None` renders nothing
pub fn render_banner(banner: Option<&Banner>) -> Result<String, NotifError> {
    let Some(banner) = banner else {
        return Ok(String::new());
    };

    let template = NAV_BAR_NOTIF
        .as_ref()
        .map_err(|e| NotifError::Template(e.clone()))?;
    template
        .render_to_string(&NavBarNotifContext::from(banner))
        .map_err(|e| NotifError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notif::{BannerKind, BannerLevel, BannerLink};

    fn banner(icon: Option<BannerIcon>, message: BannerMessage) -> Banner {
        Banner {
            kind: BannerKind::InProgress,
            level: BannerLevel::Info,
            icon,
            message,
            link: None,
        }
    }

    #[test]
    fn test_embedded_template_compiles() {
        assert!(NAV_BAR_NOTIF.is_ok());
    }

    #[test]
    fn test_repeated_renders_do_not_leak_state() {
        let first = banner(Some(BannerIcon::Spinner), BannerMessage::Html("One".to_string()));
        let second = banner(None, BannerMessage::Text("Two".to_string()));
        let a = render_banner(Some(&first)).unwrap();
        let b = render_banner(Some(&second)).unwrap();
        assert!(a.contains("<span>One</span>") && a.contains("spinner"));
        assert!(b.contains("<span>Two</span>") && !b.contains("spinner"));
    }

    #[test]
    fn test_render_none_is_empty() {
        assert_eq!(render_banner(None).unwrap(), "");
    }

    #[test]
    fn test_render_spinner_and_raw_html() {
        let b = banner(
            Some(BannerIcon::Spinner),
            BannerMessage::Html("See <a href=\"/x\">tasks</a>".to_string()),
        );
        let html = render_banner(Some(&b)).unwrap();
        assert!(html.contains("<div class=\"navbar-notif alert alert-info\">"));
        assert!(html.contains("<i class=\"spinner spacer-right text-bottom\"></i>"));
        assert!(html.contains("<span>See <a href=\"/x\">tasks</a></span>"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_render_pending_icon() {
        let b = banner(Some(BannerIcon::Pending), BannerMessage::Html("Pending".to_string()));
        let html = render_banner(Some(&b)).unwrap();
        assert!(html.contains("<svg class=\"spacer-right\""));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn test_render_escapes_text_and_link() {
        let mut b = banner(None, BannerMessage::Text("<b>limit</b> & more".to_string()));
        b.level = BannerLevel::Danger;
        b.link = Some(BannerLink {
            href: "/admin/extension/license/app".to_string(),
            label: "Fix <now>.".to_string(),
        });
        let html = render_banner(Some(&b)).unwrap();
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("&lt;b&gt;limit&lt;/b&gt; &amp; more"));
        assert!(!html.contains("<b>limit</b>"));
        assert!(html.contains("<a class=\"little-spacer-left\" href=\"/admin/extension/license/app\">Fix &lt;now&gt;.</a>"));
    }
}
