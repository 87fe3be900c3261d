//! Background task notification for the component navigation bar
//!
//! `select_banner` is a pure function of its inputs. Checks run in a fixed
//! order (in progress, pending, failed) and the first match wins:
//!
//! | condition                                   | banner             |
//! |---------------------------------------------|--------------------|
//! | `is_in_progress`                            | info, spinner      |
//! | `is_pending`                                | info, pending icon |
//! | failed task, licensing error with a message | danger, task text  |
//! | any other failed task                       | danger, generic    |
//! | otherwise                                   | none               |
//!
//! The component's `showBackgroundTasks` setting picks the detailed message
//! (with a link to the task page) over the generic one. The viewer's admin
//! capability only adds the license link to the licensing banner.

pub mod banner;

pub use banner::{Banner, BannerIcon, BannerKind, BannerLevel, BannerLink, BannerMessage};

use crate::config::NotifConfig;
use crate::l10n::MessageBundle;
use crate::models::{AdminContext, NotifProps, Task};
use crate::urls::{component_background_task_url, license_admin_url};

/// Marker in a task error type that identifies a licensing failure
pub const LICENSING_MARKER: &str = "LICENSING";

/// Message key prefix for the license link label, suffixed by the error type
pub const LICENSE_BUTTON_KEY: &str = "license.component_navigation.button";

const IN_PROGRESS_KEY: &str = "component_navigation.status.in_progress";
const PENDING_KEY: &str = "component_navigation.status.pending";
const FAILED_KEY: &str = "component_navigation.status.failed";

/// Pick the banner to show for the given props, or `None`
pub fn select_banner(
    props: &NotifProps,
    context: &AdminContext,
    messages: &MessageBundle,
    config: &NotifConfig,
) -> Option<Banner> {
    let can_see_background_tasks = props.component.can_see_background_tasks();
    let url = component_background_task_url(&config.base_url, &props.component.key);
    let status_message = |key: &str| {
        if can_see_background_tasks {
            messages.translate_with_parameters(&format!("{}.admin", key), &[url.as_str()])
        } else {
            messages.translate(&[key])
        }
    };

    let banner = if props.is_in_progress {
        Banner {
            kind: BannerKind::InProgress,
            level: BannerLevel::Info,
            icon: Some(BannerIcon::Spinner),
            message: BannerMessage::Html(status_message(IN_PROGRESS_KEY)),
            link: None,
        }
    } else if props.is_pending {
        Banner {
            kind: BannerKind::Pending,
            level: BannerLevel::Info,
            icon: Some(BannerIcon::Pending),
            message: BannerMessage::Html(status_message(PENDING_KEY)),
            link: None,
        }
    } else if let Some(task) = props.current_task.as_ref().filter(|t| t.is_failed()) {
        match licensing_error_type(task, messages) {
            Some(error_type) => Banner {
                kind: BannerKind::LicensingFailure,
                level: BannerLevel::Danger,
                icon: None,
                message: BannerMessage::Text(task.error_message.clone().unwrap_or_default()),
                link: context.can_admin.then(|| BannerLink {
                    href: license_admin_url(&config.base_url),
                    label: format!("{}.", messages.translate(&[LICENSE_BUTTON_KEY, error_type])),
                }),
            },
            None => Banner {
                kind: BannerKind::Failure,
                level: BannerLevel::Danger,
                icon: None,
                message: BannerMessage::Html(status_message(FAILED_KEY)),
                link: None,
            },
        }
    } else {
        log::debug!("no background task notification for {}", props.component.key);
        return None;
    };

    log::debug!(
        "background task notification for {}: {:?}",
        props.component.key,
        banner.kind
    );
    Some(banner)
}

/// Error type of a licensing failure that has a dedicated link label
fn licensing_error_type<'a>(task: &'a Task, messages: &MessageBundle) -> Option<&'a str> {
    task.error_type
        .as_deref()
        .filter(|t| t.contains(LICENSING_MARKER))
        .filter(|t| messages.has_message(&[LICENSE_BUTTON_KEY, *t]))
}
