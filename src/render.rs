//! One-call entry points combining selection and markup

use crate::config::NotifConfig;
use crate::error::NotifError;
use crate::l10n::MessageBundle;
use crate::models::{AdminContext, NotifProps};
use crate::notif::select_banner;
use crate::renderers::render_banner;

/// Render the notification for already-decoded props
pub fn render_notif(
    props: &NotifProps,
    context: &AdminContext,
    messages: &MessageBundle,
    config: &NotifConfig,
) -> Result<String, NotifError> {
    let banner = select_banner(props, context, messages, config);
    render_banner(banner.as_ref())
}

/// Render the notification from a props JSON document
pub fn render_from_json(
    props_json: &str,
    can_admin: bool,
    messages: &MessageBundle,
    config: &NotifConfig,
) -> Result<String, NotifError> {
    let props: NotifProps = serde_json::from_str(props_json)?;
    render_notif(&props, &AdminContext::new(can_admin), messages, config)
}
