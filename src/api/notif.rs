//! Background task notification operations exposed to JavaScript

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, notif_error, serialize};
use crate::config::NotifConfig;
use crate::error::NotifError;
use crate::l10n::MessageBundle;
use crate::models::{AdminContext, NotifProps};
use crate::notif::select_banner;
use crate::render::render_notif;
use crate::{wasm_error, wasm_info, wasm_log};

// Installed once by the host, read on every render
lazy_static! {
    static ref MESSAGES: Mutex<MessageBundle> = Mutex::new(MessageBundle::default_messages());
    static ref CONFIG: Mutex<NotifConfig> = Mutex::new(NotifConfig::default());
}

fn lock_messages() -> Result<MutexGuard<'static, MessageBundle>, JsValue> {
    MESSAGES
        .lock()
        .map_err(|_| JsValue::from_str("Message bundle lock poisoned"))
}

fn lock_config() -> Result<MutexGuard<'static, NotifConfig>, JsValue> {
    CONFIG
        .lock()
        .map_err(|_| JsValue::from_str("Configuration lock poisoned"))
}

/// Install module configuration (`{ baseUrl }`)
#[wasm_bindgen(js_name = configure)]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: NotifConfig = deserialize(config, "Invalid configuration")?;
    let config = config.normalized();
    wasm_info!("configure: baseUrl='{}'", config.base_url);
    *lock_config()? = config;
    Ok(())
}

/// Overlay the message bundle with a flat JSON object of messages
#[wasm_bindgen(js_name = loadMessages)]
pub fn load_messages(json: &str) -> Result<usize, JsValue> {
    let overlay = MessageBundle::from_json(json)
        .map_err(|e| notif_error(NotifError::Messages(e)))?;
    let mut messages = lock_messages()?;
    messages.merge(overlay);
    wasm_info!("loadMessages: bundle now has {} messages", messages.len());
    Ok(messages.len())
}

/// Restore the embedded English messages
#[wasm_bindgen(js_name = resetMessages)]
pub fn reset_messages() -> Result<(), JsValue> {
    *lock_messages()? = MessageBundle::default_messages();
    Ok(())
}

/// Select the banner for `props`; returns the banner model or `null`
#[wasm_bindgen(js_name = selectBgTaskBanner)]
pub fn select_bg_task_banner(props: JsValue, can_admin: bool) -> Result<JsValue, JsValue> {
    let props: NotifProps = deserialize(props, "Invalid notification props")?;
    let banner = select_banner(
        &props,
        &AdminContext::new(can_admin),
        &*lock_messages()?,
        &*lock_config()?,
    );
    wasm_log!(
        "selectBgTaskBanner: component={} banner={:?}",
        props.component.key,
        banner.as_ref().map(|b| b.kind)
    );
    match banner {
        Some(banner) => serialize(&banner, "Failed to serialize banner"),
        None => Ok(JsValue::NULL),
    }
}

/// Render the notification markup; empty string when nothing applies
#[wasm_bindgen(js_name = renderComponentNavBgTaskNotif)]
pub fn render_component_nav_bg_task_notif(props: JsValue, can_admin: bool) -> Result<String, JsValue> {
    let props: NotifProps = deserialize(props, "Invalid notification props")?;
    render_notif(
        &props,
        &AdminContext::new(can_admin),
        &*lock_messages()?,
        &*lock_config()?,
    )
    .map_err(notif_error)
}

/// Render the notification into the element with id `element_id`
#[wasm_bindgen(js_name = mountComponentNavBgTaskNotif)]
pub fn mount_component_nav_bg_task_notif(
    element_id: &str,
    props: JsValue,
    can_admin: bool,
) -> Result<(), JsValue> {
    let html = render_component_nav_bg_task_notif(props, can_admin)?;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .ok_or_else(|| {
            let err = NotifError::MissingElement(element_id.to_string());
            wasm_error!("mountComponentNavBgTaskNotif: {}", err);
            JsValue::from_str(&err.to_string())
        })?;

    element.set_inner_html(&html);
    Ok(())
}
