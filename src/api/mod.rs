//! Navigation notification WASM API
//!
//! JavaScript-facing entry points. The host page configures the module once,
//! optionally loads its own message bundle, then calls the render functions
//! whenever the task status it polls changes.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde/JsValue conversion
//! - `notif`: configuration, messages, select/render/mount operations

pub mod helpers;
pub mod notif;

pub use notif::{
    configure, load_messages, mount_component_nav_bg_task_notif,
    render_component_nav_bg_task_notif, reset_messages, select_bg_task_banner,
};
