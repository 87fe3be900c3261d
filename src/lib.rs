//! Navigation Notification WASM Module
//!
//! Renders the background task notification shown in a project's
//! navigation bar: analysis in progress, pending, or failed.

pub mod api;
pub mod config;
pub mod error;
pub mod l10n;
pub mod models;
pub mod notif;
pub mod render;
pub mod renderers;
pub mod urls;

// Re-export commonly used types
pub use config::NotifConfig;
pub use error::NotifError;
pub use l10n::MessageBundle;
pub use models::*;
pub use notif::{select_banner, Banner, BannerIcon, BannerKind, BannerLevel, BannerLink, BannerMessage};
pub use render::{render_from_json, render_notif};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    init_logger();

    log::info!("Navigation notification WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}
