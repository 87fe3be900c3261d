//! Renderers for notification banners
//!
//! - `html`: navigation bar markup via a Mustache template

pub mod html;

pub use html::{render_banner, NavBarNotifContext};
