//! Input models for the navigation bar notification
//!
//! These mirror the JSON shapes the host page already holds for a component
//! and its current background task. They are read-only inputs: the module
//! never mutates or stores them between renders.

pub mod component;
pub mod task;
pub mod props;

pub use component::{Component, ComponentConfiguration};
pub use task::{Task, TaskStatus};
pub use props::{AdminContext, NotifProps};
