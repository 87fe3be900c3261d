//! Error types for rendering the notification
//!
//! A failed background task is regular input and never produces one of
//! these; they cover malformed host input and template failures.

use thiserror::Error;

use crate::l10n::L10nError;

#[derive(Debug, Error)]
pub enum NotifError {
    /// Props JSON did not match the expected shape
    #[error("Invalid notification props: {0}")]
    InvalidProps(#[from] serde_json::Error),

    /// Markup template failed to compile or render (indicates a bug)
    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Failed to load messages: {0}")]
    Messages(#[from] L10nError),

    /// Mount target not found in the document
    #[error("Element not found: {0}")]
    MissingElement(String),
}
