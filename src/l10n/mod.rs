//! Message lookup for the notification texts
//!
//! A `MessageBundle` is a flat key/value table. Lookups join their key parts
//! with `.`, and a missing key falls back to the key itself so an absent
//! translation is visible rather than blank.

pub mod properties;

use std::collections::HashMap;

use thiserror::Error;

pub use properties::parse_properties;

/// Errors raised while loading a message bundle
#[derive(Debug, Error)]
pub enum L10nError {
    #[error("Invalid messages JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Message '{0}' is not a string")]
    NonStringValue(String),

    #[error("Invalid escape sequence on line {line}: {detail}")]
    InvalidEscape { line: usize, detail: String },
}

/// Localized messages keyed by dotted message key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// English core messages embedded in the module
    pub fn default_messages() -> Self {
        // Embedded resource; parsed in tests
        Self::from_properties(include_str!("core.properties")).unwrap_or_else(|e| {
            log::error!("embedded core messages failed to parse: {}", e);
            Self::new()
        })
    }

    /// Parse a Java-style `.properties` document
    pub fn from_properties(text: &str) -> Result<Self, L10nError> {
        Ok(Self {
            messages: parse_properties(text)?,
        })
    }

    /// Parse a flat JSON object of `key: "message"` pairs
    pub fn from_json(text: &str) -> Result<Self, L10nError> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut messages = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            match value {
                serde_json::Value::String(message) => {
                    messages.insert(key, message);
                }
                _ => return Err(L10nError::NonStringValue(key)),
            }
        }
        Ok(Self { messages })
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Overlay `other` on top of this bundle; keys in `other` win
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Look up the message for the joined key, or return the key itself
    pub fn translate(&self, keys: &[&str]) -> String {
        let key = keys.join(".");
        match self.messages.get(&key) {
            Some(message) if !message.is_empty() => message.clone(),
            _ => key,
        }
    }

    /// Substitute `{0}`, `{1}`, ... in the message for `key`
    ///
    /// Each placeholder is replaced once, in order. When the key is unknown
    /// the result is the key followed by the parameters, dot-separated.
    pub fn translate_with_parameters(&self, key: &str, parameters: &[&str]) -> String {
        match self.messages.get(key) {
            Some(message) if !message.is_empty() => parameters
                .iter()
                .enumerate()
                .fold(message.clone(), |acc, (i, param)| {
                    acc.replacen(&format!("{{{}}}", i), param, 1)
                }),
            _ => std::iter::once(key)
                .chain(parameters.iter().copied())
                .collect::<Vec<_>>()
                .join("."),
        }
    }

    pub fn has_message(&self, keys: &[&str]) -> bool {
        self.messages.contains_key(&keys.join("."))
    }
}
