//! Field validation.
//!
//! Validators append messages to an [`Errors`] collection keyed by field.
//! Run a batch of them with [`validate`].

mod validators;

pub use validators::{generate_key, IntIsPresent, StringIsPresent};

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validation messages grouped by field key, in the order keys were first
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errors {
    errors: IndexMap<String, Vec<String>>,
}

impl Errors {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `key`.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether any message was recorded.
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of keys with messages.
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Keys with messages, in report order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .errors
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join("\n"))
    }
}

impl std::error::Error for Errors {}

/// A single check against a field value.
pub trait Validator {
    /// Record any problems in `errors`.
    fn is_valid(&self, errors: &mut Errors);
}

/// Run every validator and collect their messages.
pub fn validate(validators: &[&dyn Validator]) -> Errors {
    let mut errors = Errors::new();
    for validator in validators {
        validator.is_valid(&mut errors);
    }
    errors
}
