//! Non-blank field validators.

use super::{Errors, Validator};

/// Fails when an integer field is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntIsPresent {
    pub name: String,
    pub field: i64,
}

impl IntIsPresent {
    #[must_use]
    pub fn new(name: impl Into<String>, field: impl Into<i64>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
        }
    }
}

impl Validator for IntIsPresent {
    fn is_valid(&self, errors: &mut Errors) {
        if self.field == 0 {
            errors.add(generate_key(&self.name), blank_message(&self.name));
        }
    }
}

/// Fails when a string field is empty or only whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringIsPresent {
    pub name: String,
    pub field: String,
}

impl StringIsPresent {
    #[must_use]
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
        }
    }
}

impl Validator for StringIsPresent {
    fn is_valid(&self, errors: &mut Errors) {
        if self.field.trim().is_empty() {
            errors.add(generate_key(&self.name), blank_message(&self.name));
        }
    }
}

fn blank_message(name: &str) -> String {
    format!("{} can not be blank.", name)
}

/// Derive an error key from a field's display name.
///
/// `"Email Address"` becomes `"email_address"`: trimmed, lowercased, and
/// every run of whitespace, hyphens or underscores collapsed to one `_`.
pub fn generate_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
            continue;
        }
        if pending_separator && !key.is_empty() {
            key.push('_');
        }
        pending_separator = false;
        key.extend(c.to_lowercase());
    }
    key
}
