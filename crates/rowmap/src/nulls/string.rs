//! Nullable strings.

use super::{DriverValue, Scan, Valuer, XmlScalar};
use crate::error::Result;

/// A nullable `String`.
///
/// Unlike the numeric types, the driver value is derived from the content:
/// an empty string is written as NULL and any other string is written as
/// text, whatever `valid` says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullString {
    pub string: String,
    /// `false` when the value is NULL.
    pub valid: bool,
}

nullable!(NullString, string: String);

impl Scan for NullString {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            *self = Self::null();
            return Ok(());
        }
        *self = Self::new(value.to_text("NullString")?);
        Ok(())
    }
}

impl Valuer for NullString {
    fn value(&self) -> DriverValue {
        if self.string.is_empty() {
            return DriverValue::Null;
        }
        DriverValue::Text(self.string.clone())
    }
}

impl From<&str> for NullString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl XmlScalar for String {
    fn from_xml_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}
