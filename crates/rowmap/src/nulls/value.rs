//! Driver-side value representation.
//!
//! [`DriverValue`] is what a database driver hands to a scanner and accepts
//! from a valuer. Integers travel as `i64` and floats as `f64` regardless of
//! the column width, mirroring how most drivers normalize values.

use crate::error::{Result, RowmapError};

/// A value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Any integer column.
    I64(i64),

    /// Any floating point column.
    F64(f64),

    /// Text data.
    Text(String),

    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl DriverValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Convert to an integer. Text must be a base-10 integer and floats must
    /// have no fractional part.
    pub(crate) fn to_i64(&self, target: &'static str) -> Result<i64> {
        match self {
            DriverValue::I64(v) => Ok(*v),
            DriverValue::F64(v) => {
                if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 {
                    Ok(*v as i64)
                } else {
                    Err(self.scan_error(target, "not an integer"))
                }
            }
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                let text = self.to_text(target)?;
                text.parse::<i64>()
                    .map_err(|e| self.scan_error(target, e.to_string()))
            }
            DriverValue::Bool(_) | DriverValue::Null => {
                Err(self.scan_error(target, "unsupported conversion"))
            }
        }
    }

    /// Convert to a float.
    pub(crate) fn to_f64(&self, target: &'static str) -> Result<f64> {
        match self {
            DriverValue::F64(v) => Ok(*v),
            DriverValue::I64(v) => Ok(*v as f64),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                let text = self.to_text(target)?;
                text.parse::<f64>()
                    .map_err(|e| self.scan_error(target, e.to_string()))
            }
            DriverValue::Bool(_) | DriverValue::Null => {
                Err(self.scan_error(target, "unsupported conversion"))
            }
        }
    }

    /// Render as text. Bytes must be valid UTF-8.
    pub(crate) fn to_text(&self, target: &'static str) -> Result<String> {
        match self {
            DriverValue::Text(s) => Ok(s.clone()),
            DriverValue::Bytes(b) => String::from_utf8(b.clone())
                .map_err(|e| self.scan_error(target, e.to_string())),
            DriverValue::I64(v) => Ok(v.to_string()),
            DriverValue::F64(v) => Ok(v.to_string()),
            DriverValue::Bool(v) => Ok(v.to_string()),
            DriverValue::Null => Err(self.scan_error(target, "unsupported conversion")),
        }
    }

    pub(crate) fn scan_error(&self, target: &'static str, message: impl Into<String>) -> RowmapError {
        RowmapError::scan(target, format!("{:?}", self), message)
    }
}

impl From<bool> for DriverValue {
    fn from(v: bool) -> Self {
        DriverValue::Bool(v)
    }
}

impl From<i32> for DriverValue {
    fn from(v: i32) -> Self {
        DriverValue::I64(i64::from(v))
    }
}

impl From<u32> for DriverValue {
    fn from(v: u32) -> Self {
        DriverValue::I64(i64::from(v))
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::I64(v)
    }
}

impl From<f32> for DriverValue {
    fn from(v: f32) -> Self {
        DriverValue::F64(f64::from(v))
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        DriverValue::F64(v)
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        DriverValue::Text(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        DriverValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(v: Vec<u8>) -> Self {
        DriverValue::Bytes(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DriverValue::Null, Into::into)
    }
}
