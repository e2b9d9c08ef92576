//! Nullable 32-bit integers.

use super::{DriverValue, Scan, Valuer, XmlScalar};
use crate::error::{Result, RowmapError};

/// A nullable `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullInt32 {
    pub int32: i32,
    /// `false` when the value is NULL.
    pub valid: bool,
}

/// A nullable `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullUInt32 {
    pub uint32: u32,
    /// `false` when the value is NULL.
    pub valid: bool,
}

nullable!(NullInt32, int32: i32);
nullable!(NullUInt32, uint32: u32);

impl Scan for NullInt32 {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            *self = Self::null();
            return Ok(());
        }
        let wide = value.to_i64("NullInt32")?;
        let int32 = i32::try_from(wide)
            .map_err(|_| value.scan_error("NullInt32", "value out of range for i32"))?;
        *self = Self::new(int32);
        Ok(())
    }
}

impl Valuer for NullInt32 {
    fn value(&self) -> DriverValue {
        if !self.valid {
            return DriverValue::Null;
        }
        DriverValue::I64(i64::from(self.int32))
    }
}

impl Scan for NullUInt32 {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            *self = Self::null();
            return Ok(());
        }
        let wide = value.to_i64("NullUInt32")?;
        let uint32 = u32::try_from(wide)
            .map_err(|_| value.scan_error("NullUInt32", "value out of range for u32"))?;
        *self = Self::new(uint32);
        Ok(())
    }
}

impl Valuer for NullUInt32 {
    fn value(&self) -> DriverValue {
        if !self.valid {
            return DriverValue::Null;
        }
        DriverValue::I64(i64::from(self.uint32))
    }
}

impl XmlScalar for i32 {
    fn from_xml_text(text: &str) -> Result<Self> {
        parse_xml_int(text)
    }
}

impl XmlScalar for u32 {
    fn from_xml_text(text: &str) -> Result<Self> {
        parse_xml_int(text)
    }
}

/// Empty character data decodes to zero.
fn parse_xml_int<T>(text: &str) -> Result<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse::<T>()
        .map_err(|e| RowmapError::Xml(format!("invalid integer {:?}: {}", text, e)))
}
