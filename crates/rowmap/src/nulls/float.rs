//! Nullable floating point numbers.

use super::{DriverValue, Scan, Valuer, XmlScalar};
use crate::error::{Result, RowmapError};

/// A nullable `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullFloat32 {
    pub float32: f32,
    /// `false` when the value is NULL.
    pub valid: bool,
}

/// A nullable `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullFloat64 {
    pub float64: f64,
    /// `false` when the value is NULL.
    pub valid: bool,
}

nullable!(@base NullFloat32, float32: f32);
nullable!(NullFloat64, float64: f64);

/// Narrow to `f32`, rejecting finite values that overflow to infinity.
fn narrow_f32(value: f64) -> std::result::Result<f32, String> {
    let narrowed = value as f32;
    if value.is_finite() && narrowed.is_infinite() {
        return Err(format!("{} is out of range for f32", value));
    }
    Ok(narrowed)
}

impl<'de> serde::Deserialize<'de> for NullFloat32 {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        match <Option<f64> as serde::Deserialize>::deserialize(deserializer)? {
            Some(value) => narrow_f32(value)
                .map(Self::new)
                .map_err(serde::de::Error::custom),
            None => Ok(Self::null()),
        }
    }
}

impl Scan for NullFloat32 {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            *self = Self::null();
            return Ok(());
        }
        let wide = value.to_f64("NullFloat32")?;
        let narrowed = narrow_f32(wide).map_err(|e| value.scan_error("NullFloat32", e))?;
        *self = Self::new(narrowed);
        Ok(())
    }
}

impl Valuer for NullFloat32 {
    fn value(&self) -> DriverValue {
        if !self.valid {
            return DriverValue::Null;
        }
        DriverValue::F64(f64::from(self.float32))
    }
}

impl Scan for NullFloat64 {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            *self = Self::null();
            return Ok(());
        }
        *self = Self::new(value.to_f64("NullFloat64")?);
        Ok(())
    }
}

impl Valuer for NullFloat64 {
    fn value(&self) -> DriverValue {
        if !self.valid {
            return DriverValue::Null;
        }
        DriverValue::F64(self.float64)
    }
}

impl XmlScalar for f32 {
    fn from_xml_text(text: &str) -> Result<Self> {
        narrow_f32(parse_xml_float(text)?)
            .map_err(|e| RowmapError::Xml(format!("invalid float {:?}: {}", text.trim(), e)))
    }
}

impl XmlScalar for f64 {
    fn from_xml_text(text: &str) -> Result<Self> {
        parse_xml_float(text)
    }
}

fn parse_xml_float<T>(text: &str) -> Result<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse::<T>()
        .map_err(|e| RowmapError::Xml(format!("invalid float {:?}: {}", text, e)))
}
