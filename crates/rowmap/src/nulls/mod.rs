//! Nullable scalar types.
//!
//! Each type pairs a value with a `valid` flag (`valid == false` means SQL
//! NULL) and round-trips through:
//!
//! - the driver value protocol ([`Scan`] / [`Valuer`] over [`DriverValue`]),
//! - JSON via serde (`null` when invalid),
//! - XML via `from_xml` (an attribute named `nil` marks the value invalid).
//!
//! ```
//! use rowmap::nulls::{DriverValue, NullInt32, Scan, Valuer};
//!
//! let mut age = NullInt32::default();
//! age.scan(&DriverValue::I64(42)).unwrap();
//! assert_eq!(age, NullInt32::new(42));
//! assert_eq!(age.value(), DriverValue::I64(42));
//! assert_eq!(serde_json::to_string(&NullInt32::default()).unwrap(), "null");
//! ```

use crate::error::Result;

/// Populate a value from what the driver returned.
pub trait Scan {
    /// Replace the current value with `value`.
    ///
    /// NULL resets to the zero value and marks it invalid. On error the
    /// current value is left untouched.
    fn scan(&mut self, value: &DriverValue) -> Result<()>;
}

/// Produce the value handed to the driver.
pub trait Valuer {
    /// The driver representation, `DriverValue::Null` when the value is
    /// not valid.
    fn value(&self) -> DriverValue;
}

/// Text conversion used when decoding XML character data.
trait XmlScalar: Sized {
    fn from_xml_text(text: &str) -> Result<Self>;
}

/// Shared constructors, conversions and serde impls for a nullable type.
///
/// The `@base` form leaves `Deserialize` to the caller.
macro_rules! nullable {
    ($name:ident, $field:ident: $ty:ty) => {
        nullable!(@base $name, $field: $ty);

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                <Option<$ty> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
    (@base $name:ident, $field:ident: $ty:ty) => {
        impl $name {
            /// A valid (non-NULL) value.
            #[must_use]
            pub fn new($field: $ty) -> Self {
                Self {
                    $field,
                    valid: true,
                }
            }

            /// A NULL value.
            #[must_use]
            pub fn null() -> Self {
                Self::default()
            }

            /// The value if it is not NULL.
            #[must_use]
            pub fn get(&self) -> Option<&$ty> {
                self.valid.then_some(&self.$field)
            }

            /// Decode a single XML element.
            pub fn from_xml(xml: &str) -> $crate::error::Result<Self> {
                let element = $crate::nulls::xml::decode_element(xml)?;
                Ok(Self {
                    $field: <$ty as $crate::nulls::XmlScalar>::from_xml_text(&element.text)?,
                    valid: !element.nil,
                })
            }
        }

        impl From<$ty> for $name {
            fn from($field: $ty) -> Self {
                Self::new($field)
            }
        }

        impl From<Option<$ty>> for $name {
            fn from(value: Option<$ty>) -> Self {
                value.map_or_else(Self::null, Self::new)
            }
        }

        impl From<$name> for Option<$ty> {
            fn from(value: $name) -> Self {
                value.valid.then_some(value.$field)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                if self.valid {
                    serializer.serialize_some(&self.$field)
                } else {
                    serializer.serialize_none()
                }
            }
        }
    };
}

mod float;
mod int;
mod string;
mod value;
mod xml;

pub use float::{NullFloat32, NullFloat64};
pub use int::{NullInt32, NullUInt32};
pub use string::NullString;
pub use value::DriverValue;
