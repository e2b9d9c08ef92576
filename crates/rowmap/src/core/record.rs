//! Field metadata for row-mapped records.
//!
//! A record type declares, in field order, how each of its fields maps to a
//! database column. Each entry is a [`FieldMeta`] triple:
//!
//! - the field identifier,
//! - an optional explicit column name,
//! - a skip marker for fields that have no column.
//!
//! The list is static, so column derivation never needs runtime reflection.
//! Implement [`Record`] by hand or with the [`record!`](crate::record) macro.

use std::rc::Rc;
use std::sync::Arc;

/// Column mapping for a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMeta<'a> {
    /// Field identifier as declared on the record.
    pub ident: &'a str,

    /// Explicit column name. Empty overrides are ignored.
    pub column: Option<&'a str>,

    /// Field is not mapped to any column.
    pub skip: bool,
}

impl<'a> FieldMeta<'a> {
    /// A field whose column name is its identifier.
    #[must_use]
    pub const fn new(ident: &'a str) -> Self {
        Self {
            ident,
            column: None,
            skip: false,
        }
    }

    /// A field mapped to an explicitly named column.
    #[must_use]
    pub const fn renamed(ident: &'a str, column: &'a str) -> Self {
        Self {
            ident,
            column: Some(column),
            skip: false,
        }
    }

    /// A field excluded from column derivation.
    #[must_use]
    pub const fn skipped(ident: &'a str) -> Self {
        Self {
            ident,
            column: None,
            skip: true,
        }
    }

    /// Resolve the column this field contributes, if any.
    ///
    /// Skipped fields yield `None`. A non-empty override wins over the
    /// field identifier.
    #[must_use]
    pub fn column_name(&self) -> Option<&'a str> {
        if self.skip {
            return None;
        }
        match self.column {
            Some(column) if !column.is_empty() => Some(column),
            _ => Some(self.ident),
        }
    }
}

/// A type whose fields map to database columns.
pub trait Record {
    /// Field metadata in declaration order.
    fn fields() -> &'static [FieldMeta<'static>];
}

impl<R: Record + ?Sized> Record for &R {
    fn fields() -> &'static [FieldMeta<'static>] {
        R::fields()
    }
}

impl<R: Record + ?Sized> Record for &mut R {
    fn fields() -> &'static [FieldMeta<'static>] {
        R::fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields() -> &'static [FieldMeta<'static>] {
        R::fields()
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn fields() -> &'static [FieldMeta<'static>] {
        R::fields()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn fields() -> &'static [FieldMeta<'static>] {
        R::fields()
    }
}

/// Implement [`Record`] for a struct from a field list.
///
/// Each entry is a field name, optionally followed by `=> "column"` for an
/// explicit column name or `=> skip` to exclude the field. Field names are
/// checked against the struct at compile time.
///
/// ```
/// use rowmap::core::ColumnSet;
///
/// #[allow(dead_code)]
/// struct User {
///     id: i64,
///     display_name: String,
///     password_hash: String,
/// }
///
/// rowmap::record!(User {
///     id,
///     display_name => "name",
///     password_hash => skip,
/// });
///
/// let columns = ColumnSet::of::<User>();
/// assert_eq!(columns.names_string(), "id, name");
/// ```
///
/// Generic structs list their type parameters after `impl`. Parameters are
/// plain identifiers; bounds and lifetimes are not accepted.
///
/// ```
/// use rowmap::core::ColumnSet;
///
/// #[allow(dead_code)]
/// struct Tagged<T> {
///     id: i64,
///     payload: T,
/// }
///
/// rowmap::record!(impl<T> Tagged<T> {
///     id,
///     payload => "body",
/// });
///
/// assert_eq!(ColumnSet::of::<Tagged<String>>().names_string(), "id, body");
/// ```
#[macro_export]
macro_rules! record {
    (@field $field:ident) => {
        $crate::core::FieldMeta::new(stringify!($field))
    };
    (@field $field:ident skip) => {
        $crate::core::FieldMeta::skipped(stringify!($field))
    };
    (@field $field:ident $column:literal) => {
        $crate::core::FieldMeta::renamed(stringify!($field), $column)
    };
    (@impl [$($gen:ident),*] $ty:ty { $($field:ident $(=> $spec:tt)?),* }) => {
        impl<$($gen),*> $crate::core::Record for $ty {
            fn fields() -> &'static [$crate::core::FieldMeta<'static>] {
                let _fields_exist = |_record: &$ty| {
                    $(let _ = &_record.$field;)*
                };
                const FIELDS: &[$crate::core::FieldMeta<'static>] = &[
                    $($crate::record!(@field $field $($spec)?)),*
                ];
                FIELDS
            }
        }
    };
    (impl<$($gen:ident),* $(,)?> $ty:ty { $($field:ident $(=> $spec:tt)?),* $(,)? }) => {
        $crate::record!(@impl [$($gen),*] $ty { $($field $(=> $spec)?),* });
    };
    ($ty:ty { $($field:ident $(=> $spec:tt)?),* $(,)? }) => {
        $crate::record!(@impl [] $ty { $($field $(=> $spec)?),* });
    };
}
