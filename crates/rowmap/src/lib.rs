//! # rowmap
//!
//! Data-access helpers for applications that map records to relational rows.
//!
//! - **Column sets** derived from a record's field metadata, rendered into
//!   select lists, bind-parameter lists and update assignments
//! - **Nullable scalars** that round-trip through driver values, JSON and XML
//! - **Validators** for non-blank fields
//! - **Mapping files** declaring record fields in YAML
//!
//! ## Example
//!
//! ```rust
//! use rowmap::{ColumnSet, FieldMeta};
//!
//! let mut columns = ColumnSet::from_fields([
//!     FieldMeta::renamed("FirstName", "first_name"),
//!     FieldMeta::new("LastName"),
//!     FieldMeta::skipped("Password"),
//! ]);
//! columns.add(["updated_at"]);
//!
//! let sql = format!(
//!     "UPDATE users SET {} WHERE id = :id",
//!     columns.updates_string()
//! );
//! assert_eq!(
//!     sql,
//!     "UPDATE users SET first_name = :first_name, LastName = :LastName, \
//!      updated_at = :updated_at WHERE id = :id"
//! );
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod nulls;
pub mod validate;

// Re-exports for convenient access
pub use crate::core::{ColumnSet, FieldMeta, Record, SYMBOL_PREFIX};
pub use config::{Config, FieldConfig, RecordConfig};
pub use error::{Result, RowmapError};
pub use nulls::{
    DriverValue, NullFloat32, NullFloat64, NullInt32, NullString, NullUInt32, Scan, Valuer,
};
pub use validate::{validate, Errors, Validator};
