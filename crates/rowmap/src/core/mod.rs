//! Column-name derivation for row-mapped records.
//!
//! - [`record`]: per-field column metadata and the [`Record`] trait
//! - [`columns`]: the ordered [`ColumnSet`] and its SQL fragment renderings
//! - [`identifier`]: validation for identifiers coming from mapping files

pub mod columns;
pub mod identifier;
pub mod record;

pub use columns::{ColumnSet, SYMBOL_PREFIX};
pub use identifier::validate_identifier;
pub use record::{FieldMeta, Record};
