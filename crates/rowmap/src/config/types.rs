//! Record mapping configuration types.

use serde::{Deserialize, Serialize};

use crate::core::{ColumnSet, FieldMeta};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Record mappings, in file order.
    pub records: Vec<RecordConfig>,
}

impl Config {
    /// Look up a record mapping by name.
    pub fn record(&self, name: &str) -> Option<&RecordConfig> {
        self.records.iter().find(|record| record.name == name)
    }
}

/// Column mapping for one record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Record name used to refer to this mapping.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl RecordConfig {
    /// Field metadata in declaration order.
    pub fn field_metas(&self) -> impl Iterator<Item = FieldMeta<'_>> {
        self.fields.iter().map(FieldConfig::meta)
    }

    /// Derive the record's column set.
    pub fn column_set(&self) -> ColumnSet {
        ColumnSet::from_fields(self.field_metas())
    }
}

/// Column mapping for one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    /// Field identifier.
    pub field: String,

    /// Explicit column name (default: the field identifier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Exclude the field from the column set (default: false).
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip: bool,
}

impl FieldConfig {
    /// Borrow this entry as field metadata.
    pub fn meta(&self) -> FieldMeta<'_> {
        FieldMeta {
            ident: &self.field,
            column: self.column.as_deref(),
            skip: self.skip,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
