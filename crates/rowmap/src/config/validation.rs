//! Configuration validation.

use std::collections::HashSet;

use tracing::warn;

use super::{Config, RecordConfig};
use crate::core::validate_identifier;
use crate::error::{Result, RowmapError};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.records.is_empty() {
        return Err(RowmapError::Config(
            "records must declare at least one record".into(),
        ));
    }

    let mut seen = HashSet::new();
    for record in &config.records {
        if record.name.trim().is_empty() {
            return Err(RowmapError::Config("record name is required".into()));
        }
        if !seen.insert(record.name.as_str()) {
            return Err(RowmapError::Config(format!(
                "record '{}' is declared more than once",
                record.name
            )));
        }
        validate_record(record)?;
    }

    Ok(())
}

fn validate_record(record: &RecordConfig) -> Result<()> {
    let mut columns: HashSet<&str> = HashSet::new();

    for field in &record.fields {
        validate_identifier(&field.field).map_err(|e| {
            RowmapError::Config(format!("record '{}': field: {}", record.name, e))
        })?;

        if let Some(column) = field.column.as_deref().filter(|c| !c.is_empty()) {
            validate_identifier(column).map_err(|e| {
                RowmapError::Config(format!(
                    "record '{}': column for field '{}': {}",
                    record.name, field.field, e
                ))
            })?;
        }

        // Duplicates are merged into the first occurrence when deriving.
        if let Some(column) = field.meta().column_name() {
            if !columns.insert(column) {
                warn!(
                    "Record '{}': field '{}' maps to column '{}' which another field already uses",
                    record.name, field.field, column
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    fn field(name: &str, column: Option<&str>) -> FieldConfig {
        FieldConfig {
            field: name.to_string(),
            column: column.map(str::to_string),
            skip: false,
        }
    }

    fn valid_config() -> Config {
        Config {
            records: vec![RecordConfig {
                name: "users".to_string(),
                fields: vec![field("FirstName", Some("first_name")), field("LastName", None)],
            }],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_no_records() {
        let config = Config { records: vec![] };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_record_name() {
        let mut config = valid_config();
        config.records[0].name = " ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_record_name() {
        let mut config = valid_config();
        config.records.push(config.records[0].clone());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_empty_field_identifier() {
        let mut config = valid_config();
        config.records[0].fields.push(field("", None));
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_column_with_null_byte() {
        let mut config = valid_config();
        config.records[0].fields.push(field("Email", Some("email\0")));
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("null byte"));
    }

    #[test]
    fn test_empty_column_override_is_allowed() {
        let mut config = valid_config();
        config.records[0].fields.push(field("Email", Some("")));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_duplicate_columns_are_accepted() {
        let mut config = valid_config();
        config.records[0]
            .fields
            .push(field("GivenName", Some("first_name")));
        assert!(validate(&config).is_ok());
        assert_eq!(
            config.records[0].column_set().names(),
            ["first_name", "LastName"]
        );
    }
}
