//! Error types for the rowmap library.

use thiserror::Error;

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;

/// Exit code for value conversion errors.
pub const EXIT_CONVERSION_ERROR: u8 = 2;

/// Exit code for IO errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for rowmap operations.
#[derive(Error, Debug)]
pub enum RowmapError {
    /// Configuration error (invalid mapping file, bad identifiers, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A driver value could not be scanned into a nullable type
    #[error("Cannot scan {value} into {target}: {message}")]
    Scan {
        target: &'static str,
        value: String,
        message: String,
    },

    /// XML decoding error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RowmapError {
    /// Create a Scan error
    pub fn scan(
        target: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RowmapError::Scan {
            target,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Process exit code for this error category
    pub fn exit_code(&self) -> u8 {
        match self {
            RowmapError::Config(_) | RowmapError::Yaml(_) => EXIT_CONFIG_ERROR,
            RowmapError::Io(_) => EXIT_IO_ERROR,
            RowmapError::Scan { .. } | RowmapError::Xml(_) | RowmapError::Json(_) => {
                EXIT_CONVERSION_ERROR
            }
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

impl From<quick_xml::Error> for RowmapError {
    fn from(err: quick_xml::Error) -> Self {
        RowmapError::Xml(err.to_string())
    }
}

/// Result type alias for rowmap operations.
pub type Result<T> = std::result::Result<T, RowmapError>;
