//! Custom error types for spendlens
//!
//! The reporting engine itself never fails; every error here originates in
//! the I/O layer around it (config, snapshot loading, import and export).

use thiserror::Error;

/// The main error type for spendlens operations
#[derive(Error, Debug)]
pub enum SpendlensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Input records that break the data model invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error at line {line}: {message}")]
    Import { line: u64, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendlensError {
    /// Create a validation error for a specific record
    pub fn invalid_record(
        entity_type: &'static str,
        identifier: impl AsRef<str>,
        reason: impl AsRef<str>,
    ) -> Self {
        Self::Validation(format!(
            "{} '{}': {}",
            entity_type,
            identifier.as_ref(),
            reason.as_ref()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendlensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SpendlensError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SpendlensError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for spendlens operations
pub type SpendlensResult<T> = Result<T, SpendlensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlensError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_record() {
        let err = SpendlensError::invalid_record("Transaction", "t-1", "amount is negative");
        assert_eq!(
            err.to_string(),
            "Validation error: Transaction 't-1': amount is negative"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_import_error_display() {
        let err = SpendlensError::Import {
            line: 3,
            message: "bad date".into(),
        };
        assert_eq!(err.to_string(), "Import error at line 3: bad date");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlensError = io_err.into();
        assert!(matches!(err, SpendlensError::Io(_)));
    }
}
