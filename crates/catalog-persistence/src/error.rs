//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use catalog_model::ModelError;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key is not usable as a storage name.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Serialization error.
    #[error("Failed to serialize catalog data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored value is not valid catalog JSON.
    #[error("Failed to deserialize catalog data under '{key}'")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored catalog parsed but breaks the id invariants.
    #[error("Stored catalog is inconsistent")]
    InconsistentState {
        #[source]
        source: ModelError,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend refused the operation.
    #[error("Storage unavailable for '{key}': {reason}")]
    Unavailable { key: String, reason: String },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey { key } => format!("'{key}' cannot be used as a storage key."),
            Self::Serialization { .. } => {
                "An error occurred while saving the catalog.".to_string()
            }
            Self::Deserialization { .. } => {
                "The saved catalog could not be read. The file may be corrupted.".to_string()
            }
            Self::InconsistentState { source } => {
                format!("The saved catalog has unusable product ids ({source}).")
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the catalog to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Unavailable { reason, .. } => format!("Storage is unavailable: {reason}"),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the data directory exists and is readable.".into())
                } else {
                    Some("Check that you have permission to write to the data directory.".into())
                }
            }
            Self::Deserialization { .. } | Self::InconsistentState { .. } => {
                Some("Run `catalog reset` to start again from the sample catalog.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
            Self::InvalidKey { .. } | Self::Serialization { .. } | Self::Unavailable { .. } => {
                None
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_suggest_checking_permissions() {
        let error = PersistenceError::Io {
            operation: "read",
            path: PathBuf::from("/data/product_catalog_data.json"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            error.user_message(),
            "Could not read the file at /data/product_catalog_data.json"
        );
        assert!(error.suggestion().unwrap().contains("readable"));
    }

    #[test]
    fn corrupt_data_suggests_reset() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = PersistenceError::Deserialization {
            key: "product_catalog_data".into(),
            source,
        };
        assert!(error.suggestion().unwrap().contains("catalog reset"));
    }
}
