//! # Store Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk I/O failure while reading or writing the document
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored bytes are not a valid document. Fatal at request level:
    /// no handler can make progress against a corrupt document.
    #[error("Data corruption in {path}: {reason}")]
    DataCorruption { path: PathBuf, reason: String },

    /// The in-memory document failed to serialize
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corruption(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DataCorruption {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the stored document is unreadable
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corruption_is_flagged() {
        let err = StoreError::corruption("store_data.json", "invalid JSON");
        assert!(err.is_corruption());
        assert!(err.to_string().contains("store_data.json"));
    }

    #[test]
    fn io_error_is_not_corruption() {
        let err = StoreError::io(
            "store_data.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_corruption());
    }
}
