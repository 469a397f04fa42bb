//! Store-level error types
//!
//! Per-word rejections are [`ValidationError`](crate::core::ValidationError)s and
//! travel inside batch results. The errors here fail an entire operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The import source could not be read; nothing was purged or inserted
    #[error("Invalid dictionary file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Statistics were requested over a store with no records
    #[error("Word store is empty")]
    EmptyCollection,

    /// A stored record's key does not match its word
    #[error("Anagram key '{anagram_key}' does not pair with word '{word}'")]
    KeyMismatch { word: String, anagram_key: String },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub(crate) fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn source_unavailable_message_and_source() {
        let error = StoreError::source_unavailable(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );

        assert_eq!(
            error.to_string(),
            "Invalid dictionary file missing.txt: No such file"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn key_mismatch_message() {
        let error = StoreError::KeyMismatch {
            word: "ruby".to_string(),
            anagram_key: "ybur".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Anagram key 'ybur' does not pair with word 'ruby'"
        );
    }

    #[test]
    fn empty_collection_message() {
        assert_eq!(StoreError::EmptyCollection.to_string(), "Word store is empty");
    }
}
