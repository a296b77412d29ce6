// SPDX-License-Identifier: MPL-2.0
//! Durable key-value store port definition.

use std::fmt;

/// Errors raised by a preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The store cannot be reached (no data directory, private mode).
    Unavailable(String),
    /// The store refused the write for lack of space.
    QuotaExceeded,
    /// Reading or writing the backing medium failed.
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::QuotaExceeded => write!(f, "Storage quota exceeded"),
            StorageError::Io(msg) => write!(f, "Storage I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Port for a string-keyed durable store, last write wins.
pub trait PreferenceStore: Send + Sync {
    /// Reads the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PreferenceStore) {}

    #[test]
    fn display_is_descriptive() {
        assert_eq!(
            StorageError::QuotaExceeded.to_string(),
            "Storage quota exceeded"
        );
        let err: StorageError = std::io::Error::other("disk").into();
        assert!(err.to_string().contains("disk"));
    }
}
