// SPDX-License-Identifier: MPL-2.0
//! Video service error taxonomy.

use std::fmt;

/// Failure reported by the video utility service or one of its ports.
///
/// Each variant carries a human-readable message; [`VideoError::code`]
/// returns the stable machine code (`LOAD_FAILED`, `DECODE_ERROR`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// Resource could not be opened (bad URL, network failure, CORS rejection).
    LoadFailed(String),

    /// Resource opened but metadata or frame extraction failed.
    DecodeError(String),

    /// Transport-level failure distinct from a load failure.
    NetworkError(String),

    /// Codec or container explicitly rejected.
    UnsupportedFormat(String),

    /// Fullscreen request or exit rejected by the host.
    PermissionDenied(String),

    /// Durable storage ran out of space.
    QuotaExceeded(String),
}

impl VideoError {
    /// Returns the stable error code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            VideoError::LoadFailed(_) => "LOAD_FAILED",
            VideoError::DecodeError(_) => "DECODE_ERROR",
            VideoError::NetworkError(_) => "NETWORK_ERROR",
            VideoError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            VideoError::PermissionDenied(_) => "PERMISSION_DENIED",
            VideoError::QuotaExceeded(_) => "QUOTA_EXCEEDED",
        }
    }

    /// Returns the message attached to the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            VideoError::LoadFailed(msg)
            | VideoError::DecodeError(msg)
            | VideoError::NetworkError(msg)
            | VideoError::UnsupportedFormat(msg)
            | VideoError::PermissionDenied(msg)
            | VideoError::QuotaExceeded(msg) => msg,
        }
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for VideoError {}
