// SPDX-License-Identifier: MPL-2.0
//! Remote resource check port definition.

use crate::domain::error::VideoError;
use futures_util::future::BoxFuture;

/// The parts of a `HEAD` response the service looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    pub status: u16,
    pub content_type: Option<String>,
}

impl HeadResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True if the content type starts with `video/`.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("video/"))
    }
}

/// Port for issuing credential-less `HEAD` requests.
pub trait HeadProbe: Send + Sync {
    /// Sends `HEAD url`.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::NetworkError`] if no response was received.
    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HeadResponse, VideoError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>) -> HeadResponse {
        HeadResponse {
            status,
            content_type: content_type.map(str::to_string),
        }
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(response(200, None).is_success());
        assert!(response(206, None).is_success());
        assert!(!response(304, None).is_success());
        assert!(!response(404, None).is_success());
    }

    #[test]
    fn video_content_type_is_case_insensitive() {
        assert!(response(200, Some("video/mp4")).is_video());
        assert!(response(200, Some("Video/WebM; codecs=vp9")).is_video());
        assert!(!response(200, Some("text/html")).is_video());
        assert!(!response(200, None).is_video());
    }
}
