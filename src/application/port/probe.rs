// SPDX-License-Identifier: MPL-2.0
//! Headless media probe port definition.
//!
//! This module defines the [`MediaProbe`] trait: opening a resource without
//! rendering it, to read its properties, grab a frame or check that it can
//! play through.
//!
//! # Design Notes
//!
//! - Methods are blocking; async callers move them to a blocking thread
//! - Open failures map to [`VideoError::LoadFailed`], failures after the
//!   resource was opened map to [`VideoError::DecodeError`]

use crate::domain::error::VideoError;
use crate::domain::video::RawFrame;

/// Answer to "can this container/codec be played?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSupport {
    /// Definitely not playable.
    No,
    /// Container is known, codecs unchecked.
    Maybe,
    /// Container and every listed codec are known.
    Probably,
}

impl FormatSupport {
    /// Anything short of a definite "no" counts as playable.
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, FormatSupport::No)
    }
}

/// Raw properties reported by a probe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProbedStream {
    pub width: u32,
    pub height: u32,
    /// Duration in seconds, zero when unknown.
    pub duration: f64,
    pub file_size: Option<u64>,
    pub codecs: Vec<String>,
    pub bitrate: Option<u64>,
    pub frame_rate: Option<f64>,
}

/// Port for headless media inspection.
pub trait MediaProbe: Send + Sync {
    /// Opens `source` and reads its stream properties.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be opened,
    /// [`VideoError::DecodeError`] if properties cannot be extracted.
    fn probe(&self, source: &str) -> Result<ProbedStream, VideoError>;

    /// Decodes the frame shown at `at_secs`.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be opened,
    /// [`VideoError::DecodeError`] if no frame could be produced.
    fn capture_frame(&self, source: &str, at_secs: f64) -> Result<RawFrame, VideoError>;

    /// Reports whether a MIME type (optionally with `codecs=`) is playable.
    fn can_play_type(&self, mime: &str) -> FormatSupport;

    /// Returns once `source` can play through to the end.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be buffered.
    fn preload(&self, source: &str) -> Result<(), VideoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MediaProbe) {}

    #[test]
    fn only_no_is_unplayable() {
        assert!(!FormatSupport::No.is_playable());
        assert!(FormatSupport::Maybe.is_playable());
        assert!(FormatSupport::Probably.is_playable());
    }
}
