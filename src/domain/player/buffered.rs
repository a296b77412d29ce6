// SPDX-License-Identifier: MPL-2.0
//! Buffered time ranges reported by the media element.

use serde::{Deserialize, Serialize};

/// A contiguous span of buffered media, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Ordered list of buffered ranges, as the media element reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BufferedRanges(Vec<TimeRange>);

impl BufferedRanges {
    #[must_use]
    pub fn new(ranges: Vec<TimeRange>) -> Self {
        Self(ranges)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeRange> {
        self.0.iter()
    }

    /// End of the last range, if any.
    #[must_use]
    pub fn last_end(&self) -> Option<f64> {
        self.0.last().map(|range| range.end)
    }

    /// Percentage of `duration` covered up to the end of the last range.
    ///
    /// Returns 0 with no ranges or an unknown/zero duration. The result is
    /// clamped to `[0, 100]`.
    #[must_use]
    pub fn percentage(&self, duration: f64) -> f64 {
        if !duration.is_finite() || duration <= 0.0 {
            return 0.0;
        }
        match self.last_end() {
            Some(end) if end.is_finite() => (100.0 * end / duration).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }
}

impl From<Vec<TimeRange>> for BufferedRanges {
    fn from(ranges: Vec<TimeRange>) -> Self {
        Self(ranges)
    }
}
