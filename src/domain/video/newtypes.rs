// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_CONTROLS_TIMEOUT_SECS, DEFAULT_SEEK_STEP_SECS, DEFAULT_VOLUME,
    MAX_CONTROLS_TIMEOUT_SECS, MAX_SEEK_STEP_SECS, MAX_VOLUME, MIN_CONTROLS_TIMEOUT_SECS,
    MIN_SEEK_STEP_SECS, MIN_VOLUME, VOLUME_STEP,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use video_showcase::domain::video::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert_eq!(Volume::new(-3.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// Non-finite input (NaN) falls back to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the volume is exactly zero.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == MIN_VOLUME
    }

    /// Increases volume by `step`, clamping to maximum.
    #[must_use]
    pub fn increase_by(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases volume by `step`, clamping to minimum.
    #[must_use]
    pub fn decrease_by(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }

    /// Increases volume by one default step.
    #[must_use]
    pub fn increase(self) -> Self {
        self.increase_by(VOLUME_STEP)
    }

    /// Decreases volume by one default step.
    #[must_use]
    pub fn decrease(self) -> Self {
        self.decrease_by(VOLUME_STEP)
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_VOLUME
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl From<f32> for Volume {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Volume> for f32 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Skip distance in seconds for skip buttons and arrow keys (1–60 s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(DEFAULT_SEEK_STEP_SECS)
    }
}

impl From<f64> for SeekStep {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SeekStep> for f64 {
    fn from(step: SeekStep) -> Self {
        step.0
    }
}

// =============================================================================
// ControlsTimeout
// =============================================================================

/// Idle time in seconds before the controls overlay hides (1–30 s).
///
/// ```
/// use video_showcase::domain::video::ControlsTimeout;
///
/// assert_eq!(ControlsTimeout::default().value(), 3);
/// assert_eq!(ControlsTimeout::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ControlsTimeout(u32);

impl ControlsTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_CONTROLS_TIMEOUT_SECS, MAX_CONTROLS_TIMEOUT_SECS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS_TIMEOUT_SECS)
    }
}

impl From<u32> for ControlsTimeout {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ControlsTimeout> for u32 {
    fn from(timeout: ControlsTimeout) -> Self {
        timeout.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
        assert_abs_diff_eq!(Volume::new(f32::INFINITY).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), MIN_VOLUME);
    }

    #[test]
    fn volume_default_is_eighty_percent() {
        assert_abs_diff_eq!(Volume::default().value(), 0.8);
    }

    #[test]
    fn volume_is_silent_only_at_exact_zero() {
        assert!(Volume::new(0.0).is_silent());
        assert!(!Volume::new(0.0005).is_silent());
    }

    #[test]
    fn volume_steps_clamp_at_bounds() {
        assert_abs_diff_eq!(Volume::new(0.95).increase().value(), 1.0);
        assert_abs_diff_eq!(Volume::new(0.05).decrease().value(), 0.0);
        assert_abs_diff_eq!(Volume::new(0.5).increase().value(), 0.6, epsilon = 0.001);
        assert!(Volume::new(1.0).is_max());
    }

    #[test]
    fn seek_step_clamps_and_defaults() {
        assert_abs_diff_eq!(SeekStep::default().value(), 10.0);
        assert_abs_diff_eq!(SeekStep::new(0.0).value(), MIN_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SeekStep::new(500.0).value(), MAX_SEEK_STEP_SECS);
        assert_eq!(SeekStep::new(2.5).as_duration(), Duration::from_secs_f64(2.5));
    }

    #[test]
    fn controls_timeout_clamps() {
        assert_eq!(ControlsTimeout::new(0).value(), MIN_CONTROLS_TIMEOUT_SECS);
        assert_eq!(ControlsTimeout::new(100).value(), MAX_CONTROLS_TIMEOUT_SECS);
        assert_eq!(ControlsTimeout::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn deserialized_values_are_clamped() {
        let volume: Volume = serde_json::from_str("4.0").expect("parse");
        assert_abs_diff_eq!(volume.value(), 1.0);

        let timeout: ControlsTimeout = serde_json::from_str("0").expect("parse");
        assert_eq!(timeout.value(), MIN_CONTROLS_TIMEOUT_SECS);
    }
}
