// SPDX-License-Identifier: MPL-2.0
//! Observable state of one player session.

use super::buffered::BufferedRanges;
use super::event::MediaEvent;
use crate::domain::video::{VideoQuality, Volume};

/// Message shown when the media element reports an error without details.
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load video";

/// Coarse lifecycle phase derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Failed,
}

/// State of a single playback session.
///
/// Created when a video is selected and discarded when the modal closes.
/// Mutated only by [`apply`](Self::apply) and explicit user commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: Volume,
    pub is_muted: bool,
    pub is_fullscreen: bool,
    pub is_loading: bool,
    pub has_error: bool,
    pub error_message: Option<String>,
    pub playback_rate: f64,
    pub quality: VideoQuality,
    pub show_controls: bool,
    pub buffered: BufferedRanges,
    pub has_ended: bool,
    /// Set once any frame data arrived, used to tell `ready` from `loading`.
    has_loaded: bool,
}

impl PlayerState {
    /// Fresh session state seeded with the given volume.
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            is_muted: false,
            is_fullscreen: false,
            is_loading: true,
            has_error: false,
            error_message: None,
            playback_rate: 1.0,
            quality: VideoQuality::Auto,
            show_controls: true,
            buffered: BufferedRanges::default(),
            has_ended: false,
            has_loaded: false,
        }
    }

    /// Applies a single media event as one state patch.
    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedData { duration } => {
                self.is_loading = false;
                self.has_loaded = true;
                self.duration = sanitize_duration(duration);
            }
            MediaEvent::DurationChange(duration) => {
                self.duration = sanitize_duration(duration);
            }
            MediaEvent::TimeUpdate {
                current_time,
                buffered,
            } => {
                self.current_time = current_time.max(0.0);
                self.buffered = buffered;
            }
            MediaEvent::Progress(buffered) => {
                self.buffered = buffered;
            }
            MediaEvent::VolumeChange { volume, muted } => {
                self.volume = Volume::new(volume);
                self.is_muted = muted;
            }
            MediaEvent::Play => {
                self.is_playing = true;
                self.has_ended = false;
            }
            MediaEvent::Pause => {
                self.is_playing = false;
            }
            MediaEvent::Waiting => {
                self.is_loading = true;
            }
            MediaEvent::CanPlay => {
                self.is_loading = false;
                self.has_loaded = true;
            }
            MediaEvent::Error(message) => {
                self.has_error = true;
                self.is_loading = false;
                self.error_message =
                    Some(message.unwrap_or_else(|| DEFAULT_LOAD_ERROR.to_string()));
            }
            MediaEvent::Ended => {
                self.is_playing = false;
                self.has_ended = true;
            }
            MediaEvent::FullscreenChange(fullscreen) => {
                self.is_fullscreen = fullscreen;
            }
            MediaEvent::RateChange(rate) => {
                self.playback_rate = rate;
            }
        }
    }

    /// Marks the session as failed with `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.apply(MediaEvent::Error(Some(message.into())));
    }

    /// Derived lifecycle phase. The error flag wins over everything else.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.has_error {
            Phase::Failed
        } else if self.has_ended {
            Phase::Ended
        } else if self.is_playing {
            Phase::Playing
        } else if self.is_loading && !self.has_loaded {
            Phase::Loading
        } else if self.current_time > 0.0 {
            Phase::Paused
        } else {
            Phase::Ready
        }
    }

    /// True when the playback is stalled waiting for data after it started.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.is_loading && self.has_loaded
    }

    /// Current position as a fraction of the duration, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Buffered share of the duration, in percent.
    #[must_use]
    pub fn buffered_percentage(&self) -> f64 {
        self.buffered.percentage(self.duration)
    }

    /// Clamps a target position into `[0, duration]`.
    #[must_use]
    pub fn clamp_time(&self, secs: f64) -> f64 {
        let upper = self.duration.max(0.0);
        if secs.is_nan() {
            return 0.0;
        }
        secs.clamp(0.0, upper)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::TimeRange;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn initial_state_is_loading_with_controls_visible() {
        let state = PlayerState::default();
        assert!(state.is_loading);
        assert!(!state.is_playing);
        assert!(!state.has_error);
        assert!(state.show_controls);
        assert_abs_diff_eq!(state.volume.value(), 0.8);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn loaded_data_clears_loading_and_sets_duration() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::LoadedData { duration: 180.0 });
        assert!(!state.is_loading);
        assert_abs_diff_eq!(state.duration, 180.0);
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn non_finite_duration_is_treated_as_unknown() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::DurationChange(f64::INFINITY));
        assert_abs_diff_eq!(state.duration, 0.0);
    }

    #[test]
    fn play_pause_and_ended_cycle() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::CanPlay);
        state.apply(MediaEvent::Play);
        assert_eq!(state.phase(), Phase::Playing);

        state.apply(MediaEvent::TimeUpdate {
            current_time: 12.0,
            buffered: BufferedRanges::default(),
        });
        state.apply(MediaEvent::Pause);
        assert_eq!(state.phase(), Phase::Paused);

        state.apply(MediaEvent::Ended);
        assert!(state.has_ended);
        assert_eq!(state.phase(), Phase::Ended);

        state.apply(MediaEvent::Play);
        assert!(!state.has_ended);
    }

    #[test]
    fn waiting_after_load_is_buffering() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::LoadedData { duration: 60.0 });
        state.apply(MediaEvent::Waiting);
        assert!(state.is_loading);
        assert!(state.is_buffering());
        state.apply(MediaEvent::CanPlay);
        assert!(!state.is_buffering());
    }

    #[test]
    fn error_uses_default_message() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::Error(None));
        assert!(state.has_error);
        assert!(!state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some(DEFAULT_LOAD_ERROR));
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[test]
    fn volume_change_clamps() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::VolumeChange {
            volume: 3.0,
            muted: true,
        });
        assert_abs_diff_eq!(state.volume.value(), 1.0);
        assert!(state.is_muted);
    }

    #[test]
    fn progress_updates_buffered_percentage() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::LoadedData { duration: 200.0 });
        state.apply(MediaEvent::Progress(BufferedRanges::new(vec![TimeRange::new(
            0.0, 50.0,
        )])));
        assert_abs_diff_eq!(state.buffered_percentage(), 25.0);
    }

    #[test]
    fn clamp_time_stays_within_duration() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::LoadedData { duration: 100.0 });
        assert_abs_diff_eq!(state.clamp_time(-5.0), 0.0);
        assert_abs_diff_eq!(state.clamp_time(150.0), 100.0);
        assert_abs_diff_eq!(state.clamp_time(f64::NAN), 0.0);
    }

    #[test]
    fn fullscreen_and_rate_changes_are_mirrored() {
        let mut state = PlayerState::default();
        state.apply(MediaEvent::FullscreenChange(true));
        state.apply(MediaEvent::RateChange(1.5));
        assert!(state.is_fullscreen);
        assert_abs_diff_eq!(state.playback_rate, 1.5);
    }
}
