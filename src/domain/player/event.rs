// SPDX-License-Identifier: MPL-2.0
//! Events emitted by the native media element.

use super::buffered::BufferedRanges;

/// A discrete notification from the media element.
///
/// Each variant maps to exactly one patch of [`PlayerState`](super::PlayerState).
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Enough data is loaded to render the first frame.
    LoadedData { duration: f64 },
    DurationChange(f64),
    TimeUpdate {
        current_time: f64,
        buffered: BufferedRanges,
    },
    Progress(BufferedRanges),
    VolumeChange { volume: f32, muted: bool },
    Play,
    Pause,
    /// Playback stalled waiting for data.
    Waiting,
    CanPlay,
    /// Loading or decoding failed. `None` uses the default message.
    Error(Option<String>),
    Ended,
    FullscreenChange(bool),
    RateChange(f64),
}
