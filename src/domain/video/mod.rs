// SPDX-License-Identifier: MPL-2.0
//! Video domain types.
//!
//! This module contains catalog entries, probed metadata and playback value
//! objects that are independent of any presentation or infrastructure
//! concerns.

pub mod frame;
pub mod item;
pub mod metadata;
pub mod newtypes;
pub mod time;

// Re-export commonly used types
pub use frame::RawFrame;
pub use item::{SubtitleTrack, VideoCategory, VideoItem, VideoLanguage, VideoQuality};
pub use metadata::{calculate_aspect_ratio, format_from_url, gcd, VideoMetadata};
pub use newtypes::{ControlsTimeout, SeekStep, Volume};
pub use time::{format_file_size, format_time};
