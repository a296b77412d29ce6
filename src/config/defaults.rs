// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Playback volume bounds and keyboard step
//! - **Seek**: Skip button / arrow key step
//! - **Controls**: Auto-hide timeout for the controls overlay
//! - **Thumbnail**: Frame capture offset and JPEG quality
//! - **Quality**: Display-width thresholds for the quality heuristic

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume when no preference was persisted.
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per arrow key press (10%).
pub const VOLUME_STEP: f32 = 0.1;

/// Volume restored when unmuting from an exact zero volume.
pub const UNMUTE_FALLBACK_VOLUME: f32 = 0.5;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default skip distance for skip buttons and arrow keys (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum skip distance (in seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum skip distance (in seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default idle time before the controls hide during playback (in seconds).
pub const DEFAULT_CONTROLS_TIMEOUT_SECS: u32 = 3;

/// Minimum controls timeout (in seconds).
pub const MIN_CONTROLS_TIMEOUT_SECS: u32 = 1;

/// Maximum controls timeout (in seconds).
pub const MAX_CONTROLS_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Offset of the captured thumbnail frame (in seconds).
pub const DEFAULT_THUMBNAIL_OFFSET_SECS: f64 = 1.0;

/// JPEG quality used for generated thumbnails (0.8 on a 0–1 scale).
pub const THUMBNAIL_JPEG_QUALITY: u8 = 80;

// ==========================================================================
// Quality Heuristic Defaults
// ==========================================================================

/// Display width at or above which 1080p is preferred.
pub const FULL_HD_MIN_WIDTH: u32 = 1920;

/// Display width at or above which 720p is preferred.
pub const HD_MIN_WIDTH: u32 = 1280;
