// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Besides `std` it only depends on `serde` derives, so everything here is
//! testable without a media backend.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`VideoError`](error::VideoError))
//! - [`player`]: Session state ([`PlayerState`](player::PlayerState),
//!   [`MediaEvent`](player::MediaEvent), [`BufferedRanges`](player::BufferedRanges))
//! - [`video`]: Catalog and playback types ([`VideoItem`](video::VideoItem),
//!   [`VideoMetadata`](video::VideoMetadata), [`Volume`](video::Volume))

pub mod error;
pub mod player;
pub mod video;
