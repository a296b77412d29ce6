// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! embedding hosts implement. These traits use only domain types, ensuring
//! the service and player remain independent of concrete backends.
//!
//! # Available Ports
//!
//! - [`fullscreen`]: Host fullscreen variants and picture-in-picture
//! - [`media`]: The native media element driven by the player
//! - [`network`]: `HEAD` checks for remote resources
//! - [`probe`]: Headless metadata, frame capture and codec checks
//! - [`storage`]: Durable preference store
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Traits shared across tasks are `Send + Sync`
//! - Methods return `Result` with domain error types
//! - No `async fn`; the network port returns a boxed future instead

pub mod fullscreen;
pub mod media;
pub mod network;
pub mod probe;
pub mod storage;

// Re-export main types for convenience
pub use fullscreen::{FullscreenHost, FullscreenMethod, SurfaceId};
pub use media::MediaElement;
pub use network::{HeadProbe, HeadResponse};
pub use probe::{FormatSupport, MediaProbe, ProbedStream};
pub use storage::{PreferenceStore, StorageError};
