// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `FFmpeg`,
//! `reqwest` and the filesystem.
//!
//! # Available Adapters
//!
//! - [`ffmpeg`]: Headless probing via `FFmpeg` (implements [`MediaProbe`])
//! - [`fullscreen`]: Fullscreen hosts (implement [`FullscreenHost`])
//! - [`http`]: `HEAD` checks via `reqwest` (implements [`HeadProbe`])
//! - [`storage`]: Preference stores (implement [`PreferenceStore`])
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe
//! [`FullscreenHost`]: crate::application::port::FullscreenHost
//! [`HeadProbe`]: crate::application::port::HeadProbe
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

pub mod ffmpeg;
pub mod fullscreen;
pub mod http;
pub mod storage;

// Re-export main types for convenience
pub use ffmpeg::FfmpegProbe;
pub use fullscreen::{NoFullscreen, WindowFullscreen};
pub use http::ReqwestHeadProbe;
pub use storage::{JsonFileStore, MemoryStore};
