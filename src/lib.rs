// SPDX-License-Identifier: MPL-2.0
//! `video_showcase` is an embeddable video showcase: a catalog gallery with
//! a language filter, a modal player session driven by media events, and a
//! custom controls surface, rendered with Iced.
//!
//! Playback itself is the host's job. The crate talks to the host through
//! the ports in [`application::port`] and ships headless adapters in
//! [`infrastructure`] (`FFmpeg` probing, `reqwest` URL checks, JSON
//! preference storage).

#![doc(html_root_url = "https://docs.rs/video_showcase/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod service;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
