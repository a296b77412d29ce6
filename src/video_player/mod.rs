// SPDX-License-Identifier: MPL-2.0
//! Video player session: modal container, controls surface and shortcuts.
//!
//! The module is host-agnostic. A host provides a
//! [`MediaElement`](crate::application::port::MediaElement), forwards the
//! element's [`MediaEvent`](crate::domain::player::MediaEvent)s to
//! [`PlayerModal::dispatch`] and routes pointer and keyboard input to
//! [`PlayerModal::update`] and [`PlayerModal::handle_shortcut`].

mod auto_hide;
pub mod controls;
pub mod keyboard;
mod modal;

pub use auto_hide::AutoHide;
pub use controls::{Command, ControlsSurface, Message, TrackPoint};
pub use keyboard::{Key, Shortcut};
pub use modal::{ModalEvent, PlayerModal, SessionId, PLAY_FAILED_MESSAGE};
