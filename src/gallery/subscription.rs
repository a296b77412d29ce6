// SPDX-License-Identifier: MPL-2.0
//! Native event subscriptions of the gallery section.
//!
//! Keyboard presses nobody captured become player shortcuts while the modal
//! is open, and a timer drives the controls auto-hide while it counts down.

use super::Message;
use crate::video_player::Shortcut;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval of the auto-hide timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Maps a key press to a shortcut message.
///
/// Presses captured by a focused widget are left alone.
#[must_use]
pub fn route_key(
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
    status: event::Status,
) -> Option<Message> {
    match status {
        event::Status::Ignored => Shortcut::from_iced(key, modifiers).map(Message::Shortcut),
        event::Status::Captured => None,
    }
}

fn keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            route_key(key, *modifiers, status)
        }
        _ => None,
    })
}

/// Builds the subscription for the current section state.
///
/// `modal_open` enables the keyboard shortcuts; `counting_down` enables the
/// timer feeding [`Message::Tick`].
pub fn create(modal_open: bool, counting_down: bool) -> Subscription<Message> {
    let keys = if modal_open {
        keyboard_subscription()
    } else {
        Subscription::none()
    };

    let tick = if counting_down {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([keys, tick])
}
