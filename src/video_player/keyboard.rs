// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the player modal.
//!
//! | key | action |
//! |---|---|
//! | `Space`, `k` | play / pause |
//! | `←` / `→` | seek back / forward one step |
//! | `↑` / `↓` | volume up / down one step |
//! | `m` | mute |
//! | `f` | fullscreen |
//! | `Escape` | leave fullscreen, else close |

use iced::keyboard;

/// Host-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Character(char),
}

impl Key {
    /// Converts an iced key. Returns `None` for keys the player ignores.
    #[must_use]
    pub fn from_iced(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Space) => Some(Key::Space),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Key::ArrowLeft),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Key::ArrowRight),
            keyboard::Key::Named(keyboard::key::Named::ArrowUp) => Some(Key::ArrowUp),
            keyboard::Key::Named(keyboard::key::Named::ArrowDown) => Some(Key::ArrowDown),
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Key::Escape),
            keyboard::Key::Character(c) => {
                let mut chars = c.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Key::Character(ch)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
    Escape,
}

impl Shortcut {
    #[must_use]
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Shortcut::TogglePlayback),
            Key::ArrowLeft => Some(Shortcut::SeekBackward),
            Key::ArrowRight => Some(Shortcut::SeekForward),
            Key::ArrowUp => Some(Shortcut::VolumeUp),
            Key::ArrowDown => Some(Shortcut::VolumeDown),
            Key::Escape => Some(Shortcut::Escape),
            Key::Character(c) => match c.to_ascii_lowercase() {
                'k' => Some(Shortcut::TogglePlayback),
                'm' => Some(Shortcut::ToggleMute),
                'f' => Some(Shortcut::ToggleFullscreen),
                _ => None,
            },
        }
    }

    /// Maps an iced key press, ignoring presses with command or alt held.
    #[must_use]
    pub fn from_iced(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Self> {
        if modifiers.command() || modifiers.alt() {
            return None;
        }
        Key::from_iced(key).and_then(Self::from_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_convert() {
        let space = keyboard::Key::Named(keyboard::key::Named::Space);
        assert_eq!(Key::from_iced(&space), Some(Key::Space));

        let tab = keyboard::Key::Named(keyboard::key::Named::Tab);
        assert_eq!(Key::from_iced(&tab), None);
    }

    #[test]
    fn character_keys_convert() {
        let m = keyboard::Key::Character("m".into());
        assert_eq!(Key::from_iced(&m), Some(Key::Character('m')));
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(
            Shortcut::from_key(Key::Character('K')),
            Some(Shortcut::TogglePlayback)
        );
        assert_eq!(
            Shortcut::from_key(Key::Character('F')),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(Shortcut::from_key(Key::Character('x')), None);
    }

    #[test]
    fn modified_presses_are_ignored() {
        let f = keyboard::Key::Character("f".into());
        assert_eq!(
            Shortcut::from_iced(&f, keyboard::Modifiers::default()),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(Shortcut::from_iced(&f, keyboard::Modifiers::COMMAND), None);
    }
}
