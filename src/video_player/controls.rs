// SPDX-License-Identifier: MPL-2.0
//! Controls surface: turns pointer and keyboard input into player commands.
//!
//! The surface owns the transient interaction state (progress drag, overlay
//! visibility). It never touches the media element; the modal executes the
//! [`Command`]s it returns.

use super::auto_hide::AutoHide;
use super::keyboard::Shortcut;
use crate::config::{PlayerConfig, UNMUTE_FALLBACK_VOLUME};
use crate::domain::player::PlayerState;
use crate::domain::video::{SeekStep, Volume};
use std::time::Instant;

/// Pointer position along a track (progress bar or volume column).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Distance from the track origin, in logical pixels.
    pub offset: f32,
    /// Track length, in logical pixels.
    pub extent: f32,
}

impl TrackPoint {
    #[must_use]
    pub fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }

    /// Position as a fraction of the track, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        if !(self.extent > 0.0) || !self.offset.is_finite() {
            return 0.0;
        }
        f64::from(self.offset / self.extent).clamp(0.0, 1.0)
    }
}

/// Input the controls surface understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Pointer pressed on the progress bar.
    ProgressPressed(TrackPoint),
    /// Pointer moved over the progress bar.
    ProgressMoved(TrackPoint),
    ProgressReleased,
    /// Pointer left the progress bar; ends any drag.
    PointerLeft,
    /// Pointer moved over the vertical volume track. The offset counts
    /// from the top.
    VolumeHovered(TrackPoint),
    /// Pointer pressed on the volume track at the last hovered position.
    VolumePressed,
    /// Pointer released over, or left, the volume track.
    VolumeReleased,
    ToggleMute,
    SkipBackward,
    SkipForward,
    ToggleFullscreen,
    /// Pointer activity anywhere over the player.
    PointerMoved,
    Close,
}

/// Action requested from the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Seek(f64),
    SetVolume(Volume),
    Mute,
    /// Unmute and restore the given volume.
    Unmute(Volume),
    ToggleFullscreen,
    ExitFullscreen,
    Close,
}

/// Interaction state of the controls overlay.
#[derive(Debug, Clone)]
pub struct ControlsSurface {
    auto_hide: AutoHide,
    dragging: bool,
    volume_pointer: Option<TrackPoint>,
    volume_dragging: bool,
    seek_step: SeekStep,
    volume_step: f32,
}

impl ControlsSurface {
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            auto_hide: AutoHide::new(config.controls_timeout),
            dragging: false,
            volume_pointer: None,
            volume_dragging: false,
            seek_step: config.seek_step,
            volume_step: config.volume_step,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.auto_hide.is_visible()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging || self.volume_dragging
    }

    /// Instant at which the overlay hides, if counting down.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.auto_hide.deadline()
    }

    /// Handles pointer input.
    ///
    /// While the session is loading or failed, the overlays cover the
    /// controls: only pointer movement and close get through.
    pub fn update(&mut self, message: Message, state: &PlayerState, now: Instant) -> Option<Command> {
        let blocked = state.is_loading || state.has_error;

        let command = match message {
            Message::PointerMoved => {
                self.auto_hide.poke(now, self.can_hide(state));
                None
            }
            Message::Close => Some(Command::Close),
            Message::VolumeHovered(point) => {
                self.volume_pointer = Some(point);
                (self.volume_dragging && !blocked).then(|| volume_command(point))
            }
            Message::VolumeReleased => {
                self.volume_dragging = false;
                None
            }
            _ if blocked => None,
            Message::TogglePlayback => Some(playback_command(state)),
            Message::ProgressPressed(point) => {
                self.dragging = true;
                Some(Command::Seek(seek_target(state, point)))
            }
            Message::ProgressMoved(point) => self
                .dragging
                .then(|| Command::Seek(seek_target(state, point))),
            Message::ProgressReleased | Message::PointerLeft => {
                self.dragging = false;
                None
            }
            Message::VolumePressed => self.volume_pointer.map(|point| {
                self.volume_dragging = true;
                volume_command(point)
            }),
            Message::ToggleMute => Some(mute_command(state)),
            Message::SkipBackward => Some(Command::Seek(
                state.clamp_time(state.current_time - self.seek_step.value()),
            )),
            Message::SkipForward => Some(Command::Seek(
                state.clamp_time(state.current_time + self.seek_step.value()),
            )),
            Message::ToggleFullscreen => Some(Command::ToggleFullscreen),
        };

        self.sync(state, now);
        command
    }

    /// Handles a keyboard shortcut. Shortcuts stay live while loading.
    pub fn shortcut(&mut self, shortcut: Shortcut, state: &PlayerState, now: Instant) -> Command {
        let command = match shortcut {
            Shortcut::TogglePlayback => playback_command(state),
            Shortcut::SeekBackward => {
                Command::Seek(state.clamp_time(state.current_time - self.seek_step.value()))
            }
            Shortcut::SeekForward => {
                Command::Seek(state.clamp_time(state.current_time + self.seek_step.value()))
            }
            Shortcut::VolumeUp => Command::SetVolume(state.volume.increase_by(self.volume_step)),
            Shortcut::VolumeDown => Command::SetVolume(state.volume.decrease_by(self.volume_step)),
            Shortcut::ToggleMute => mute_command(state),
            Shortcut::ToggleFullscreen => Command::ToggleFullscreen,
            Shortcut::Escape if state.is_fullscreen => Command::ExitFullscreen,
            Shortcut::Escape => Command::Close,
        };

        self.auto_hide.poke(now, self.can_hide(state));
        command
    }

    /// Advances the hide countdown and reconciles it with `state`.
    pub fn tick(&mut self, state: &PlayerState, now: Instant) {
        self.sync(state, now);
        self.auto_hide.tick(now);
    }

    /// Reconciles the overlay with a playback state that changed outside
    /// the surface, such as a media event.
    pub fn sync(&mut self, state: &PlayerState, now: Instant) {
        self.auto_hide.sync(now, self.can_hide(state));
    }

    fn can_hide(&self, state: &PlayerState) -> bool {
        state.is_playing && !self.is_dragging()
    }
}

fn playback_command(state: &PlayerState) -> Command {
    if state.is_playing {
        Command::Pause
    } else {
        Command::Play
    }
}

fn mute_command(state: &PlayerState) -> Command {
    if state.is_muted {
        let restore = if state.volume.is_silent() {
            Volume::new(UNMUTE_FALLBACK_VOLUME)
        } else {
            state.volume
        };
        Command::Unmute(restore)
    } else {
        Command::Mute
    }
}

fn volume_command(point: TrackPoint) -> Command {
    // Top of the column is full volume.
    let level = 1.0 - point.fraction();
    Command::SetVolume(Volume::new(level as f32))
}

fn seek_target(state: &PlayerState, point: TrackPoint) -> f64 {
    state.clamp_time(point.fraction() * state.duration)
}
