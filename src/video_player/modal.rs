// SPDX-License-Identifier: MPL-2.0
//! Player modal: one playback session over a host media element.
//!
//! Opening the modal creates a fresh [`PlayerState`] seeded from the stored
//! preferences, binds the element to the selected video and applies the
//! [`PlayerConfig`]. Media events are folded into the state; user input goes
//! through the [`ControlsSurface`] and comes back as [`Command`]s executed
//! here. Closing pauses and releases the element and drops the state.

use super::controls::{Command, ControlsSurface, Message};
use super::keyboard::Shortcut;
use crate::application::port::MediaElement;
use crate::config::PlayerConfig;
use crate::domain::player::{MediaEvent, PlayerState};
use crate::domain::video::{VideoItem, Volume};
use crate::service::{UserPreferences, VideoService};
use std::time::Instant;

/// Message shown when the host rejects a play request.
pub const PLAY_FAILED_MESSAGE: &str = "Failed to play video";

/// Identifies one open/close cycle of the modal.
///
/// Events delivered late for an earlier session carry its id and are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Notification raised to the owner of the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Closed { video_id: String },
}

struct Session<M> {
    id: SessionId,
    item: VideoItem,
    media: M,
    state: PlayerState,
    controls: ControlsSurface,
}

/// Modal container hosting at most one playback session.
pub struct PlayerModal<M: MediaElement> {
    service: VideoService,
    config: PlayerConfig,
    session: Option<Session<M>>,
    next_id: u64,
}

impl<M: MediaElement> std::fmt::Debug for PlayerModal<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerModal")
            .field("config", &self.config)
            .field("open", &self.session.as_ref().map(|s| &s.item.id))
            .finish_non_exhaustive()
    }
}

impl<M: MediaElement> PlayerModal<M> {
    #[must_use]
    pub fn new(service: VideoService, config: PlayerConfig) -> Self {
        Self {
            service,
            config,
            session: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn service(&self) -> &VideoService {
        &self.service
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    #[must_use]
    pub fn item(&self) -> Option<&VideoItem> {
        self.session.as_ref().map(|s| &s.item)
    }

    #[must_use]
    pub fn state(&self) -> Option<&PlayerState> {
        self.session.as_ref().map(|s| &s.state)
    }

    #[must_use]
    pub fn media(&self) -> Option<&M> {
        self.session.as_ref().map(|s| &s.media)
    }

    /// Instant at which the controls hide, if the overlay is counting down.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| s.controls.hide_deadline())
    }

    /// Opens `item` on `media`, closing any session still open.
    ///
    /// Returns the new session id and the [`ModalEvent::Closed`] of the
    /// session it replaced, if any.
    pub fn open(&mut self, item: VideoItem, mut media: M) -> (SessionId, Option<ModalEvent>) {
        let replaced = self.close();

        let volume = self
            .service
            .load_user_preferences()
            .map(|prefs| prefs.volume)
            .unwrap_or_default();

        let mut state = PlayerState::new(volume);
        state.is_muted = self.config.muted;

        media.set_source(&item.video_url, Some(&item.thumbnail));
        media.set_autoplay(self.config.autoplay);
        media.set_looping(self.config.looping);
        media.set_muted(self.config.muted);
        media.set_preload(self.config.preload);
        media.set_plays_inline(self.config.plays_inline);
        media.set_picture_in_picture_disabled(self.config.disable_picture_in_picture);
        media.set_volume(volume.value());

        let id = SessionId(self.next_id);
        self.next_id += 1;

        tracing::debug!(video = %item.id, session = id.0, "player modal opened");

        self.session = Some(Session {
            id,
            item,
            media,
            state,
            controls: ControlsSurface::new(&self.config),
        });
        (id, replaced)
    }

    /// Folds a media event into the session identified by `id`.
    ///
    /// The controls overlay is reconciled with the new state at `now`, so a
    /// pause or end of playback brings hidden controls back.
    ///
    /// Returns `false` when the event is stale (modal closed or reopened).
    pub fn dispatch(&mut self, id: SessionId, event: MediaEvent, now: Instant) -> bool {
        match self.session.as_mut() {
            Some(session) if session.id == id => {
                if let MediaEvent::Error(ref message) = event {
                    tracing::warn!(video = %session.item.id, ?message, "media element error");
                }
                session.state.apply(event);
                session.controls.sync(&session.state, now);
                session.state.show_controls = session.controls.is_visible();
                true
            }
            _ => {
                tracing::trace!(?event, "dropping media event for a closed session");
                false
            }
        }
    }

    /// Handles pointer input on the controls.
    pub fn update(&mut self, message: Message, now: Instant) -> Option<ModalEvent> {
        let session = self.session.as_mut()?;
        let command = session.controls.update(message, &session.state, now);
        session.state.show_controls = session.controls.is_visible();
        command.and_then(|command| self.execute(command))
    }

    /// Handles a keyboard shortcut.
    pub fn handle_shortcut(&mut self, shortcut: Shortcut, now: Instant) -> Option<ModalEvent> {
        let session = self.session.as_mut()?;
        let command = session.controls.shortcut(shortcut, &session.state, now);
        session.state.show_controls = session.controls.is_visible();
        self.execute(command)
    }

    /// Advances the controls auto-hide timer.
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.controls.tick(&session.state, now);
            session.state.show_controls = session.controls.is_visible();
        }
    }

    /// Starts or pauses playback. Inert while the session is failed.
    pub fn toggle_playback(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let command = if session.state.is_playing {
            Command::Pause
        } else {
            Command::Play
        };
        let _ = self.execute(command);
    }

    /// Seeks to `secs`, clamped into the known duration.
    pub fn seek(&mut self, secs: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let target = session.state.clamp_time(secs);
        let _ = self.execute(Command::Seek(target));
    }

    /// Sets the volume and persists it.
    pub fn set_volume(&mut self, volume: Volume) {
        let _ = self.execute(Command::SetVolume(volume));
    }

    pub fn toggle_fullscreen(&mut self) {
        let _ = self.execute(Command::ToggleFullscreen);
    }

    /// Ends the session: pauses, releases the element and drops the state.
    ///
    /// Returns `None` if nothing was open.
    pub fn close(&mut self) -> Option<ModalEvent> {
        let mut session = self.session.take()?;

        if session.state.is_fullscreen {
            if let Err(err) = self.service.exit_fullscreen() {
                tracing::warn!(error = %err, "failed to leave fullscreen on close");
            }
        }
        VideoService::cleanup(&mut session.media);

        tracing::debug!(video = %session.item.id, session = session.id.0, "player modal closed");
        Some(ModalEvent::Closed {
            video_id: session.item.id,
        })
    }

    fn execute(&mut self, command: Command) -> Option<ModalEvent> {
        if command == Command::Close {
            return self.close();
        }

        let session = self.session.as_mut()?;
        match command {
            Command::Play => {
                if session.state.has_error {
                    return None;
                }
                if let Err(err) = session.media.play() {
                    tracing::warn!(video = %session.item.id, error = %err, "play request rejected");
                    session.state.fail(PLAY_FAILED_MESSAGE);
                }
            }
            Command::Pause => {
                if !session.state.has_error {
                    session.media.pause();
                }
            }
            Command::Seek(secs) => session.media.seek(secs),
            Command::SetVolume(volume) => {
                apply_volume(session, volume);
                self.persist_preferences();
            }
            Command::Mute => {
                session.media.set_muted(true);
                session.state.is_muted = true;
            }
            Command::Unmute(volume) => {
                apply_volume(session, volume);
                session.media.set_muted(false);
                session.state.is_muted = false;
                self.persist_preferences();
            }
            Command::ToggleFullscreen => {
                if session.state.is_fullscreen {
                    self.leave_fullscreen();
                } else {
                    let surface = session.media.surface();
                    match self.service.request_fullscreen(surface) {
                        Ok(()) => session.state.is_fullscreen = self.service.is_fullscreen(),
                        Err(err) => tracing::warn!(error = %err, "failed to enter fullscreen"),
                    }
                }
            }
            Command::ExitFullscreen => self.leave_fullscreen(),
            Command::Close => {}
        }
        None
    }

    fn leave_fullscreen(&mut self) {
        match self.service.exit_fullscreen() {
            Ok(()) => {
                if let Some(session) = self.session.as_mut() {
                    session.state.is_fullscreen = false;
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to exit fullscreen"),
        }
    }

    fn persist_preferences(&self) {
        if let Some(session) = self.session.as_ref() {
            self.service.save_user_preferences(&UserPreferences {
                volume: session.state.volume,
                quality: session.state.quality,
                autoplay: self.config.autoplay,
            });
        }
    }
}

fn apply_volume<M: MediaElement>(session: &mut Session<M>, volume: Volume) {
    let silent = volume.is_silent();
    session.media.set_volume(volume.value());
    session.media.set_muted(silent);
    session.state.volume = volume;
    session.state.is_muted = silent;
}
