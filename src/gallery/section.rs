// SPDX-License-Identifier: MPL-2.0
//! Gallery section owning the player modal.

use super::{subscription, Gallery, LanguageFilter};
use crate::application::port::MediaElement;
use crate::domain::error::VideoError;
use crate::domain::player::MediaEvent;
use crate::domain::video::VideoItem;
use crate::infrastructure::http;
use crate::video_player::{self, ModalEvent, PlayerModal, SessionId, Shortcut};
use iced::{Subscription, Task};
use std::time::Instant;

/// Input of the gallery section.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FilterSelected(LanguageFilter),
    /// A card's play action.
    PlayVideo(String),
    /// Featured collection's "start watching".
    StartWatching,
    Controls(video_player::Message),
    Shortcut(Shortcut),
    Media(SessionId, MediaEvent),
    Tick,
    /// A card poster finished loading.
    ThumbnailLoaded {
        id: String,
        result: Result<Vec<u8>, VideoError>,
    },
}

/// Gallery plus the modal it opens.
///
/// `factory` builds a host media element for the chosen video each time the
/// modal opens.
pub struct VideoSection<M: MediaElement, F: FnMut(&VideoItem) -> M> {
    gallery: Gallery,
    modal: PlayerModal<M>,
    factory: F,
}

impl<M, F> VideoSection<M, F>
where
    M: MediaElement,
    F: FnMut(&VideoItem) -> M,
{
    #[must_use]
    pub fn new(gallery: Gallery, modal: PlayerModal<M>, factory: F) -> Self {
        Self {
            gallery,
            modal,
            factory,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn modal(&self) -> &PlayerModal<M> {
        &self.modal
    }

    /// Fetches the poster of every catalog video.
    #[must_use]
    pub fn load_thumbnails(&self) -> Task<Message> {
        Task::batch(self.gallery.catalog().videos().iter().map(|video| {
            let id = video.id.clone();
            Task::perform(http::fetch_image(video.thumbnail.clone()), move |result| {
                Message::ThumbnailLoaded { id, result }
            })
        }))
    }

    /// Keyboard shortcuts while the modal is open, ticks while the controls
    /// count down to hiding.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.modal.is_open(), self.modal.hide_deadline().is_some())
    }

    /// Handles `message`.
    ///
    /// Returns the [`ModalEvent`] raised by the modal, including the close of
    /// a session replaced by opening another video.
    pub fn update(&mut self, message: Message, now: Instant) -> Option<ModalEvent> {
        match message {
            Message::FilterSelected(filter) => {
                self.gallery.set_filter(filter);
                None
            }
            Message::PlayVideo(id) => {
                let video = self.gallery.select(&id).cloned();
                match video {
                    Some(video) => self.open(video),
                    None => {
                        tracing::warn!(%id, "play requested for unknown video");
                        None
                    }
                }
            }
            Message::StartWatching => {
                let video = self.gallery.start_watching().cloned();
                video.and_then(|video| self.open(video))
            }
            Message::Controls(message) => {
                let event = self.modal.update(message, now);
                self.after_modal(event)
            }
            Message::Shortcut(shortcut) => {
                // Shortcuts only apply while the modal is open.
                if !self.modal.is_open() {
                    return None;
                }
                let event = self.modal.handle_shortcut(shortcut, now);
                self.after_modal(event)
            }
            Message::Media(session, event) => {
                self.modal.dispatch(session, event, now);
                None
            }
            Message::Tick => {
                self.modal.tick(now);
                None
            }
            Message::ThumbnailLoaded { id, result } => {
                self.gallery.set_thumbnail(id, result);
                None
            }
        }
    }

    /// Closes the modal if open.
    pub fn close(&mut self) -> Option<ModalEvent> {
        let event = self.modal.close();
        self.after_modal(event)
    }

    /// Opens the modal on `video`. The selection already points at it, so
    /// the close of any replaced session leaves the selection alone.
    fn open(&mut self, video: VideoItem) -> Option<ModalEvent> {
        let media = (self.factory)(&video);
        let (_, replaced) = self.modal.open(video, media);
        if let Some(ModalEvent::Closed { video_id }) = &replaced {
            tracing::debug!(%video_id, "replaced open session");
        }
        replaced
    }

    fn after_modal(&mut self, event: Option<ModalEvent>) -> Option<ModalEvent> {
        if matches!(event, Some(ModalEvent::Closed { .. })) {
            self.gallery.clear_selection();
        }
        event
    }
}
