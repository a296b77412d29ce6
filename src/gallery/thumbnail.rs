// SPDX-License-Identifier: MPL-2.0
//! Poster images shown on the gallery cards.

use crate::domain::error::VideoError;
use iced::widget::image;
use std::collections::HashMap;

/// Load state of one card's poster.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    /// Not fetched yet.
    #[default]
    Pending,
    Ready(image::Handle),
    /// Fetch failed or the bytes are not a known image format.
    Unavailable,
}

impl Thumbnail {
    /// Builds the state from a finished fetch.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<u8>, VideoError>) -> Self {
        match result {
            Ok(bytes) => match image_rs::guess_format(&bytes) {
                Ok(_) => Self::Ready(image::Handle::from_bytes(bytes)),
                Err(err) => {
                    tracing::debug!(error = %err, "thumbnail is not a recognized image");
                    Self::Unavailable
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "thumbnail fetch failed");
                Self::Unavailable
            }
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Posters keyed by video id.
#[derive(Debug, Clone, Default)]
pub struct Thumbnails {
    entries: HashMap<String, Thumbnail>,
    pending: Thumbnail,
}

impl Thumbnails {
    /// State for `id`; unknown ids are pending.
    #[must_use]
    pub fn get(&self, id: &str) -> &Thumbnail {
        self.entries.get(id).unwrap_or(&self.pending)
    }

    pub fn insert(&mut self, id: String, thumbnail: Thumbnail) {
        self.entries.insert(id, thumbnail);
    }
}
