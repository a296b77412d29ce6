// SPDX-License-Identifier: MPL-2.0
//! Video catalog: the items the gallery lists and their collections.
//!
//! The catalog is either the built-in set or a TOML file of the same shape:
//!
//! ```toml
//! [[videos]]
//! id = "intro"
//! title = "Introduction"
//! thumbnail = "https://example.com/intro.jpg"
//! video_url = "https://example.com/intro.mp4"
//! duration = 95.0
//! language = "english"
//!
//! [[collections]]
//! id = "basics"
//! title = "Basics"
//! video_ids = ["intro"]
//! category = "tutorial"
//! created_at = "2024-01-01"
//! updated_at = "2024-01-15"
//! ```
//!
//! A loaded catalog is validated once and read-only afterwards.

mod builtin;

use crate::domain::video::{VideoCategory, VideoItem, VideoLanguage};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Named, ordered group of catalog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCollection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub video_ids: Vec<String>,
    pub category: VideoCategory,
    #[serde(default)]
    pub language: Option<VideoLanguage>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Aggregate figures shown above the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_videos: usize,
    /// Whole minutes of content, rounded down.
    pub minutes_of_content: u64,
    /// Number of distinct languages.
    pub languages: usize,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    videos: Vec<VideoItem>,
    #[serde(default)]
    collections: Vec<VideoCollection>,
}

/// Validated, immutable set of videos and collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    videos: Vec<VideoItem>,
    collections: Vec<VideoCollection>,
}

impl Catalog {
    /// Builds a catalog after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] when an id is duplicated, a duration is
    /// not strictly positive, a source URI is empty or a collection names
    /// an unknown video.
    pub fn new(videos: Vec<VideoItem>, collections: Vec<VideoCollection>) -> Result<Self> {
        let mut ids = HashSet::new();
        for video in &videos {
            if video.id.trim().is_empty() {
                return Err(Error::Catalog("video with empty id".into()));
            }
            if !ids.insert(video.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate video id '{}'", video.id)));
            }
            if !(video.duration.is_finite() && video.duration > 0.0) {
                return Err(Error::Catalog(format!(
                    "video '{}' has invalid duration {}",
                    video.id, video.duration
                )));
            }
            if video.video_url.trim().is_empty() {
                return Err(Error::Catalog(format!("video '{}' has no source", video.id)));
            }
        }

        let mut collection_ids = HashSet::new();
        for collection in &collections {
            if !collection_ids.insert(collection.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate collection id '{}'",
                    collection.id
                )));
            }
            if let Some(missing) = collection
                .video_ids
                .iter()
                .find(|id| !ids.contains(id.as_str()))
            {
                return Err(Error::Catalog(format!(
                    "collection '{}' references unknown video '{missing}'",
                    collection.id
                )));
            }
        }

        Ok(Self {
            videos,
            collections,
        })
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parses and validates a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML and [`Error::Catalog`]
    /// when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.videos, file.collections)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            videos = catalog.videos.len(),
            collections = catalog.collections.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Serializes the catalog to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            videos: self.videos.clone(),
            collections: self.collections.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    #[must_use]
    pub fn videos(&self) -> &[VideoItem] {
        &self.videos
    }

    #[must_use]
    pub fn collections(&self) -> &[VideoCollection] {
        &self.collections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    #[must_use]
    pub fn video_by_id(&self, id: &str) -> Option<&VideoItem> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Videos in `language`, in catalog order.
    pub fn videos_by_language(
        &self,
        language: VideoLanguage,
    ) -> impl Iterator<Item = &VideoItem> + '_ {
        self.videos
            .iter()
            .filter(move |video| video.language == language)
    }

    /// Videos in `category`, in catalog order.
    pub fn videos_by_category(
        &self,
        category: VideoCategory,
    ) -> impl Iterator<Item = &VideoItem> + '_ {
        self.videos
            .iter()
            .filter(move |video| video.category == Some(category))
    }

    #[must_use]
    pub fn collection(&self, id: &str) -> Option<&VideoCollection> {
        self.collections.iter().find(|collection| collection.id == id)
    }

    /// Members of `collection`, in collection order.
    #[must_use]
    pub fn collection_videos(&self, collection: &VideoCollection) -> Vec<&VideoItem> {
        collection
            .video_ids
            .iter()
            .filter_map(|id| self.video_by_id(id))
            .collect()
    }

    /// Sum of the member durations, in seconds.
    #[must_use]
    pub fn total_duration(&self, collection: &VideoCollection) -> f64 {
        self.collection_videos(collection)
            .iter()
            .map(|video| video.duration)
            .sum()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let seconds: f64 = self.videos.iter().map(|video| video.duration).sum();
        let languages: HashSet<VideoLanguage> =
            self.videos.iter().map(|video| video.language).collect();

        CatalogStats {
            total_videos: self.videos.len(),
            minutes_of_content: (seconds / 60.0).floor() as u64,
            languages: languages.len(),
        }
    }
}
