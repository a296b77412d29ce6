// SPDX-License-Identifier: MPL-2.0
//! Gallery of catalog videos with a language filter.
//!
//! [`Gallery`] is the pure listing/selection model. [`VideoSection`] wires it
//! to a [`PlayerModal`](crate::video_player::PlayerModal): choosing a video
//! builds a media element for it and opens the modal.

mod filter;
mod section;
pub mod subscription;
mod thumbnail;

pub use filter::LanguageFilter;
pub use section::{Message, VideoSection};
pub use thumbnail::{Thumbnail, Thumbnails};

use crate::catalog::{Catalog, CatalogStats, VideoCollection};
use crate::domain::error::VideoError;
use crate::domain::video::VideoItem;

/// Collection highlighted above the grid.
pub const FEATURED_COLLECTION_ID: &str = "getting-started";

pub const EMPTY_TITLE: &str = "No videos found";
pub const EMPTY_HINT: &str =
    "No videos match the current filter. Try selecting a different language option.";

/// Featured collection summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedCollection<'a> {
    pub collection: &'a VideoCollection,
    pub video_count: usize,
    /// Whole minutes of the member durations.
    pub minutes: u64,
    /// Video started by "start watching".
    pub first: Option<&'a VideoItem>,
}

/// Listing state of the gallery.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    catalog: Catalog,
    filter: LanguageFilter,
    selected: Option<String>,
    thumbnails: Thumbnails,
}

impl Gallery {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: LanguageFilter::All,
            selected: None,
            thumbnails: Thumbnails::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> LanguageFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: LanguageFilter) {
        self.filter = filter;
    }

    /// Videos passing the active filter, in catalog order.
    #[must_use]
    pub fn visible_videos(&self) -> Vec<&VideoItem> {
        self.catalog
            .videos()
            .iter()
            .filter(|video| self.filter.matches(video))
            .collect()
    }

    /// True when the filter leaves nothing to show.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self
            .catalog
            .videos()
            .iter()
            .any(|video| self.filter.matches(video))
    }

    /// Stats over the whole catalog, independent of the filter.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    #[must_use]
    pub fn featured(&self) -> Option<FeaturedCollection<'_>> {
        let collection = self.catalog.collection(FEATURED_COLLECTION_ID)?;
        let members = self.catalog.collection_videos(collection);
        let seconds: f64 = members.iter().map(|video| video.duration).sum();
        Some(FeaturedCollection {
            collection,
            video_count: members.len(),
            minutes: (seconds / 60.0).floor() as u64,
            first: members.first().copied(),
        })
    }

    /// Marks `id` as the selected video.
    ///
    /// Returns `None` and keeps the previous selection if `id` is unknown.
    pub fn select(&mut self, id: &str) -> Option<&VideoItem> {
        let video = self.catalog.video_by_id(id)?;
        self.selected = Some(video.id.clone());
        Some(video)
    }

    /// Selects the first video of the featured collection.
    pub fn start_watching(&mut self) -> Option<&VideoItem> {
        let id = self.featured()?.first?.id.clone();
        self.select(&id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&VideoItem> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.video_by_id(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Poster state of the card for `id`.
    #[must_use]
    pub fn thumbnail(&self, id: &str) -> &Thumbnail {
        self.thumbnails.get(id)
    }

    /// Records a finished poster fetch for `id`.
    pub fn set_thumbnail(&mut self, id: String, result: Result<Vec<u8>, VideoError>) {
        self.thumbnails.insert(id, Thumbnail::from_fetch(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::VideoLanguage;

    fn ids<'a>(videos: &[&'a VideoItem]) -> Vec<&'a str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn all_filter_keeps_catalog_order() {
        let gallery = Gallery::new(Catalog::builtin());
        assert_eq!(
            ids(&gallery.visible_videos()),
            vec![
                "system-work-english",
                "system-work-hindi",
                "ai-architecture-demo",
                "database-integration",
                "performance-optimization",
            ]
        );
    }

    #[test]
    fn hindi_filter_keeps_only_hindi() {
        let mut gallery = Gallery::new(Catalog::builtin());
        gallery.set_filter(LanguageFilter::Only(VideoLanguage::Hindi));
        let visible = gallery.visible_videos();
        assert_eq!(ids(&visible), vec!["system-work-hindi"]);
        assert!(visible.iter().all(|v| v.language == VideoLanguage::Hindi));
        assert!(!gallery.is_empty_result());
    }

    #[test]
    fn filter_with_no_match_is_empty_result() {
        let english_only: Vec<_> = Catalog::builtin()
            .videos_by_language(VideoLanguage::English)
            .cloned()
            .collect();
        let mut gallery = Gallery::new(Catalog::new(english_only, Vec::new()).expect("valid"));
        gallery.set_filter(LanguageFilter::Only(VideoLanguage::Hindi));
        assert!(gallery.is_empty_result());
        assert!(gallery.visible_videos().is_empty());
    }

    #[test]
    fn featured_collection_summary() {
        let gallery = Gallery::new(Catalog::builtin());
        let featured = gallery.featured().expect("builtin has getting-started");
        assert_eq!(featured.video_count, 2);
        // 180 + 165 seconds
        assert_eq!(featured.minutes, 5);
        assert_eq!(
            featured.first.map(|v| v.id.as_str()),
            Some("system-work-english")
        );
    }

    #[test]
    fn start_watching_selects_first_member() {
        let mut gallery = Gallery::new(Catalog::builtin());
        let started = gallery.start_watching().map(|v| v.id.clone());
        assert_eq!(started.as_deref(), Some("system-work-english"));
        assert_eq!(
            gallery.selected().map(|v| v.id.as_str()),
            Some("system-work-english")
        );
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut gallery = Gallery::new(Catalog::builtin());
        gallery.select("database-integration");
        assert!(gallery.select("nope").is_none());
        assert_eq!(
            gallery.selected().map(|v| v.id.as_str()),
            Some("database-integration")
        );
        gallery.clear_selection();
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn thumbnails_follow_fetch_results() {
        let mut gallery = Gallery::new(Catalog::builtin());
        assert!(matches!(
            gallery.thumbnail("database-integration"),
            Thumbnail::Pending
        ));

        gallery.set_thumbnail(
            "database-integration".to_string(),
            Ok(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        );
        gallery.set_thumbnail(
            "system-work-hindi".to_string(),
            Err(VideoError::NetworkError("offline".into())),
        );

        assert!(gallery.thumbnail("database-integration").is_ready());
        assert!(matches!(
            gallery.thumbnail("system-work-hindi"),
            Thumbnail::Unavailable
        ));
    }

    #[test]
    fn no_featured_collection_without_collections() {
        let videos = Catalog::builtin().videos().to_vec();
        let mut gallery = Gallery::new(Catalog::new(videos, Vec::new()).expect("valid"));
        assert!(gallery.featured().is_none());
        assert!(gallery.start_watching().is_none());
    }
}
