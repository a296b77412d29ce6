// SPDX-License-Identifier: MPL-2.0
//! Video utility service.
//!
//! [`VideoService`] bundles the ports the player needs (probe, fullscreen
//! host, preference store, `HEAD` client) and exposes the operations the
//! player and gallery call: metadata, thumbnails, format checks, fullscreen
//! shims, preferences, preload, progress and cleanup.
//!
//! Blocking probe work is moved to Tokio's blocking pool; every async method
//! must therefore run inside a Tokio runtime.

mod cache;
pub mod fullscreen;
pub mod preferences;
pub mod quality;
pub mod thumbnail;

pub use crate::domain::video::{calculate_aspect_ratio, format_file_size, format_from_url, format_time};
pub use preferences::{UserPreferences, PREFERENCES_KEY};
pub use quality::{pick_optimal_quality, DeviceHints, NetworkType};

use crate::application::port::{
    FullscreenHost, HeadProbe, MediaElement, MediaProbe, PreferenceStore, SurfaceId,
};
use crate::config::DEFAULT_THUMBNAIL_OFFSET_SECS;
use crate::domain::error::VideoError;
use crate::domain::video::{VideoMetadata, VideoQuality};
use crate::infrastructure::{
    FfmpegProbe, JsonFileStore, MemoryStore, NoFullscreen, ReqwestHeadProbe,
};
use std::fmt;
use std::sync::Arc;

/// Utility service shared by the gallery and every player session.
///
/// Cloning is cheap; clones share the same ports.
#[derive(Clone)]
pub struct VideoService {
    probe: Arc<dyn MediaProbe>,
    fullscreen: Arc<dyn FullscreenHost>,
    store: Arc<dyn PreferenceStore>,
    network: Option<Arc<dyn HeadProbe>>,
}

impl fmt::Debug for VideoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoService")
            .field("network", &self.network.is_some())
            .finish_non_exhaustive()
    }
}

impl VideoService {
    /// Service over explicit ports, without remote URL validation.
    #[must_use]
    pub fn new(
        probe: Arc<dyn MediaProbe>,
        fullscreen: Arc<dyn FullscreenHost>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            probe,
            fullscreen,
            store,
            network: None,
        }
    }

    /// Adds the `HEAD` client used by [`validate_remote_url`](Self::validate_remote_url).
    #[must_use]
    pub fn with_head_probe(mut self, network: Arc<dyn HeadProbe>) -> Self {
        self.network = Some(network);
        self
    }

    /// Headless service: `FFmpeg` probe, no fullscreen, file-backed
    /// preferences in the data directory and a `reqwest` client.
    ///
    /// Falls back to an in-memory store when no data directory exists.
    #[must_use]
    pub fn headless() -> Self {
        let store: Arc<dyn PreferenceStore> = match JsonFileStore::open_default() {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::warn!(error = %err, "preferences will not persist across runs");
                Arc::new(MemoryStore::new())
            }
        };

        let service = Self::new(Arc::new(FfmpegProbe::new()), Arc::new(NoFullscreen), store);
        match ReqwestHeadProbe::new() {
            Ok(client) => service.with_head_probe(Arc::new(client)),
            Err(err) => {
                tracing::warn!(error = %err, "remote URL validation disabled");
                service
            }
        }
    }

    // -------------------------------------------------------------------------
    // Metadata and thumbnails
    // -------------------------------------------------------------------------

    /// Probes `source` for its metadata, caching the result for the process
    /// lifetime.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be opened,
    /// [`VideoError::DecodeError`] if extraction fails.
    pub async fn metadata(&self, source: &str) -> Result<VideoMetadata, VideoError> {
        if let Some(cached) = cache::get(source) {
            tracing::debug!(source, "metadata cache hit");
            return Ok(cached);
        }

        let probe = Arc::clone(&self.probe);
        let owned = source.to_string();
        let probed = tokio::task::spawn_blocking(move || probe.probe(&owned))
            .await
            .map_err(|e| VideoError::DecodeError(format!("Probe task failed: {e}")))??;

        let mut metadata = VideoMetadata::new(source, probed.width, probed.height, probed.duration);
        metadata.file_size = probed.file_size;
        metadata.codecs = probed.codecs;
        metadata.bitrate = probed.bitrate;
        metadata.frame_rate = probed.frame_rate;

        tracing::debug!(source, width = metadata.width, height = metadata.height, "metadata probed");
        Ok(cache::insert(source, metadata))
    }

    /// Captures the frame at one second as a JPEG `data:` URI.
    ///
    /// # Errors
    ///
    /// See [`generate_thumbnail_at`](Self::generate_thumbnail_at).
    pub async fn generate_thumbnail(&self, source: &str) -> Result<String, VideoError> {
        self.generate_thumbnail_at(source, DEFAULT_THUMBNAIL_OFFSET_SECS)
            .await
    }

    /// Captures the frame at `at_secs` as a JPEG `data:` URI.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be opened,
    /// [`VideoError::DecodeError`] if no frame could be rasterized.
    pub async fn generate_thumbnail_at(
        &self,
        source: &str,
        at_secs: f64,
    ) -> Result<String, VideoError> {
        let probe = Arc::clone(&self.probe);
        let owned = source.to_string();
        let frame = tokio::task::spawn_blocking(move || probe.capture_frame(&owned, at_secs))
            .await
            .map_err(|e| VideoError::DecodeError(format!("Capture task failed: {e}")))??;

        thumbnail::encode_jpeg_data_uri(&frame)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// True unless the probe definitively cannot play `mime`.
    #[must_use]
    pub fn validate_format_support(&self, mime: &str) -> bool {
        self.probe.can_play_type(mime).is_playable()
    }

    /// `"webm"` when WebM is playable, `"mp4"` otherwise.
    #[must_use]
    pub fn optimal_container(&self) -> &'static str {
        if self.validate_format_support("video/webm") {
            "webm"
        } else {
            "mp4"
        }
    }

    /// True only if a `HEAD` request succeeds with a `video/*` content type.
    ///
    /// Network failures, and a service without a `HEAD` client, yield `false`.
    pub async fn validate_remote_url(&self, url: &str) -> bool {
        let Some(network) = &self.network else {
            return false;
        };
        match network.head(url).await {
            Ok(response) => response.is_success() && response.is_video(),
            Err(err) => {
                tracing::debug!(url, error = %err, "remote URL check failed");
                false
            }
        }
    }

    /// See [`pick_optimal_quality`].
    #[must_use]
    pub fn optimal_quality(&self, hints: DeviceHints) -> VideoQuality {
        pick_optimal_quality(hints)
    }

    // -------------------------------------------------------------------------
    // Fullscreen
    // -------------------------------------------------------------------------

    /// Enters fullscreen for `target`. A host without fullscreen ignores it.
    ///
    /// # Errors
    ///
    /// [`VideoError::PermissionDenied`] if every available variant rejects.
    pub fn request_fullscreen(&self, target: SurfaceId) -> Result<(), VideoError> {
        fullscreen::request(self.fullscreen.as_ref(), target)
    }

    /// Leaves fullscreen. A host without fullscreen ignores it.
    ///
    /// # Errors
    ///
    /// [`VideoError::PermissionDenied`] if every available variant rejects.
    pub fn exit_fullscreen(&self) -> Result<(), VideoError> {
        fullscreen::exit(self.fullscreen.as_ref())
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        fullscreen::is_fullscreen(self.fullscreen.as_ref())
    }

    #[must_use]
    pub fn supports_fullscreen(&self) -> bool {
        fullscreen::is_supported(self.fullscreen.as_ref())
    }

    #[must_use]
    pub fn supports_picture_in_picture(&self) -> bool {
        self.fullscreen.supports_picture_in_picture()
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    /// Persists `prefs`. Failures are logged, never returned.
    pub fn save_user_preferences(&self, prefs: &UserPreferences) {
        preferences::save(self.store.as_ref(), prefs);
    }

    /// Loads persisted preferences; `None` when absent or malformed.
    #[must_use]
    pub fn load_user_preferences(&self) -> Option<UserPreferences> {
        preferences::load(self.store.as_ref())
    }

    // -------------------------------------------------------------------------
    // Media element helpers
    // -------------------------------------------------------------------------

    /// Resolves once `source` can play through.
    ///
    /// # Errors
    ///
    /// [`VideoError::LoadFailed`] if the resource cannot be buffered.
    pub async fn preload(&self, source: &str) -> Result<(), VideoError> {
        let probe = Arc::clone(&self.probe);
        let owned = source.to_string();
        tokio::task::spawn_blocking(move || probe.preload(&owned))
            .await
            .map_err(|e| VideoError::LoadFailed(format!("Preload task failed: {e}")))?
    }

    /// Buffered percentage of `media`, in `[0, 100]`.
    #[must_use]
    pub fn loading_progress(media: &dyn MediaElement) -> f64 {
        media.buffered().percentage(media.duration())
    }

    /// Pauses `media`, detaches its source and reloads it so decoder and
    /// network resources are released.
    pub fn cleanup(media: &mut dyn MediaElement) {
        media.pause();
        media.clear_source();
        media.load();
    }
}
