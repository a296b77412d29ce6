// SPDX-License-Identifier: MPL-2.0
//! Native media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the host's playback
//! primitive (a `<video>` element, a GStreamer pipeline, a test double).
//! The player modal drives it with commands and receives
//! [`MediaEvent`](crate::domain::player::MediaEvent)s back from the host.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget, except [`play`](MediaElement::play),
//!   which may be rejected (autoplay policy, decode failure)
//! - Observed values (`current_time`, `duration`, `buffered`) are read-only
//!   snapshots; state changes arrive through events
//! - No `async fn` - hosts deliver events through their own loop

use super::fullscreen::SurfaceId;
use crate::config::Preload;
use crate::domain::error::VideoError;
use crate::domain::player::BufferedRanges;

/// Port for the host's native media primitive.
///
/// # Example
///
/// ```ignore
/// use video_showcase::application::port::MediaElement;
///
/// fn restart(media: &mut impl MediaElement) {
///     media.seek(0.0);
///     let _ = media.play();
/// }
/// ```
pub trait MediaElement {
    /// Binds the element to a source URI and an optional poster image.
    fn set_source(&mut self, src: &str, poster: Option<&str>);

    /// Detaches the current source.
    fn clear_source(&mut self);

    /// Reloads the element, releasing any decoder or network resources held
    /// for a previous source.
    fn load(&mut self);

    /// Starts playback.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the host rejects the request.
    fn play(&mut self) -> Result<(), VideoError>;

    fn pause(&mut self);

    /// Moves the playhead to `secs`.
    fn seek(&mut self, secs: f64);

    /// Sets the volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    fn set_muted(&mut self, muted: bool);

    fn set_autoplay(&mut self, autoplay: bool);

    fn set_looping(&mut self, looping: bool);

    fn set_preload(&mut self, preload: Preload);

    fn set_plays_inline(&mut self, inline: bool);

    /// Keeps the host from offering picture-in-picture for this element.
    fn set_picture_in_picture_disabled(&mut self, disabled: bool);

    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;

    /// Duration in seconds. Zero or non-finite while unknown.
    fn duration(&self) -> f64;

    /// Buffered ranges, ordered by start time.
    fn buffered(&self) -> BufferedRanges;

    /// Surface the element renders into, used as fullscreen target.
    fn surface(&self) -> SurfaceId;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaElement) {}
}
