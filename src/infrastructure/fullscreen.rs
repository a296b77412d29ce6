// SPDX-License-Identifier: MPL-2.0
//! Fullscreen host adapters implementing the [`FullscreenHost`] port.
//!
//! - [`NoFullscreen`]: hosts without any fullscreen support (CLI, headless)
//! - [`WindowFullscreen`]: single-window hosts; the shell mirrors
//!   [`WindowFullscreen::active`] into its window mode
//!
//! [`FullscreenHost`]: crate::application::port::FullscreenHost

use crate::application::port::{FullscreenHost, FullscreenMethod, SurfaceId};
use crate::domain::error::VideoError;
use std::sync::{Mutex, PoisonError};

/// Host exposing no fullscreen method.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFullscreen;

impl FullscreenHost for NoFullscreen {
    fn has_method(&self, _method: FullscreenMethod) -> bool {
        false
    }

    fn request(&self, method: FullscreenMethod, _target: SurfaceId) -> Result<(), VideoError> {
        Err(VideoError::PermissionDenied(format!(
            "{method} fullscreen is not available"
        )))
    }

    fn exit(&self, method: FullscreenMethod) -> Result<(), VideoError> {
        Err(VideoError::PermissionDenied(format!(
            "{method} fullscreen is not available"
        )))
    }

    fn fullscreen_element(&self, _method: FullscreenMethod) -> Option<SurfaceId> {
        None
    }
}

/// Host with one window that can switch to fullscreen through the standard
/// method only.
#[derive(Debug, Default)]
pub struct WindowFullscreen {
    active: Mutex<Option<SurfaceId>>,
    picture_in_picture: bool,
}

impl WindowFullscreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertises picture-in-picture support.
    #[must_use]
    pub fn with_picture_in_picture(mut self, enabled: bool) -> Self {
        self.picture_in_picture = enabled;
        self
    }

    /// Surface currently shown fullscreen.
    #[must_use]
    pub fn active(&self) -> Option<SurfaceId> {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(method: FullscreenMethod) -> Result<(), VideoError> {
        if method == FullscreenMethod::Standard {
            Ok(())
        } else {
            Err(VideoError::PermissionDenied(format!(
                "{method} fullscreen is not available"
            )))
        }
    }
}

impl FullscreenHost for WindowFullscreen {
    fn has_method(&self, method: FullscreenMethod) -> bool {
        method == FullscreenMethod::Standard
    }

    fn request(&self, method: FullscreenMethod, target: SurfaceId) -> Result<(), VideoError> {
        Self::check(method)?;
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(target);
        Ok(())
    }

    fn exit(&self, method: FullscreenMethod) -> Result<(), VideoError> {
        Self::check(method)?;
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    fn fullscreen_element(&self, method: FullscreenMethod) -> Option<SurfaceId> {
        if method == FullscreenMethod::Standard {
            self.active()
        } else {
            None
        }
    }

    fn supports_picture_in_picture(&self) -> bool {
        self.picture_in_picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fullscreen_exposes_nothing() {
        let host = NoFullscreen;
        assert!(FullscreenMethod::TRIAL_ORDER
            .iter()
            .all(|method| !host.has_method(*method)));
        assert!(!host.supports_picture_in_picture());
    }

    #[test]
    fn window_fullscreen_tracks_active_surface() {
        let host = WindowFullscreen::new();
        host.request(FullscreenMethod::Standard, SurfaceId(7))
            .expect("standard request");
        assert_eq!(host.active(), Some(SurfaceId(7)));
        assert_eq!(
            host.fullscreen_element(FullscreenMethod::Standard),
            Some(SurfaceId(7))
        );

        host.exit(FullscreenMethod::Standard).expect("standard exit");
        assert_eq!(host.active(), None);
    }

    #[test]
    fn window_fullscreen_rejects_vendor_methods() {
        let host = WindowFullscreen::new();
        assert!(host.request(FullscreenMethod::Webkit, SurfaceId(1)).is_err());
        assert!(!host.has_method(FullscreenMethod::Moz));
    }
}
