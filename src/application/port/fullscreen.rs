// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability port definition.
//!
//! Hosts expose fullscreen through one or more vendor variants. This port
//! models each variant as a [`FullscreenMethod`] so callers can try them in
//! a fixed order instead of branching on the host.

use crate::domain::error::VideoError;
use std::fmt;

/// Opaque handle of a renderable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// A vendor variant of the fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenMethod {
    Standard,
    Webkit,
    Moz,
    Ms,
}

impl FullscreenMethod {
    /// Order in which variants are tried.
    pub const TRIAL_ORDER: [FullscreenMethod; 4] = [
        FullscreenMethod::Standard,
        FullscreenMethod::Webkit,
        FullscreenMethod::Moz,
        FullscreenMethod::Ms,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FullscreenMethod::Standard => "standard",
            FullscreenMethod::Webkit => "webkit",
            FullscreenMethod::Moz => "moz",
            FullscreenMethod::Ms => "ms",
        }
    }
}

impl fmt::Display for FullscreenMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Port for host fullscreen support.
///
/// Methods take `&self` so a single host can be shared between the service
/// and the UI; implementations use interior mutability where they track
/// state.
pub trait FullscreenHost: Send + Sync {
    /// Whether the host exposes this variant at all.
    fn has_method(&self, method: FullscreenMethod) -> bool;

    /// Requests fullscreen for `target` through `method`.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the host rejects the request.
    fn request(&self, method: FullscreenMethod, target: SurfaceId) -> Result<(), VideoError>;

    /// Leaves fullscreen through `method`.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the host rejects the request.
    fn exit(&self, method: FullscreenMethod) -> Result<(), VideoError>;

    /// Surface currently fullscreen according to `method`, if any.
    fn fullscreen_element(&self, method: FullscreenMethod) -> Option<SurfaceId>;

    /// Whether picture-in-picture playback is available.
    fn supports_picture_in_picture(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn FullscreenHost) {}

    #[test]
    fn trial_order_starts_with_standard() {
        assert_eq!(FullscreenMethod::TRIAL_ORDER[0], FullscreenMethod::Standard);
        assert_eq!(FullscreenMethod::TRIAL_ORDER[3], FullscreenMethod::Ms);
        assert_eq!(FullscreenMethod::Webkit.to_string(), "webkit");
    }
}
