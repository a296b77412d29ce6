// SPDX-License-Identifier: MPL-2.0
//! Fullscreen shims over the host's vendor variants.
//!
//! Every call walks [`FullscreenMethod::TRIAL_ORDER`], skipping variants the
//! host lacks. A host with no variant at all turns requests into no-ops.

use crate::application::port::{FullscreenHost, FullscreenMethod, SurfaceId};
use crate::domain::error::VideoError;

fn available(host: &dyn FullscreenHost) -> impl Iterator<Item = FullscreenMethod> + '_ {
    FullscreenMethod::TRIAL_ORDER
        .into_iter()
        .filter(|method| host.has_method(*method))
}

/// Enters fullscreen for `target` with the first variant that accepts.
///
/// # Errors
///
/// Returns [`VideoError::PermissionDenied`] if every available variant
/// rejected the request.
pub fn request(host: &dyn FullscreenHost, target: SurfaceId) -> Result<(), VideoError> {
    try_each(host, "enter", |method| host.request(method, target))
}

/// Leaves fullscreen with the first variant that accepts.
///
/// # Errors
///
/// Returns [`VideoError::PermissionDenied`] if every available variant
/// rejected the request.
pub fn exit(host: &dyn FullscreenHost) -> Result<(), VideoError> {
    try_each(host, "exit", |method| host.exit(method))
}

/// True if any variant reports a fullscreen surface.
#[must_use]
pub fn is_fullscreen(host: &dyn FullscreenHost) -> bool {
    available(host).any(|method| host.fullscreen_element(method).is_some())
}

/// True if the host exposes at least one variant.
#[must_use]
pub fn is_supported(host: &dyn FullscreenHost) -> bool {
    available(host).next().is_some()
}

fn try_each(
    host: &dyn FullscreenHost,
    action: &str,
    mut attempt: impl FnMut(FullscreenMethod) -> Result<(), VideoError>,
) -> Result<(), VideoError> {
    let mut last_error: Option<VideoError> = None;

    for method in available(host) {
        match attempt(method) {
            Ok(()) => {
                tracing::debug!(%method, action, "fullscreen call accepted");
                return Ok(());
            }
            Err(err) => {
                tracing::debug!(%method, action, error = %err, "fullscreen variant rejected, trying next");
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) => Err(VideoError::PermissionDenied(format!(
            "Failed to {action} fullscreen: {}",
            err.message()
        ))),
        None => {
            tracing::debug!(action, "no fullscreen variant available, ignoring");
            Ok(())
        }
    }
}
