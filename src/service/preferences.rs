// SPDX-License-Identifier: MPL-2.0
//! Persisted player preferences.
//!
//! The record is stored as one JSON document under [`PREFERENCES_KEY`].
//! Failures never reach the caller: saving logs a warning, loading yields
//! `None` so the session falls back to defaults.

use crate::application::port::PreferenceStore;
use crate::domain::video::{VideoQuality, Volume};
use serde::{Deserialize, Serialize};

/// Store key of the preference record.
pub const PREFERENCES_KEY: &str = "videoPlayerPreferences";

/// Preferences carried from one session to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    pub volume: Volume,
    pub quality: VideoQuality,
    pub autoplay: bool,
}

/// Writes `prefs` to `store`, logging instead of failing.
pub fn save(store: &dyn PreferenceStore, prefs: &UserPreferences) {
    let json = match serde_json::to_string(prefs) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize player preferences");
            return;
        }
    };
    if let Err(err) = store.set(PREFERENCES_KEY, &json) {
        tracing::warn!(error = %err, "failed to save player preferences");
    }
}

/// Reads the preference record. Absent, unreadable or malformed data is `None`.
pub fn load(store: &dyn PreferenceStore) -> Option<UserPreferences> {
    let raw = match store.get(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read player preferences");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed player preferences");
            None
        }
    }
}
