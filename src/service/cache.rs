// SPDX-License-Identifier: MPL-2.0
//! Process-wide metadata cache keyed by source URI.
//!
//! Entries are never invalidated. Concurrent inserts for the same URI keep
//! the first value.

use crate::domain::video::VideoMetadata;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

static METADATA_CACHE: OnceLock<Mutex<HashMap<String, VideoMetadata>>> = OnceLock::new();

fn cache() -> &'static Mutex<HashMap<String, VideoMetadata>> {
    METADATA_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Cached metadata for `source`, if probed before.
pub(crate) fn get(source: &str) -> Option<VideoMetadata> {
    cache()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(source)
        .cloned()
}

/// Stores `metadata` unless an entry exists, returning the cached value.
pub(crate) fn insert(source: &str, metadata: VideoMetadata) -> VideoMetadata {
    cache()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(source.to_string())
        .or_insert(metadata)
        .clone()
}

/// Number of cached entries.
pub(crate) fn len() -> usize {
    cache().lock().unwrap_or_else(PoisonError::into_inner).len()
}
