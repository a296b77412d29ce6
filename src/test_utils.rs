// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

// Float assertions used across the player and service tests.
pub use approx::assert_abs_diff_eq;

/// Unique source URI for tests touching the process-wide metadata cache.
pub fn unique_uri(tag: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(0);
    format!("test://{tag}/{}", NEXT.fetch_add(1, Ordering::Relaxed))
}
