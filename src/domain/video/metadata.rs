// SPDX-License-Identifier: MPL-2.0
//! Probed properties of a video resource.

use serde::{Deserialize, Serialize};

/// Technical metadata extracted from a video resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Duration in seconds.
    pub duration: f64,
    pub width: u32,
    pub height: u32,
    /// Reduced ratio such as `16:9`.
    pub aspect_ratio: String,
    /// Size in bytes, when the probe could tell.
    pub file_size: Option<u64>,
    /// MIME type guessed from the URL extension.
    pub format: String,
    /// Codec names, best effort. May be empty.
    pub codecs: Vec<String>,
    /// Bits per second.
    pub bitrate: Option<u64>,
    pub frame_rate: Option<f64>,
}

impl VideoMetadata {
    /// Builds metadata from probed dimensions, deriving aspect ratio and format.
    #[must_use]
    pub fn new(source: &str, width: u32, height: u32, duration: f64) -> Self {
        Self {
            duration,
            width,
            height,
            aspect_ratio: calculate_aspect_ratio(width, height),
            file_size: None,
            format: format_from_url(source).to_string(),
            codecs: Vec::new(),
            bitrate: None,
            frame_rate: None,
        }
    }

    /// Returns the resolution as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Greatest common divisor. `gcd(a, 0) == a`, so `gcd(0, h) == h`.
#[must_use]
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Reduces `width:height` by their greatest common divisor.
///
/// ```
/// use video_showcase::domain::video::calculate_aspect_ratio;
///
/// assert_eq!(calculate_aspect_ratio(1920, 1080), "16:9");
/// assert_eq!(calculate_aspect_ratio(0, 0), "0:0");
/// ```
#[must_use]
pub fn calculate_aspect_ratio(width: u32, height: u32) -> String {
    let divisor = gcd(width, height);
    if divisor == 0 {
        return "0:0".to_string();
    }
    format!("{}:{}", width / divisor, height / divisor)
}

/// Guesses a MIME type from the extension of a URL path.
///
/// Query strings and fragments are ignored. Unknown extensions map to
/// `video/mp4`.
#[must_use]
pub fn format_from_url(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();
    let extension = file
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("webm") => "video/webm",
        Some("ogg" | "ogv") => "video/ogg",
        _ => "video/mp4",
    }
}
