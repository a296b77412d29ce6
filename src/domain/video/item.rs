// SPDX-License-Identifier: MPL-2.0
//! Catalog entries and their enumerated tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spoken language of a catalog video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoLanguage {
    English,
    Hindi,
}

impl VideoLanguage {
    /// All supported languages, in display order.
    pub const ALL: [VideoLanguage; 2] = [VideoLanguage::English, VideoLanguage::Hindi];

    /// Stable lowercase tag, as stored in catalogs.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            VideoLanguage::English => "english",
            VideoLanguage::Hindi => "hindi",
        }
    }

    /// Label shown on cards and filter buttons, in the language itself.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VideoLanguage::English => "English",
            VideoLanguage::Hindi => "हिंदी",
        }
    }
}

impl fmt::Display for VideoLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VideoLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(VideoLanguage::English),
            "hindi" => Ok(VideoLanguage::Hindi),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Editorial category of a catalog video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCategory {
    Tutorial,
    Demo,
    Feature,
    Overview,
}

impl VideoCategory {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            VideoCategory::Tutorial => "tutorial",
            VideoCategory::Demo => "demo",
            VideoCategory::Feature => "feature",
            VideoCategory::Overview => "overview",
        }
    }
}

impl fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Requested playback quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VideoQuality {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
}

impl VideoQuality {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            VideoQuality::Auto => "auto",
            VideoQuality::P480 => "480p",
            VideoQuality::P720 => "720p",
            VideoQuality::P1080 => "1080p",
        }
    }

    /// Label used in a quality picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VideoQuality::Auto => "Auto",
            VideoQuality::P480 => "480p",
            VideoQuality::P720 => "720p HD",
            VideoQuality::P1080 => "1080p HD",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Subtitle track attached to a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    pub language: VideoLanguage,
    pub label: String,
    pub src: String,
    #[serde(default)]
    pub default: bool,
}

/// Immutable descriptor of a playable asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail: String,
    pub video_url: String,
    /// Duration in seconds, always positive.
    pub duration: f64,
    pub language: VideoLanguage,
    #[serde(default)]
    pub category: Option<VideoCategory>,
    /// File size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Pixel resolution such as `1920x1080`.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Aspect ratio such as `16:9`.
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub subtitles: Vec<SubtitleTrack>,
}

impl VideoItem {
    /// Vertical resolution label (`1080p`) derived from `resolution`.
    #[must_use]
    pub fn height_label(&self) -> Option<String> {
        let (_, height) = self.resolution.as_deref()?.split_once('x')?;
        Some(format!("{}p", height.trim()))
    }

    /// Default subtitle track, falling back to the first one.
    #[must_use]
    pub fn default_subtitle(&self) -> Option<&SubtitleTrack> {
        self.subtitles
            .iter()
            .find(|track| track.default)
            .or_else(|| self.subtitles.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(resolution: Option<&str>) -> VideoItem {
        VideoItem {
            id: "demo".into(),
            title: "Demo".into(),
            description: None,
            thumbnail: "https://example.com/t.jpg".into(),
            video_url: "https://example.com/v.mp4".into(),
            duration: 60.0,
            language: VideoLanguage::English,
            category: None,
            file_size: None,
            resolution: resolution.map(str::to_string),
            aspect_ratio: None,
            subtitles: Vec::new(),
        }
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("Hindi".parse::<VideoLanguage>(), Ok(VideoLanguage::Hindi));
        assert_eq!(
            " english ".parse::<VideoLanguage>(),
            Ok(VideoLanguage::English)
        );
        assert!("klingon".parse::<VideoLanguage>().is_err());
    }

    #[test]
    fn language_labels_use_native_script() {
        assert_eq!(VideoLanguage::Hindi.label(), "हिंदी");
        assert_eq!(VideoLanguage::English.label(), "English");
    }

    #[test]
    fn quality_serializes_to_tag() {
        let json = serde_json::to_string(&VideoQuality::P720).expect("serialize");
        assert_eq!(json, "\"720p\"");
        let parsed: VideoQuality = serde_json::from_str("\"auto\"").expect("parse");
        assert_eq!(parsed, VideoQuality::Auto);
    }

    #[test]
    fn height_label_reads_resolution() {
        assert_eq!(
            item(Some("1920x1080")).height_label(),
            Some("1080p".to_string())
        );
        assert_eq!(item(Some("garbage")).height_label(), None);
        assert_eq!(item(None).height_label(), None);
    }

    #[test]
    fn default_subtitle_prefers_flagged_track() {
        let mut video = item(None);
        video.subtitles = vec![
            SubtitleTrack {
                language: VideoLanguage::English,
                label: "English".into(),
                src: "en.vtt".into(),
                default: false,
            },
            SubtitleTrack {
                language: VideoLanguage::Hindi,
                label: "हिंदी".into(),
                src: "hi.vtt".into(),
                default: true,
            },
        ];
        assert_eq!(
            video.default_subtitle().map(|t| t.src.as_str()),
            Some("hi.vtt")
        );
    }
}
