// SPDX-License-Identifier: MPL-2.0
//! Language filter of the gallery.

use crate::domain::video::{VideoItem, VideoLanguage};
use std::fmt;
use std::str::FromStr;

/// Restricts the gallery to one language, or shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(VideoLanguage),
}

impl LanguageFilter {
    /// Filter options in display order: `All` first, then every language.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(VideoLanguage::ALL.into_iter().map(Self::Only))
            .collect()
    }

    #[must_use]
    pub fn matches(self, video: &VideoItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(language) => video.language == language,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Videos",
            Self::Only(language) => language.label(),
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(language) => language.tag(),
        }
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LanguageFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<VideoLanguage>()
            .map(Self::Only)
            .map_err(|_| format!("unknown language filter '{s}'"))
    }
}
