// SPDX-License-Identifier: MPL-2.0
//! Playback quality heuristic.

use crate::config::{FULL_HD_MIN_WIDTH, HD_MIN_WIDTH};
use crate::domain::video::VideoQuality;
use std::str::FromStr;

/// Effective connection type, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    SlowTwoG,
    TwoG,
    ThreeG,
    FourG,
    /// Reported but not one of the known tiers.
    Other,
}

impl FromStr for NetworkType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => NetworkType::SlowTwoG,
            "2g" => NetworkType::TwoG,
            "3g" => NetworkType::ThreeG,
            "4g" => NetworkType::FourG,
            _ => NetworkType::Other,
        })
    }
}

/// What the host knows about the device and its connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceHints {
    pub network: Option<NetworkType>,
    /// Display width in physical pixels.
    pub display_width: u32,
}

/// Picks a quality from the network type first, then the display width.
///
/// ```
/// use video_showcase::domain::video::VideoQuality;
/// use video_showcase::service::{pick_optimal_quality, DeviceHints, NetworkType};
///
/// let hints = DeviceHints { network: Some(NetworkType::ThreeG), display_width: 3840 };
/// assert_eq!(pick_optimal_quality(hints), VideoQuality::P720);
/// ```
#[must_use]
pub fn pick_optimal_quality(hints: DeviceHints) -> VideoQuality {
    if let Some(network) = hints.network {
        return match network {
            NetworkType::FourG => VideoQuality::P1080,
            NetworkType::ThreeG => VideoQuality::P720,
            NetworkType::TwoG | NetworkType::SlowTwoG => VideoQuality::P480,
            NetworkType::Other => VideoQuality::Auto,
        };
    }

    if hints.display_width >= FULL_HD_MIN_WIDTH {
        VideoQuality::P1080
    } else if hints.display_width >= HD_MIN_WIDTH {
        VideoQuality::P720
    } else {
        VideoQuality::P480
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(kind: &str) -> DeviceHints {
        DeviceHints {
            network: kind.parse().ok(),
            display_width: 0,
        }
    }

    #[test]
    fn network_type_wins_over_width() {
        assert_eq!(pick_optimal_quality(network("4g")), VideoQuality::P1080);
        assert_eq!(pick_optimal_quality(network("3g")), VideoQuality::P720);
        assert_eq!(pick_optimal_quality(network("2g")), VideoQuality::P480);
        assert_eq!(pick_optimal_quality(network("slow-2g")), VideoQuality::P480);
        assert_eq!(pick_optimal_quality(network("wifi")), VideoQuality::Auto);
    }

    #[test]
    fn width_thresholds_apply_without_network() {
        let width = |display_width| DeviceHints {
            network: None,
            display_width,
        };
        assert_eq!(pick_optimal_quality(width(2560)), VideoQuality::P1080);
        assert_eq!(pick_optimal_quality(width(1920)), VideoQuality::P1080);
        assert_eq!(pick_optimal_quality(width(1280)), VideoQuality::P720);
        assert_eq!(pick_optimal_quality(width(1279)), VideoQuality::P480);
    }
}
