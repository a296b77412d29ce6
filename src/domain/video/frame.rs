// SPDX-License-Identifier: MPL-2.0
//! Decoded video frame without presentation dependencies.

use std::sync::Arc;

/// A single decoded frame as tightly packed RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawFrame {
    /// Wraps RGBA pixel data. Returns `None` if the buffer length does not
    /// match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if rgba_bytes.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the pixels as packed RGB, dropping the alpha channel.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.rgba_bytes
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(RawFrame::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(RawFrame::from_rgba(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn to_rgb_drops_alpha() {
        let frame = RawFrame::from_rgba(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 128]).expect("frame");
        assert_eq!(frame.to_rgb(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 1);
    }
}
