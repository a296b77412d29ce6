// SPDX-License-Identifier: MPL-2.0
//! JPEG data-URI encoding for captured frames.

use crate::config::THUMBNAIL_JPEG_QUALITY;
use crate::domain::error::VideoError;
use crate::domain::video::RawFrame;
use base64::{engine::general_purpose, Engine as _};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{ExtendedColorType, ImageEncoder};

/// Prefix of every generated thumbnail URI.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encodes `frame` as a baseline JPEG and wraps it in a `data:` URI.
///
/// # Errors
///
/// Returns [`VideoError::DecodeError`] if the frame has no pixels or the
/// encoder rejects it.
pub fn encode_jpeg_data_uri(frame: &RawFrame) -> Result<String, VideoError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(VideoError::DecodeError(
            "Cannot encode an empty frame".to_string(),
        ));
    }

    let rgb = frame.to_rgb();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, THUMBNAIL_JPEG_QUALITY)
        .write_image(&rgb, frame.width(), frame.height(), ExtendedColorType::Rgb8)
        .map_err(|e| VideoError::DecodeError(format!("JPEG encoding failed: {e}")))?;

    Ok(format!(
        "{JPEG_DATA_URI_PREFIX}{}",
        general_purpose::STANDARD.encode(&jpeg)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_jpeg_with_soi_marker() {
        let frame = RawFrame::from_rgba(4, 4, vec![200; 4 * 4 * 4]).expect("frame");
        let uri = encode_jpeg_data_uri(&frame).expect("encode");
        assert!(uri.starts_with(JPEG_DATA_URI_PREFIX));

        let payload = &uri[JPEG_DATA_URI_PREFIX.len()..];
        let bytes = general_purpose::STANDARD.decode(payload).expect("base64");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn empty_frame_is_decode_error() {
        let frame = RawFrame::from_rgba(0, 0, Vec::new()).expect("empty frame");
        assert!(matches!(
            encode_jpeg_data_uri(&frame),
            Err(VideoError::DecodeError(_))
        ));
    }
}
