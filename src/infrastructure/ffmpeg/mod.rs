// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MediaProbe`] port trait.
//!
//! This module provides [`FfmpegProbe`], a stateless headless probe. Every
//! call opens its own input context, so the probe is `Send + Sync` and can be
//! shared behind an `Arc` across blocking tasks.
//!
//! # Design Notes
//!
//! - Local paths and network URLs both go through `avformat_open_input`
//! - Errors before the input is open map to [`VideoError::LoadFailed`]
//! - Everything after that maps to [`VideoError::DecodeError`]
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe

use std::sync::OnceLock;

use ffmpeg_next as ffmpeg;

use crate::application::port::{FormatSupport, MediaProbe, ProbedStream};
use crate::domain::error::VideoError;
use crate::domain::video::RawFrame;

/// Result of the one-time `FFmpeg` initialization.
static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Tolerance when comparing a frame timestamp with the requested offset.
const TIMESTAMP_EPSILON_SECS: f64 = 0.001;

/// Initializes `FFmpeg` once and silences its warnings.
///
/// Safe to call repeatedly; a failed initialization is reported on every call.
///
/// # Errors
///
/// Returns [`VideoError::LoadFailed`] if `FFmpeg` cannot be initialized.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
            // SAFETY: av_log_set_level only updates a global log threshold
            unsafe {
                ffmpeg::ffi::av_log_set_level(ffmpeg::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(VideoError::LoadFailed)
}

/// `FFmpeg`-based implementation of [`MediaProbe`].
///
/// # Example
///
/// ```ignore
/// use video_showcase::application::port::MediaProbe;
/// use video_showcase::infrastructure::ffmpeg::FfmpegProbe;
///
/// let probe = FfmpegProbe::new();
/// let stream = probe.probe("clip.mp4")?;
/// println!("{}x{} {:.1}s", stream.width, stream.height, stream.duration);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProbe;

impl FfmpegProbe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn open_input(source: &str) -> Result<ffmpeg::format::context::Input, VideoError> {
    init_ffmpeg()?;
    ffmpeg::format::input(&source)
        .map_err(|e| VideoError::LoadFailed(format!("Failed to open {source}: {e}")))
}

fn open_video_decoder(
    parameters: ffmpeg::codec::Parameters,
) -> Result<ffmpeg::decoder::Video, VideoError> {
    let context = ffmpeg::codec::context::Context::from_parameters(parameters)
        .map_err(|e| VideoError::DecodeError(format!("Failed to create codec context: {e}")))?;
    context
        .decoder()
        .video()
        .map_err(|e| VideoError::DecodeError(format!("Failed to create video decoder: {e}")))
}

/// Finds the best video stream and opens a decoder for it.
fn best_video_stream(
    ictx: &ffmpeg::format::context::Input,
    source: &str,
) -> Result<(usize, f64, ffmpeg::decoder::Video), VideoError> {
    let stream = ictx
        .streams()
        .best(ffmpeg::media::Type::Video)
        .ok_or_else(|| VideoError::DecodeError(format!("No video stream in {source}")))?;

    let time_base = stream.time_base();
    let time_base_secs = if time_base.denominator() == 0 {
        0.0
    } else {
        f64::from(time_base.numerator()) / f64::from(time_base.denominator())
    };

    let decoder = open_video_decoder(stream.parameters())?;
    if decoder.width() == 0 || decoder.height() == 0 {
        return Err(VideoError::DecodeError(format!(
            "Invalid video dimensions: {}x{}",
            decoder.width(),
            decoder.height()
        )));
    }

    Ok((stream.index(), time_base_secs, decoder))
}

/// Copies the RGBA plane of a scaled frame, dropping row padding.
#[allow(clippy::cast_possible_truncation)]
fn extract_rgba_data(frame: &ffmpeg::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
    }
    rgba_bytes
}

fn to_raw_frame(
    decoder: &ffmpeg::decoder::Video,
    frame: &ffmpeg::frame::Video,
) -> Result<RawFrame, VideoError> {
    let (width, height) = (frame.width(), frame.height());
    let mut scaler = ffmpeg::software::scaling::Context::get(
        frame.format(),
        width,
        height,
        ffmpeg::format::Pixel::RGBA,
        width,
        height,
        ffmpeg::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::DecodeError(format!("Failed to create scaler: {e}")))?;

    let mut rgba = ffmpeg::frame::Video::empty();
    scaler
        .run(frame, &mut rgba)
        .map_err(|e| VideoError::DecodeError(format!("Scaling failed: {e}")))?;

    RawFrame::from_rgba(width, height, extract_rgba_data(&rgba)).ok_or_else(|| {
        VideoError::DecodeError(format!(
            "Unexpected frame buffer for {}x{} ({:?})",
            width,
            height,
            decoder.format()
        ))
    })
}

impl MediaProbe for FfmpegProbe {
    #[allow(clippy::cast_precision_loss)]
    fn probe(&self, source: &str) -> Result<ProbedStream, VideoError> {
        let ictx = open_input(source)?;
        let (index, time_base_secs, decoder) = best_video_stream(&ictx, source)?;

        let stream = ictx
            .stream(index)
            .ok_or_else(|| VideoError::DecodeError(format!("Stream {index} vanished")))?;

        let duration = if stream.duration() > 0 {
            stream.duration() as f64 * time_base_secs
        } else if ictx.duration() > 0 {
            ictx.duration() as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE)
        } else {
            0.0
        };

        let frame_rate = {
            let rate = stream.avg_frame_rate();
            (rate.numerator() > 0 && rate.denominator() > 0)
                .then(|| f64::from(rate.numerator()) / f64::from(rate.denominator()))
        };

        let codecs = ictx
            .streams()
            .map(|s| s.parameters().id())
            .filter(|id| *id != ffmpeg::codec::Id::None)
            .map(|id| id.name().to_string())
            .collect();

        let bitrate = u64::try_from(ictx.bit_rate()).ok().filter(|b| *b > 0);

        let file_size = std::fs::metadata(source)
            .ok()
            .filter(std::fs::Metadata::is_file)
            .map(|m| m.len());

        Ok(ProbedStream {
            width: decoder.width(),
            height: decoder.height(),
            duration,
            file_size,
            codecs,
            bitrate,
            frame_rate,
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn capture_frame(&self, source: &str, at_secs: f64) -> Result<RawFrame, VideoError> {
        let mut ictx = open_input(source)?;
        let (index, time_base_secs, mut decoder) = best_video_stream(&ictx, source)?;

        let target = if at_secs.is_finite() { at_secs.max(0.0) } else { 0.0 };
        if target > 0.0 {
            let timestamp = (target * f64::from(ffmpeg::ffi::AV_TIME_BASE)) as i64;
            ictx.seek(timestamp, ..timestamp)
                .map_err(|e| VideoError::DecodeError(format!("Seek failed: {e}")))?;
        }

        let mut decoded = ffmpeg::frame::Video::empty();
        let mut last: Option<ffmpeg::frame::Video> = None;

        for (stream, packet) in ictx.packets() {
            if stream.index() != index {
                continue;
            }
            decoder
                .send_packet(&packet)
                .map_err(|e| VideoError::DecodeError(format!("Packet send failed: {e}")))?;

            while decoder.receive_frame(&mut decoded).is_ok() {
                let reached = decoded.timestamp().map_or(true, |pts| {
                    pts as f64 * time_base_secs + TIMESTAMP_EPSILON_SECS >= target
                });
                let frame = std::mem::replace(&mut decoded, ffmpeg::frame::Video::empty());
                if reached {
                    return to_raw_frame(&decoder, &frame);
                }
                last = Some(frame);
            }
        }

        // Offset past the last packet: drain and fall back to the final frame.
        if decoder.send_eof().is_ok() {
            while decoder.receive_frame(&mut decoded).is_ok() {
                last = Some(std::mem::replace(
                    &mut decoded,
                    ffmpeg::frame::Video::empty(),
                ));
            }
        }

        match last {
            Some(frame) => to_raw_frame(&decoder, &frame),
            None => Err(VideoError::DecodeError(format!(
                "Could not decode a frame at {target:.2}s"
            ))),
        }
    }

    fn can_play_type(&self, mime: &str) -> FormatSupport {
        let Some(requirement) = MimeRequirement::parse(mime) else {
            return FormatSupport::No;
        };
        if init_ffmpeg().is_err() {
            return FormatSupport::No;
        }
        requirement.support(|name| ffmpeg::decoder::find_by_name(name).is_some())
    }

    fn preload(&self, source: &str) -> Result<(), VideoError> {
        let mut ictx = open_input(source)?;
        let (index, _, mut decoder) = best_video_stream(&ictx, source)
            .map_err(|e| VideoError::LoadFailed(e.message().to_string()))?;

        let mut decoded = ffmpeg::frame::Video::empty();
        for (stream, packet) in ictx.packets() {
            if stream.index() != index {
                continue;
            }
            if decoder.send_packet(&packet).is_err() {
                continue;
            }
            if decoder.receive_frame(&mut decoded).is_ok() {
                tracing::debug!(source, "preload reached first decodable frame");
                return Ok(());
            }
        }

        Err(VideoError::LoadFailed(format!(
            "{source} ended before a frame could be decoded"
        )))
    }
}

// =============================================================================
// MIME parsing
// =============================================================================

/// Decoders a MIME type needs, parsed from `type/subtype; codecs="..."`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MimeRequirement {
    /// Decoder implied by the container alone.
    container: &'static str,
    /// Decoder for each listed codec; `None` for unknown tags.
    codecs: Vec<Option<&'static str>>,
}

impl MimeRequirement {
    fn parse(mime: &str) -> Option<Self> {
        let mut parts = mime.split(';');
        let essence = parts.next()?.trim().to_ascii_lowercase();
        let (kind, subtype) = essence.split_once('/')?;
        if kind != "video" {
            return None;
        }
        let container = container_decoder(subtype)?;

        let codecs = parts
            .filter_map(|param| {
                let (name, value) = param.split_once('=')?;
                (name.trim().eq_ignore_ascii_case("codecs")).then_some(value)
            })
            .flat_map(|value| {
                value
                    .trim()
                    .trim_matches('"')
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(codec_decoder)
                    .collect::<Vec<_>>()
            })
            .collect();

        Some(Self { container, codecs })
    }

    fn support(&self, has_decoder: impl Fn(&str) -> bool) -> FormatSupport {
        if !has_decoder(self.container) {
            return FormatSupport::No;
        }
        if self.codecs.is_empty() {
            return FormatSupport::Maybe;
        }
        let all_known = self
            .codecs
            .iter()
            .all(|codec| codec.is_some_and(|name| has_decoder(name)));
        if all_known {
            FormatSupport::Probably
        } else {
            FormatSupport::No
        }
    }
}

fn container_decoder(subtype: &str) -> Option<&'static str> {
    match subtype {
        "mp4" | "quicktime" | "x-matroska" => Some("h264"),
        "webm" => Some("vp8"),
        "ogg" => Some("theora"),
        _ => None,
    }
}

fn codec_decoder(tag: &str) -> Option<&'static str> {
    let family = tag.split('.').next().unwrap_or_default().to_ascii_lowercase();
    match family.as_str() {
        "avc1" | "avc3" | "h264" => Some("h264"),
        "hvc1" | "hev1" => Some("hevc"),
        "vp8" => Some("vp8"),
        "vp9" | "vp09" => Some("vp9"),
        "av01" => Some("av1"),
        "theora" => Some("theora"),
        "mp4a" => Some("aac"),
        "opus" => Some("opus"),
        "vorbis" => Some("vorbis"),
        "flac" => Some("flac"),
        _ => None,
    }
}
