// SPDX-License-Identifier: MPL-2.0
//! Headless probing against real video files.
//!
//! Tests skip themselves when the sample files under `tests/data/` are absent.

use std::path::Path;

use video_showcase::domain::error::VideoError;
use video_showcase::service::VideoService;

const JPEG_PREFIX: &str = "data:image/jpeg;base64,";

fn sample(name: &str) -> Option<String> {
    let path = format!("tests/data/{name}");
    Path::new(&path).exists().then_some(path)
}

#[tokio::test]
async fn test_metadata_mp4() {
    let Some(path) = sample("sample.mp4") else {
        return;
    };

    let metadata = VideoService::headless()
        .metadata(&path)
        .await
        .expect("Should probe MP4");
    assert!(metadata.width > 0, "Width should be > 0");
    assert!(metadata.height > 0, "Height should be > 0");
    assert!(metadata.duration > 0.0, "Duration should be > 0");
    assert_eq!(metadata.format, "video/mp4");
    assert!(metadata.file_size.is_some());
}

#[tokio::test]
async fn test_metadata_webm() {
    let Some(path) = sample("sample.webm") else {
        return;
    };

    let metadata = VideoService::headless()
        .metadata(&path)
        .await
        .expect("Should probe WebM");
    assert_eq!(metadata.format, "video/webm");
    assert!(!metadata.aspect_ratio.is_empty());
}

#[tokio::test]
async fn test_thumbnail_mp4() {
    let Some(path) = sample("sample.mp4") else {
        return;
    };

    let uri = VideoService::headless()
        .generate_thumbnail(&path)
        .await
        .expect("Should capture a thumbnail");
    assert!(uri.starts_with(JPEG_PREFIX));
    assert!(uri.len() > JPEG_PREFIX.len());
}

#[tokio::test]
async fn test_thumbnail_past_end_falls_back() {
    let Some(path) = sample("sample.mp4") else {
        return;
    };

    // Seeking past the end still yields the last decodable frame or a
    // decode error, never a load failure.
    match VideoService::headless()
        .generate_thumbnail_at(&path, 86_400.0)
        .await
    {
        Ok(uri) => assert!(uri.starts_with(JPEG_PREFIX)),
        Err(err) => assert!(matches!(err, VideoError::DecodeError(_)), "{err:?}"),
    }
}

#[tokio::test]
async fn test_preload_mp4() {
    let Some(path) = sample("sample.mp4") else {
        return;
    };

    VideoService::headless()
        .preload(&path)
        .await
        .expect("Should decode the first frame");
}

#[tokio::test]
async fn test_missing_file_is_load_failure() {
    let service = VideoService::headless();
    let err = service
        .metadata("tests/data/does-not-exist.mp4")
        .await
        .expect_err("missing file must fail");
    assert!(matches!(err, VideoError::LoadFailed(_)), "{err:?}");

    let err = service
        .generate_thumbnail("tests/data/does-not-exist.mp4")
        .await
        .expect_err("missing file must fail");
    assert!(matches!(err, VideoError::LoadFailed(_)), "{err:?}");
}

#[test]
fn test_unknown_containers_are_unplayable() {
    let service = VideoService::headless();
    assert!(!service.validate_format_support("video/x-unknown"));
    assert!(!service.validate_format_support("audio/mpeg"));
    assert!(!service.validate_format_support("video/mp4; codecs=\"xyz1\""));
}
