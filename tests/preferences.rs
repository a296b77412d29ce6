// SPDX-License-Identifier: MPL-2.0
//! Preference persistence through the file-backed store.

use std::fs;
use std::sync::Arc;

use approx::assert_abs_diff_eq;
use video_showcase::application::port::PreferenceStore;
use video_showcase::domain::video::{VideoQuality, Volume};
use video_showcase::infrastructure::{FfmpegProbe, JsonFileStore, NoFullscreen};
use video_showcase::service::{UserPreferences, VideoService, PREFERENCES_KEY};

fn service_with(store: JsonFileStore) -> VideoService {
    VideoService::new(
        Arc::new(FfmpegProbe::new()),
        Arc::new(NoFullscreen),
        Arc::new(store),
    )
}

#[test]
fn preferences_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs").join("preferences.json");

    let prefs = UserPreferences {
        volume: Volume::new(0.35),
        quality: VideoQuality::P720,
        autoplay: true,
    };
    service_with(JsonFileStore::new(&path)).save_user_preferences(&prefs);
    assert!(path.exists(), "parent directories are created on write");

    let loaded = service_with(JsonFileStore::new(&path)).load_user_preferences();
    assert_eq!(loaded, Some(prefs));
}

#[test]
fn missing_store_yields_no_preferences() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with(JsonFileStore::new(dir.path().join("absent.json")));

    assert_eq!(service.load_user_preferences(), None);
    let volume = service
        .load_user_preferences()
        .map(|prefs| prefs.volume)
        .unwrap_or_default();
    assert_abs_diff_eq!(volume.value(), 0.8);
}

#[test]
fn corrupt_store_reads_as_empty_and_is_replaced() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").expect("write corrupt file");

    let store = JsonFileStore::new(&path);
    assert!(store.get(PREFERENCES_KEY).is_err());

    let service = service_with(JsonFileStore::new(&path));
    assert_eq!(service.load_user_preferences(), None);

    service.save_user_preferences(&UserPreferences::default());
    assert_eq!(
        service.load_user_preferences(),
        Some(UserPreferences::default())
    );
}

#[test]
fn other_keys_are_preserved() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");
    let store = JsonFileStore::new(&path);
    store.set("theme", "dark").expect("write");

    service_with(JsonFileStore::new(&path)).save_user_preferences(&UserPreferences::default());

    assert_eq!(store.get("theme").expect("read").as_deref(), Some("dark"));
    assert!(store.get(PREFERENCES_KEY).expect("read").is_some());
}

#[test]
fn malformed_record_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");
    JsonFileStore::new(&path)
        .set(PREFERENCES_KEY, "{\"volume\":\"loud\"}")
        .expect("write");

    assert_eq!(service_with(JsonFileStore::new(&path)).load_user_preferences(), None);
}

#[test]
fn out_of_range_volume_is_clamped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");
    JsonFileStore::new(&path)
        .set(
            PREFERENCES_KEY,
            "{\"volume\":4.0,\"quality\":\"auto\",\"autoplay\":false}",
        )
        .expect("write");

    let prefs = service_with(JsonFileStore::new(&path))
        .load_user_preferences()
        .expect("record present");
    assert_abs_diff_eq!(prefs.volume.value(), 1.0);
}
