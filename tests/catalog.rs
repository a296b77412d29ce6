// SPDX-License-Identifier: MPL-2.0
//! Catalog files loaded from disk and browsed through the gallery.

use std::fs;

use approx::assert_abs_diff_eq;
use video_showcase::catalog::Catalog;
use video_showcase::domain::video::{VideoCategory, VideoLanguage};
use video_showcase::error::Error;
use video_showcase::gallery::{Gallery, LanguageFilter, FEATURED_COLLECTION_ID};

const COURSE: &str = r#"
[[videos]]
id = "welcome"
title = "Welcome"
thumbnail = "https://cdn.example.com/welcome.jpg"
video_url = "https://cdn.example.com/welcome.webm"
duration = 150.0
language = "english"
category = "overview"

[[videos]]
id = "welcome-hi"
title = "स्वागत"
thumbnail = "https://cdn.example.com/welcome-hi.jpg"
video_url = "https://cdn.example.com/welcome-hi.webm"
duration = 155.5
language = "hindi"
category = "overview"

[[videos]]
id = "setup"
title = "Setup"
thumbnail = "https://cdn.example.com/setup.jpg"
video_url = "https://cdn.example.com/setup.mp4"
duration = 320.0
language = "english"
category = "tutorial"

[[collections]]
id = "getting-started"
title = "Getting Started"
description = "First steps"
video_ids = ["setup", "welcome"]
category = "tutorial"
created_at = "2024-03-01"
updated_at = "2024-03-09"
"#;

fn course_catalog() -> Catalog {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("course.toml");
    fs::write(&path, COURSE).expect("write catalog");
    Catalog::load_from_path(&path).expect("load catalog")
}

#[test]
fn loaded_catalog_drives_the_gallery() {
    let mut gallery = Gallery::new(course_catalog());

    let stats = gallery.stats();
    assert_eq!(stats.total_videos, 3);
    assert_eq!(stats.minutes_of_content, 10);
    assert_eq!(stats.languages, 2);

    gallery.set_filter(LanguageFilter::Only(VideoLanguage::English));
    let ids: Vec<_> = gallery.visible_videos().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["welcome", "setup"]);

    // Stats ignore the filter.
    assert_eq!(gallery.stats(), stats);
}

#[test]
fn featured_collection_follows_member_order() {
    let mut gallery = Gallery::new(course_catalog());

    let featured = gallery.featured().expect("featured collection present");
    assert_eq!(featured.collection.id, FEATURED_COLLECTION_ID);
    assert_eq!(featured.video_count, 2);
    assert_eq!(featured.minutes, 7);
    assert_eq!(featured.first.map(|v| v.id.as_str()), Some("setup"));

    let started = gallery.start_watching().map(|v| v.id.clone());
    assert_eq!(started.as_deref(), Some("setup"));
    assert_eq!(gallery.selected().map(|v| v.title.as_str()), Some("Setup"));
}

#[test]
fn catalog_without_featured_collection_still_lists() {
    let text = COURSE.replace("getting-started", "advanced");
    let mut gallery = Gallery::new(Catalog::from_toml_str(&text).expect("parse"));

    assert!(gallery.featured().is_none());
    assert!(gallery.start_watching().is_none());
    assert!(gallery.selected().is_none());
    assert_eq!(gallery.visible_videos().len(), 3);
}

#[test]
fn collection_queries() {
    let catalog = course_catalog();
    let collection = catalog.collection("getting-started").expect("present");

    assert_abs_diff_eq!(catalog.total_duration(collection), 470.0);
    assert_eq!(collection.created_at.to_string(), "2024-03-01");
    assert_eq!(
        catalog
            .videos_by_category(VideoCategory::Overview)
            .map(|v| v.id.as_str())
            .collect::<Vec<_>>(),
        ["welcome", "welcome-hi"]
    );
}

#[test]
fn empty_filter_result_is_reported() {
    let text = COURSE.replace("language = \"hindi\"", "language = \"english\"");
    let mut gallery = Gallery::new(Catalog::from_toml_str(&text).expect("parse"));

    gallery.set_filter(LanguageFilter::Only(VideoLanguage::Hindi));
    assert!(gallery.is_empty_result());
    assert!(gallery.visible_videos().is_empty());
    assert_eq!(gallery.stats().languages, 1);
}

#[test]
fn saved_catalog_reloads_identically() {
    let catalog = Catalog::builtin();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("builtin.toml");
    fs::write(&path, catalog.to_toml_string().expect("serialize")).expect("write");

    let reloaded = Catalog::load_from_path(&path).expect("reload");
    assert_eq!(reloaded, catalog);
}

#[test]
fn invalid_catalogs_are_rejected() {
    let dangling = COURSE.replace("[\"setup\", \"welcome\"]", "[\"setup\", \"missing\"]");
    assert!(matches!(
        Catalog::from_toml_str(&dangling),
        Err(Error::Catalog(_))
    ));

    let bad_language = COURSE.replacen("language = \"english\"", "language = \"french\"", 1);
    assert!(matches!(
        Catalog::from_toml_str(&bad_language),
        Err(Error::Config(_))
    ));
}
