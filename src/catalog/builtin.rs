// SPDX-License-Identifier: MPL-2.0
//! Catalog shipped with the binary.

use super::{Catalog, VideoCollection};
use crate::domain::video::{VideoCategory, VideoItem, VideoLanguage};
use chrono::NaiveDate;

const MIB: u64 = 1024 * 1024;
const SAMPLE_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    photo: &'static str,
    sample: &'static str,
    duration: f64,
    language: VideoLanguage,
    category: VideoCategory,
    size_mib: u64,
}

const ENTRIES: [Entry; 5] = [
    Entry {
        id: "system-work-english",
        title: "How The System Works",
        description: "Complete system overview and workflow explanation. Learn about the \
                      AI-powered architecture, database integration, and real-time \
                      processing capabilities.",
        photo: "photo-1551288049-bebda4e38f71",
        sample: "BigBuckBunny.mp4",
        duration: 180.0,
        language: VideoLanguage::English,
        category: VideoCategory::Tutorial,
        size_mib: 45,
    },
    Entry {
        id: "system-work-hindi",
        title: "सिस्टम कैसे काम करता है",
        description: "पूर्ण सिस्टम अवलोकन और वर्कफ़्लो स्पष्टीकरण। AI-संचालित आर्किटेक्चर, \
                      डेटाबेस एकीकरण और रियल-टाइम प्रोसेसिंग क्षमताओं के बारे में जानें।",
        photo: "photo-1504384308090-c894fdcc538d",
        sample: "ElephantsDream.mp4",
        duration: 165.0,
        language: VideoLanguage::Hindi,
        category: VideoCategory::Tutorial,
        size_mib: 42,
    },
    Entry {
        id: "ai-architecture-demo",
        title: "AI Architecture Deep Dive",
        description: "Explore the cutting-edge AI architecture powering our intelligent \
                      data processing system. See how machine learning models work \
                      together seamlessly.",
        photo: "photo-1485827404703-89b55fcc595e",
        sample: "ForBiggerBlazes.mp4",
        duration: 240.0,
        language: VideoLanguage::English,
        category: VideoCategory::Demo,
        size_mib: 60,
    },
    Entry {
        id: "database-integration",
        title: "Database Integration Showcase",
        description: "See how our system seamlessly integrates with multiple database \
                      systems including MongoDB, PostgreSQL, and MySQL with real-time \
                      synchronization.",
        photo: "photo-1558494949-ef010cbdcc31",
        sample: "ForBiggerEscapes.mp4",
        duration: 200.0,
        language: VideoLanguage::English,
        category: VideoCategory::Feature,
        size_mib: 50,
    },
    Entry {
        id: "performance-optimization",
        title: "Performance & Security Features",
        description: "Learn about enterprise-grade security measures and performance \
                      optimizations that make our system reliable and scalable.",
        photo: "photo-1563206767-5b18f218e8de",
        sample: "ForBiggerFun.mp4",
        duration: 150.0,
        language: VideoLanguage::English,
        category: VideoCategory::Overview,
        size_mib: 38,
    },
];

impl Entry {
    fn to_item(&self) -> VideoItem {
        VideoItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            thumbnail: format!(
                "https://images.unsplash.com/{}?w=800&h=450&fit=crop&q=80",
                self.photo
            ),
            video_url: format!("{SAMPLE_BASE}/{}", self.sample),
            duration: self.duration,
            language: self.language,
            category: Some(self.category),
            file_size: Some(self.size_mib * MIB),
            resolution: Some("1920x1080".to_string()),
            aspect_ratio: Some("16:9".to_string()),
            subtitles: Vec::new(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn collections() -> Vec<VideoCollection> {
    vec![
        VideoCollection {
            id: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            description: Some(
                "Essential videos to understand how our AI-powered system works".to_string(),
            ),
            video_ids: vec![
                "system-work-english".to_string(),
                "system-work-hindi".to_string(),
            ],
            category: VideoCategory::Tutorial,
            language: None,
            created_at: date(2024, 1, 1),
            updated_at: date(2024, 1, 15),
        },
        VideoCollection {
            id: "technical-deep-dive".to_string(),
            title: "Technical Deep Dive".to_string(),
            description: Some(
                "In-depth technical demonstrations of core features and capabilities"
                    .to_string(),
            ),
            video_ids: vec![
                "ai-architecture-demo".to_string(),
                "database-integration".to_string(),
                "performance-optimization".to_string(),
            ],
            category: VideoCategory::Demo,
            language: Some(VideoLanguage::English),
            created_at: date(2024, 1, 1),
            updated_at: date(2024, 1, 20),
        },
    ]
}

pub(super) fn catalog() -> Catalog {
    Catalog {
        videos: ENTRIES.iter().map(Entry::to_item).collect(),
        collections: collections(),
    }
}
