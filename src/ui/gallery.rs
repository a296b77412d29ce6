// SPDX-License-Identifier: MPL-2.0
//! Gallery view: header, language filter, stats, featured collection and
//! the card grid.

use crate::domain::video::{format_file_size, format_time, VideoItem};
use crate::gallery::{Gallery, LanguageFilter, Message, Thumbnail, EMPTY_HINT, EMPTY_TITLE};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, scrollable, text, Column, Row, Space};
use iced::{Alignment, ContentFit, Element, Length, Padding};

/// Shown in place of a poster that failed to load.
pub const THUMBNAIL_UNAVAILABLE: &str = "Thumbnail unavailable";

fn filter_bar<'a>(active: LanguageFilter) -> Element<'a, Message> {
    let chips = LanguageFilter::options().into_iter().map(|filter| -> Element<'a, Message> {
        button(text(filter.label()).size(typography::BODY))
            .on_press(Message::FilterSelected(filter))
            .padding([spacing::XS, spacing::LG])
            .style(styles::filter_chip(filter == active))
            .into()
    });

    Row::with_children(chips).spacing(spacing::MD).into()
}

fn stat<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(value).size(typography::TITLE).color(palette::BLUE_400),
            text(label).size(typography::BODY).color(palette::SLATE_300),
        ]
        .align_x(Alignment::Center)
        .spacing(spacing::XXS),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::glass_card)
    .into()
}

fn stats_row<'a>(gallery: &Gallery) -> Element<'a, Message> {
    let stats = gallery.stats();
    row![
        stat(stats.total_videos.to_string(), "Total Videos"),
        stat(stats.minutes_of_content.to_string(), "Minutes of Content"),
        stat(stats.languages.to_string(), "Languages"),
    ]
    .spacing(spacing::LG)
    .into()
}

fn featured<'a>(gallery: &Gallery) -> Option<Element<'a, Message>> {
    let featured = gallery.featured()?;
    let summary = text(format!(
        "{} videos • {} minutes",
        featured.video_count, featured.minutes
    ))
    .size(typography::CAPTION)
    .color(palette::SLATE_400);

    let mut info = column![text(featured.collection.title.clone()).size(typography::TITLE_SM)]
        .spacing(spacing::XS)
        .width(Length::Fill);
    if let Some(description) = &featured.collection.description {
        info = info.push(
            text(description.clone())
                .size(typography::BODY)
                .color(palette::SLATE_300),
        );
    }
    info = info.push(summary);

    let start = button(text("▶ Start Watching"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::primary);
    let start = if featured.first.is_some() {
        start.on_press(Message::StartWatching)
    } else {
        start
    };

    Some(
        container(row![info, start].spacing(spacing::LG).align_y(Alignment::Center))
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::glass_card)
            .into(),
    )
}

fn poster<'a>(thumbnail: &Thumbnail) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Thumbnail::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Thumbnail::Pending => text("▶").size(typography::DISPLAY).into(),
        Thumbnail::Unavailable => text(THUMBNAIL_UNAVAILABLE)
            .size(typography::CAPTION)
            .color(palette::SLATE_400)
            .into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .into()
}

fn card<'a>(video: &VideoItem, thumbnail: &Thumbnail) -> Element<'a, Message> {
    let mut meta = vec![format_time(video.duration), video.language.label().to_string()];
    if let Some(size) = video.file_size {
        meta.push(format_file_size(size));
    }

    let mut body = column![
        poster(thumbnail),
        text(video.title.clone()).size(typography::TITLE_SM),
        text(meta.join(" • "))
            .size(typography::CAPTION)
            .color(palette::SLATE_400),
    ]
    .spacing(spacing::XS);
    if let Some(description) = &video.description {
        body = body.push(
            text(description.clone())
                .size(typography::BODY)
                .color(palette::SLATE_300),
        );
    }

    button(
        container(body)
            .padding(spacing::MD)
            .style(styles::glass_card),
    )
    .on_press(Message::PlayVideo(video.id.clone()))
    .padding(Padding::ZERO)
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .style(styles::control(false))
    .into()
}

fn grid<'a>(gallery: &Gallery, videos: &[&VideoItem]) -> Element<'a, Message> {
    let rows = videos.chunks(sizing::GRID_COLUMNS).map(|chunk| -> Element<'a, Message> {
        Row::with_children(
            chunk
                .iter()
                .map(|video| card(video, gallery.thumbnail(&video.id))),
        )
            .spacing(spacing::LG)
            .into()
    });
    Column::with_children(rows).spacing(spacing::LG).into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text(EMPTY_TITLE).size(typography::TITLE_SM),
            text(EMPTY_HINT).size(typography::BODY).color(palette::SLATE_300),
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center),
    )
    .padding(spacing::XL)
    .center_x(Length::Fill)
    .style(styles::glass_card)
    .into()
}

/// Renders the whole gallery section.
pub fn view<'a>(gallery: &Gallery) -> Element<'a, Message> {
    let header = column![
        text("Video Showcase")
            .size(typography::CAPTION)
            .color(palette::BLUE_200),
        text("Watch & Learn").size(typography::DISPLAY),
        filter_bar(gallery.filter()),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    let visible = gallery.visible_videos();
    let listing = if visible.is_empty() {
        empty_state()
    } else {
        grid(gallery, &visible)
    };

    let mut content = column![header, stats_row(gallery)]
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill);
    if let Some(featured) = featured(gallery) {
        content = content.push(featured);
    }
    content = content.push(listing).push(Space::new().height(spacing::XL));

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::video::VideoLanguage;

    #[test]
    fn view_renders_full_catalog() {
        let gallery = Gallery::new(Catalog::builtin());
        let _element = view(&gallery);
    }

    #[test]
    fn cards_render_in_every_poster_state() {
        let mut gallery = Gallery::new(Catalog::builtin());
        gallery.set_thumbnail(
            "system-work-english".to_string(),
            Ok(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        );
        gallery.set_thumbnail("system-work-hindi".to_string(), Ok(b"nope".to_vec()));
        assert!(matches!(
            gallery.thumbnail("system-work-hindi"),
            Thumbnail::Unavailable
        ));

        for video in gallery.visible_videos() {
            let _card = card(video, gallery.thumbnail(&video.id));
        }
        let _element = view(&gallery);
    }

    #[test]
    fn view_renders_empty_result() {
        let mut gallery = Gallery::new(Catalog::default());
        gallery.set_filter(LanguageFilter::Only(VideoLanguage::Hindi));
        let _element = view(&gallery);
    }
}
