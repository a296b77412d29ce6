// SPDX-License-Identifier: MPL-2.0
//! Modal player view: video surface, overlays, title bar and controls.

use crate::domain::player::PlayerState;
use crate::domain::video::VideoItem;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{controls, overlay, styles};
use crate::video_player::Message;
use iced::widget::{button, column, container, mouse_area, row, text, Space, Stack};
use iced::{alignment, Alignment, Element, Length};

fn title_bar<'a>(item: &VideoItem) -> Element<'a, Message> {
    let mut details = vec![item.language.label().to_string()];
    if let Some(resolution) = item.height_label() {
        details.push(resolution);
    }

    let title = column![
        text(item.title.clone()).size(typography::TITLE_SM),
        text(details.join(" • "))
            .size(typography::CAPTION)
            .color(palette::SLATE_400),
    ]
    .spacing(spacing::XXS);

    let close = button(text("✕"))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::control(false));

    container(
        row![title, Space::new().width(Length::Fill), close]
            .align_y(Alignment::Center)
            .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::controls_bar)
    .into()
}

/// Renders the player for `item` around the host-provided video `surface`.
///
/// The title bar and controls follow `state.show_controls`; the loading
/// or error veil sits between the surface and the controls.
pub fn view<'a>(
    item: &VideoItem,
    state: &PlayerState,
    seek_step: f64,
    surface: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface);

    if let Some(veil) = overlay::for_state(state) {
        layers = layers.push(veil);
    }

    if state.show_controls {
        layers = layers.push(
            column![
                title_bar(item),
                Space::new().height(Length::Fill),
                controls::view(state, seek_step),
            ]
            .width(Length::Fill)
            .height(Length::Fill),
        );
    }

    let framed = container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::glass_card);

    mouse_area(framed)
        .on_move(|_| Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .into()
}
