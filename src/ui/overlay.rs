// SPDX-License-Identifier: MPL-2.0
//! Loading and error veils drawn over the video surface.

use crate::domain::player::{Phase, PlayerState, DEFAULT_LOAD_ERROR};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::video_player::Message;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

fn veil<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::overlay)
        .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    veil(text("Loading…").size(typography::TITLE_SM))
}

/// Shown when playback stalls for data after the first frame.
pub fn buffering<'a>() -> Element<'a, Message> {
    veil(text("Buffering…").size(typography::TITLE_SM))
}

/// Error veil with the message and a close button.
pub fn error<'a>(message: &str) -> Element<'a, Message> {
    let content = column![
        text("Video Error")
            .size(typography::TITLE_SM)
            .color(palette::ERROR_500),
        text(message.to_string())
            .size(typography::BODY)
            .color(palette::SLATE_300),
        button(text("Close"))
            .on_press(Message::Close)
            .padding([spacing::XS, spacing::LG])
            .style(styles::primary),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    veil(content)
}

/// Overlay matching `state`, if any. Errors take precedence over loading.
#[must_use]
pub fn for_state<'a>(state: &PlayerState) -> Option<Element<'a, Message>> {
    match state.phase() {
        Phase::Failed => {
            let message = state.error_message.as_deref().unwrap_or(DEFAULT_LOAD_ERROR);
            Some(error(message))
        }
        Phase::Loading => Some(loading()),
        _ if state.is_buffering() => Some(buffering()),
        _ => None,
    }
}
