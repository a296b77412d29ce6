// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the glass look of the showcase.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn glass(alpha: f32) -> Color {
    Color { a: alpha, ..WHITE }
}

/// Translucent card surface.
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass(opacity::GLASS))),
        text_color: Some(WHITE),
        border: Border {
            color: glass(opacity::BORDER),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dark bar behind the player controls.
pub fn controls_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CONTROLS,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Veil covering the player during loading and errors.
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

fn track(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Unfilled part of a progress or volume track.
pub fn track_empty(_theme: &Theme) -> container::Style {
    track(glass(opacity::BORDER))
}

/// Buffered but not yet played.
pub fn track_buffered(_theme: &Theme) -> container::Style {
    track(palette::SLATE_400)
}

/// Played position or current volume level.
pub fn track_fill(_theme: &Theme) -> container::Style {
    track(palette::BLUE_500)
}

/// Pill-shaped language filter chip.
pub fn filter_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border, text) = if active {
            (
                Color {
                    a: opacity::CHIP_ACTIVE,
                    ..palette::BLUE_500
                },
                palette::BLUE_400,
                palette::BLUE_200,
            )
        } else {
            let alpha = match status {
                button::Status::Hovered | button::Status::Pressed => opacity::GLASS_HOVER,
                _ => opacity::GLASS,
            };
            (glass(alpha), glass(opacity::BORDER), palette::SLATE_300)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: text,
            border: Border {
                color: border,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Flat control button; `active` highlights toggles such as mute.
pub fn control(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::GLASS_HOVER,
            _ if active => opacity::CHIP_ACTIVE,
            _ => opacity::GLASS,
        };
        button::Style {
            background: Some(Background::Color(glass(alpha))),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Primary call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BLUE_400,
        _ => palette::BLUE_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
