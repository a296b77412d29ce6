// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery and player views.
//!
//! Spacing follows an 8px grid; colors are tuned for the dark glass look of
//! the showcase (translucent panels over a near-black backdrop).

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_900: Color = Color::from_rgb(0.06, 0.09, 0.16);
    pub const SLATE_700: Color = Color::from_rgb(0.2, 0.25, 0.33);
    pub const SLATE_400: Color = Color::from_rgb(0.58, 0.64, 0.72);
    pub const SLATE_300: Color = Color::from_rgb(0.8, 0.84, 0.88);

    pub const BLUE_200: Color = Color::from_rgb(0.75, 0.86, 1.0);
    pub const BLUE_400: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const BLUE_500: Color = Color::from_rgb(0.23, 0.51, 0.96);

    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
}

pub mod opacity {
    pub const GLASS: f32 = 0.05;
    pub const GLASS_HOVER: f32 = 0.1;
    pub const BORDER: f32 = 0.2;
    pub const CHIP_ACTIVE: f32 = 0.2;
    pub const OVERLAY: f32 = 0.6;
    pub const CONTROLS: f32 = 0.75;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const VOLUME_TRACK_WIDTH: f32 = 8.0;
    pub const VOLUME_TRACK_HEIGHT: f32 = 36.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;
    pub const CARD_WIDTH: f32 = 320.0;
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;
    /// Cards per gallery row.
    pub const GRID_COLUMNS: usize = 3;
}

pub mod typography {
    pub const DISPLAY: f32 = 40.0;
    pub const TITLE: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::GLASS < opacity::GLASS_HOVER);
    assert!(opacity::OVERLAY > 0.0 && opacity::OVERLAY < 1.0);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::GRID_COLUMNS > 0);
};
