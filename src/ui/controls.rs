// SPDX-License-Identifier: MPL-2.0
//! Player controls bar.
//!
//! Layout: progress bar on top, then
//! `[play] [-10] [+10] [mute] [volume] time … quality [fullscreen]`.

use crate::domain::player::PlayerState;
use crate::domain::video::format_time;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{Message, TrackPoint};
use iced::widget::{
    button, column, container, mouse_area, row, slider, text, tooltip, Column, Row, Space, Text,
};
use iced::{Alignment, Element, Length, Theme};

/// Slider resolution of the progress bar, in seconds.
const PROGRESS_STEP_SECS: f64 = 0.1;

/// Fill portions per whole track.
const TRACK_RESOLUTION: f64 = 1000.0;

type TrackStyle = fn(&Theme) -> container::Style;

fn portion(fraction: f64) -> u16 {
    (fraction.clamp(0.0, 1.0) * TRACK_RESOLUTION).round() as u16
}

/// Track split into styled segments sized by fraction. Empty segments are
/// skipped.
fn track<'a>(segments: &[(f64, TrackStyle)], vertical: bool) -> Vec<Element<'a, Message>> {
    segments
        .iter()
        .filter_map(|&(fraction, style)| {
            let portion = portion(fraction);
            if portion == 0 {
                return None;
            }
            let block = container(Space::new()).style(style);
            let block = if vertical {
                block.width(Length::Fill).height(Length::FillPortion(portion))
            } else {
                block.width(Length::FillPortion(portion)).height(Length::Fill)
            };
            Some(block.into())
        })
        .collect()
}

/// Thin bar showing played and buffered shares of the video.
fn progress_bar<'a>(state: &PlayerState) -> Element<'a, Message> {
    let played = state.progress_fraction();
    let buffered = (state.buffered_percentage() / 100.0).clamp(played, 1.0);
    let segments: [(f64, TrackStyle); 3] = [
        (played, styles::track_fill),
        (buffered - played, styles::track_buffered),
        (1.0 - buffered, styles::track_empty),
    ];

    Row::with_children(track(&segments, false))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .into()
}

/// Vertical volume column; full volume at the top.
fn volume_track<'a>(level: f32) -> Element<'a, Message> {
    let level = f64::from(level);
    let segments: [(f64, TrackStyle); 2] = [
        (1.0 - level, styles::track_empty),
        (level, styles::track_fill),
    ];
    let bar = Column::with_children(track(&segments, true))
        .width(Length::Fixed(sizing::VOLUME_TRACK_WIDTH))
        .height(Length::Fixed(sizing::VOLUME_TRACK_HEIGHT));

    mouse_area(bar)
        .on_move(|point| {
            Message::VolumeHovered(TrackPoint::new(point.y, sizing::VOLUME_TRACK_HEIGHT))
        })
        .on_press(Message::VolumePressed)
        .on_release(Message::VolumeReleased)
        .on_exit(Message::VolumeReleased)
        .into()
}

/// Label of the skip buttons, e.g. `-10s`.
fn skip_label(sign: char, step: f64) -> String {
    format!("{sign}{step:.0}s")
}

fn control_button<'a>(
    label: impl Into<String>,
    hint: &'a str,
    message: Option<Message>,
    active: bool,
) -> Element<'a, Message> {
    let base = button(text(label.into()).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::control(active));
    let base = match message {
        Some(message) => base.on_press(message),
        None => base,
    };

    tooltip(base, Text::new(hint), tooltip::Position::Top)
        .gap(4)
        .into()
}

/// Renders the controls bar for `state`.
///
/// Buttons are inert (no `on_press`) while the loading or error overlay is
/// shown. `seek_step` is only used for the skip button labels.
pub fn view<'a>(state: &PlayerState, seek_step: f64) -> Element<'a, Message> {
    let interactive = !(state.is_loading || state.has_error);
    let when = |message: Message| interactive.then_some(message);

    let duration = state.duration.max(0.0);
    let extent = duration as f32;
    let position = state.current_time.clamp(0.0, duration);

    let progress = slider(0.0..=duration, position, move |secs: f64| {
        Message::ProgressPressed(TrackPoint::new(secs as f32, extent))
    })
    .on_release(Message::ProgressReleased)
    .step(PROGRESS_STEP_SECS)
    .width(Length::Fill);
    let progress: Element<'a, Message> = if interactive {
        progress.into()
    } else {
        container(text(format!("{:.0}% buffered", state.buffered_percentage())).size(typography::CAPTION))
            .width(Length::Fill)
            .into()
    };
    let progress = column![progress, progress_bar(state)].spacing(spacing::XXS);

    let (play_label, play_hint) = if state.is_playing {
        ("⏸", "Pause (k)")
    } else {
        ("▶", "Play (k)")
    };
    let play = control_button(play_label, play_hint, when(Message::TogglePlayback), false);

    let back = control_button(
        skip_label('-', seek_step),
        "Skip back (←)",
        when(Message::SkipBackward),
        false,
    );
    let forward = control_button(
        skip_label('+', seek_step),
        "Skip forward (→)",
        when(Message::SkipForward),
        false,
    );

    let silent = state.is_muted || state.volume.is_silent();
    let (mute_label, mute_hint) = if silent {
        ("🔇", "Unmute (m)")
    } else {
        ("🔊", "Mute (m)")
    };
    let mute = control_button(mute_label, mute_hint, when(Message::ToggleMute), silent);

    let shown_volume = if state.is_muted { 0.0 } else { state.volume.value() };
    let volume = tooltip(
        volume_track(shown_volume),
        Text::new("Volume (↑/↓)"),
        tooltip::Position::Top,
    )
    .gap(4);

    let time = text(format!(
        "{} / {}",
        format_time(state.current_time),
        format_time(state.duration)
    ))
    .size(typography::CAPTION)
    .color(palette::SLATE_300);

    let quality = text(state.quality.label())
        .size(typography::CAPTION)
        .color(palette::SLATE_400);

    let (fullscreen_label, fullscreen_hint) = if state.is_fullscreen {
        ("⤡", "Exit fullscreen (f)")
    } else {
        ("⤢", "Fullscreen (f)")
    };
    let fullscreen = control_button(
        fullscreen_label,
        fullscreen_hint,
        when(Message::ToggleFullscreen),
        state.is_fullscreen,
    );

    let buttons = row![
        play,
        back,
        forward,
        mute,
        volume,
        time,
        Space::new().width(Length::Fill),
        quality,
        fullscreen,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(column![progress, buttons].spacing(spacing::XS))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::controls_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{BufferedRanges, MediaEvent, TimeRange};
    use crate::domain::video::Volume;

    #[test]
    fn skip_labels_show_whole_seconds() {
        assert_eq!(skip_label('-', 10.0), "-10s");
        assert_eq!(skip_label('+', 5.0), "+5s");
    }

    #[test]
    fn view_renders_while_loading() {
        let state = PlayerState::new(Volume::default());
        let _element = view(&state, 10.0);
    }

    #[test]
    fn view_renders_during_playback() {
        let mut state = PlayerState::new(Volume::new(0.4));
        state.apply(MediaEvent::LoadedData { duration: 3700.0 });
        state.apply(MediaEvent::Play);
        state.current_time = 65.0;
        state.is_muted = true;
        let _element = view(&state, 10.0);
    }

    #[test]
    fn track_skips_empty_segments() {
        let full: [(f64, TrackStyle); 2] = [(0.0, styles::track_empty), (1.0, styles::track_fill)];
        assert_eq!(track(&full, true).len(), 1);

        let split: [(f64, TrackStyle); 3] = [
            (0.25, styles::track_fill),
            (0.25, styles::track_buffered),
            (0.5, styles::track_empty),
        ];
        assert_eq!(track(&split, false).len(), 3);
    }

    #[test]
    fn portions_follow_fraction() {
        assert_eq!(portion(0.0), 0);
        assert_eq!(portion(0.25), 250);
        assert_eq!(portion(2.0), 1000);
        assert_eq!(portion(-1.0), 0);
    }

    #[test]
    fn view_renders_while_buffering_ahead() {
        let mut state = PlayerState::new(Volume::new(0.0));
        state.apply(MediaEvent::LoadedData { duration: 100.0 });
        state.current_time = 30.0;
        state.buffered = BufferedRanges::new(vec![TimeRange::new(0.0, 60.0)]);
        let _element = view(&state, 10.0);
    }

    #[test]
    fn view_renders_with_unknown_duration() {
        let mut state = PlayerState::new(Volume::default());
        state.apply(MediaEvent::CanPlay);
        let _element = view(&state, 10.0);
    }
}
