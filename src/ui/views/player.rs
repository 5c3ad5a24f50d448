//! Transport bar shown under every tab while a track is current.

use iced::widget::{Space, button, column, container, row, slider, text};
use iced::{Alignment, Element, Length};

use crate::artwork::Placeholder;
use crate::format::{format_duration, format_optional_duration};
use crate::player::RepeatMode;
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, layout, spacing, typography};

use super::components::{IconSize, IconVariant, artwork, icon_button, like_button};
use super::helpers::{SEMIBOLD, caption, truncate};

/// Elapsed label, following the slider while the user drags it.
fn elapsed_label(s: &LoadedState) -> String {
    match (s.seek_preview, s.transport.duration()) {
        (Some(pos), Some(duration)) => {
            let secs = (pos.clamp(0.0, 1.0) * duration as f32).floor() as u32;
            format_duration(secs)
        }
        _ => format_duration(s.transport.elapsed()),
    }
}

/// Transport bar, or nothing when no track is current.
pub fn player_bar(s: &LoadedState) -> Option<Element<'_, Message>> {
    let track = s.transport.current()?;
    let liked = s.likes.is_track_liked(&track.id);

    // Seek slider - on_change updates the preview, on_release performs the seek
    let position = s.seek_preview.unwrap_or_else(|| s.transport.progress());
    let seek: Element<'_, Message> = if s.transport.duration().is_some() {
        slider(0.0..=1.0, position, Message::PlayerSeekPreview)
            .on_release(Message::PlayerSeekRelease)
            .step(0.001)
            .style(theme::slider_style)
            .into()
    } else {
        Space::with_height(4).into()
    };

    let progress = column![
        seek,
        row![
            caption(elapsed_label(s)),
            Space::with_width(Length::Fill),
            caption(format_optional_duration(s.transport.duration())),
        ],
    ]
    .spacing(2);

    let info = row![
        artwork(s, &track.artwork, Placeholder::for_track(track), layout::ARTWORK_PLAYER, false),
        column![
            text(truncate(&track.title, 30))
                .size(typography::SIZE_HEADING)
                .font(SEMIBOLD)
                .color(color::TEXT_PRIMARY),
            text(truncate(&track.artist, 34))
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
        ]
        .spacing(2)
        .width(Length::Fill),
        like_button(liked, IconSize::Md, Message::ToggleLikeCurrent),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    let play_pause = if s.transport.is_playing() {
        icon_button(icons::PAUSE, IconVariant::Pause, IconSize::Lg, false, Message::PlayerToggle)
    } else {
        icon_button(icons::PLAY, IconVariant::Play, IconSize::Lg, false, Message::PlayerToggle)
    };

    let repeat = s.transport.repeat();
    let repeat_glyph = if repeat == RepeatMode::One {
        icons::REPEAT_ONE
    } else {
        icons::REPEAT
    };

    let controls = row![
        toggle_button(icons::SHUFFLE, s.transport.shuffle(), Message::PlayerToggleShuffle),
        Space::with_width(Length::Fill),
        icon_button(icons::SKIP_BACK, IconVariant::Skip, IconSize::Md, false, Message::PlayerPrevious),
        play_pause,
        icon_button(icons::SKIP_FORWARD, IconVariant::Skip, IconSize::Md, false, Message::PlayerNext),
        Space::with_width(Length::Fill),
        toggle_button(repeat_glyph, repeat != RepeatMode::Off, Message::PlayerCycleRepeat),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    Some(
        container(column![progress, info, controls].spacing(spacing::MD))
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(|_| theme::player_bar_style())
            .into(),
    )
}

fn toggle_button<'a>(glyph: char, active: bool, on_press: Message) -> Element<'a, Message> {
    button(
        container(icon_sized(glyph, typography::SIZE_BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(32.0))
    .height(Length::Fixed(32.0))
    .padding(0)
    .style(theme::button_toggle(active))
    .on_press(on_press)
    .into()
}
