//! Profile tab: account placeholder and listening stats.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::meta::APP;
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, spacing, typography};

use super::components::{AvatarSize, CardVariant, avatar_stack, card};
use super::helpers::{BOLD, SEMIBOLD, caption, heading};

/// Avatars shown before the "+N" badge
const COMMUNITY_VISIBLE: usize = 5;

pub fn profile_tab(s: &LoadedState) -> Element<'_, Message> {
    let stats = column![
        text("Your Stats")
            .size(typography::SIZE_HEADING)
            .font(SEMIBOLD)
            .color(color::TEXT_PRIMARY),
        row![
            stat_card(s.likes.track_count(), "Liked Tracks", color::PRIMARY),
            stat_card(s.likes.playlist_count(), "Saved Playlists", color::ACCENT),
        ]
        .spacing(spacing::LG),
    ]
    .spacing(spacing::LG);

    let community = column![
        text("Community")
            .size(typography::SIZE_HEADING)
            .font(SEMIBOLD)
            .color(color::TEXT_PRIMARY),
        row![
            avatar_stack(s, s.catalog.users(), COMMUNITY_VISIBLE, AvatarSize::Lg),
            caption(format!("{} members", s.catalog.users().len())),
        ]
        .spacing(spacing::MD)
        .align_y(Alignment::Center),
    ]
    .spacing(spacing::LG);

    column![connect_card(), stats, community, about()]
        .spacing(spacing::XL)
        .into()
}

fn connect_card<'a>() -> Element<'a, Message> {
    let badge = container(icon_sized(icons::USER, 36).color(Color::WHITE))
        .center(Length::Fixed(80.0))
        .style(|_| theme::gradient_style(theme::radius::PILL));

    let connect = button(text("Connect Wallet").size(typography::SIZE_BODY).font(SEMIBOLD))
        .padding([10, 20])
        .style(theme::button_primary)
        .on_press(Message::ConnectWallet);

    let content = column![
        badge,
        heading(
            "Connect Your Account",
            Some("Sign in to save your music preferences and connect with friends"),
        ),
        connect,
    ]
    .spacing(spacing::LG)
    .align_x(Alignment::Center);

    card(
        container(content).center_x(Length::Fill).padding([spacing::LG, 0]),
        CardVariant::Default,
    )
    .into()
}

fn stat_card<'a>(value: usize, label: &'a str, accent: Color) -> Element<'a, Message> {
    let content = column![
        text(value.to_string()).size(24).font(BOLD).color(accent),
        text(label).size(typography::SIZE_SMALL).color(color::TEXT_SECONDARY),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    container(card(container(content).center_x(Length::Fill), CardVariant::Default))
        .width(Length::FillPortion(1))
        .into()
}

fn about<'a>() -> Element<'a, Message> {
    column![
        caption(format!("{} {}", APP.name, APP.version)),
        caption(format!(
            "Playlists up to {} tracks, {} per user · {}",
            APP.max_playlist_tracks,
            APP.max_playlists_per_user,
            APP.supported_audio_formats.join(", ")
        )),
    ]
    .spacing(2)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
