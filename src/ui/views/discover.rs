//! Discover tab: hero, recommendations and community activity.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::meta::APP;
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, spacing, typography};

use super::components::{
    AvatarSize, CardVariant, DEFAULT_MAX_VISIBLE, TrackCardVariant, avatar_stack, card,
    track_card,
};
use super::helpers::{BOLD, section_header};

/// Recommended tracks shown in the grid
const GRID_COUNT: usize = 4;
/// Grid columns
const GRID_COLUMNS: usize = 2;
/// Recommended tracks after the grid, shown as community activity
const ACTIVITY_COUNT: usize = 2;

pub fn discover_tab(s: &LoadedState) -> Element<'_, Message> {
    column![hero(), recommended(s), community(s)]
        .spacing(spacing::XL)
        .into()
}

fn hero<'a>() -> Element<'a, Message> {
    let badge = container(icon_sized(icons::MUSIC, 36))
        .center(Length::Fixed(80.0))
        .style(|_| theme::gradient_style(theme::radius::PILL));

    let stats = row![
        icon_sized(icons::USERS, typography::SIZE_SMALL),
        text("1.2k listeners").size(typography::SIZE_SMALL),
        icon_sized(icons::TRENDING, typography::SIZE_SMALL),
        text("Trending").size(typography::SIZE_SMALL),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    let content = column![
        badge,
        text(APP.name)
            .size(typography::SIZE_HERO)
            .font(BOLD)
            .color(color::mix(color::PRIMARY, color::ACCENT, 0.5)),
        text(APP.tagline)
            .size(typography::SIZE_BODY)
            .color(color::TEXT_SECONDARY),
        container(stats).style(|_| iced::widget::container::Style {
            text_color: Some(color::TEXT_SECONDARY),
            ..Default::default()
        }),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    card(
        container(content).center_x(Length::Fill).padding([spacing::LG, 0]),
        CardVariant::Glass,
    )
    .into()
}

fn recommended(s: &LoadedState) -> Element<'_, Message> {
    let see_all = button(text("See All").size(typography::SIZE_SMALL))
        .padding([4, 10])
        .style(theme::button_ghost)
        .on_press(Message::SeeAllRecommended);

    let grid_tracks = &s.recommended[..s.recommended.len().min(GRID_COUNT)];
    let grid = grid_tracks
        .chunks(GRID_COLUMNS)
        .fold(column![].spacing(spacing::LG), |col, pair| {
            let cells = pair.iter().fold(row![].spacing(spacing::LG), |r, t| {
                r.push(
                    container(track_card(s, t, TrackCardVariant::Default)).width(Length::FillPortion(1)),
                )
            });
            col.push(cells)
        });

    let body: Element<'_, Message> = if s.recommended.is_empty() {
        text("No tracks in the catalog yet")
            .size(typography::SIZE_BODY)
            .color(color::TEXT_MUTED)
            .into()
    } else {
        grid.into()
    };

    column![
        section_header("Recommended for You", Some(see_all.into())),
        body
    ]
    .spacing(spacing::LG)
    .into()
}

fn community(s: &LoadedState) -> Element<'_, Message> {
    let stack = avatar_stack(s, s.catalog.users(), DEFAULT_MAX_VISIBLE, AvatarSize::Md);

    let activity = s
        .recommended
        .iter()
        .skip(GRID_COUNT)
        .take(ACTIVITY_COUNT)
        .fold(column![].spacing(spacing::MD), |col, t| {
            col.push(track_card(s, t, TrackCardVariant::Compact))
        });

    column![section_header("Community Activity", Some(stack)), activity]
        .spacing(spacing::LG)
        .into()
}
