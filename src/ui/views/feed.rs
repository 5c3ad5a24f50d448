//! Feed tab: the community activity stream.

use chrono::{DateTime, Utc};
use iced::widget::{Space, button, column, container, horizontal_rule, row, text};
use iced::{Alignment, Element, Length};

use crate::artwork::Placeholder;
use crate::format::format_time_ago;
use crate::model::{FeedContent, FeedItem, Track};
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, layout, spacing, typography};

use super::components::{
    AvatarSize, CardVariant, DEFAULT_MAX_VISIBLE, IconSize, IconVariant, TrackCardVariant,
    artwork, avatar_stack, card, icon_button, playlist_card, track_card, user_avatar,
};
use super::helpers::{SEMIBOLD, caption, heading};

/// What the feed area shows.
#[derive(Debug, PartialEq)]
pub enum FeedSection<'a> {
    Empty,
    Items(&'a [FeedItem]),
}

impl<'a> FeedSection<'a> {
    pub fn of(items: &'a [FeedItem]) -> Self {
        if items.is_empty() {
            FeedSection::Empty
        } else {
            FeedSection::Items(items)
        }
    }
}

pub fn feed_tab(s: &LoadedState) -> Element<'_, Message> {
    let header = container(
        column![
            heading("Music Feed", Some("See what your friends are listening to")),
            avatar_stack(s, s.catalog.users(), DEFAULT_MAX_VISIBLE, AvatarSize::Sm),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill);

    let now = Utc::now();
    let body = match FeedSection::of(s.feed()) {
        FeedSection::Empty => empty_state(),
        FeedSection::Items(items) => items
            .iter()
            .fold(column![].spacing(spacing::XL), |col, item| {
                col.push(feed_item(s, item, now))
            })
            .into(),
    };

    column![header, body].spacing(spacing::XL).into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let badge = container(icon_sized(icons::HEART_OUTLINE, 28).color(color::TEXT_SECONDARY))
        .center(Length::Fixed(64.0))
        .style(|_| iced::widget::container::Style {
            background: Some(iced::Background::Color(color::SURFACE)),
            border: iced::Border {
                radius: theme::radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    container(
        column![
            badge,
            text("No activity yet")
                .size(typography::SIZE_HEADING)
                .font(SEMIBOLD)
                .color(color::TEXT_PRIMARY),
            text("Follow some users to see their music activity here")
                .size(typography::SIZE_BODY)
                .color(color::TEXT_SECONDARY),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([48, 0])
    .into()
}

fn feed_item<'a>(s: &'a LoadedState, item: &'a FeedItem, now: DateTime<Utc>) -> Element<'a, Message> {
    let author = row![
        user_avatar(s, &item.author, layout::AVATAR),
        column![
            row![
                text(&item.author.display_name)
                    .size(typography::SIZE_BODY)
                    .font(SEMIBOLD)
                    .color(color::TEXT_PRIMARY),
                caption(format_time_ago(item.timestamp, now)),
            ]
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
            text(item.content.action_phrase())
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
        ]
        .spacing(2),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    let payload = match &item.content {
        FeedContent::TrackShare(track) => track_card(s, track, TrackCardVariant::Compact),
        FeedContent::PlaylistShare(playlist) => playlist_card(s, playlist),
        FeedContent::NowPlaying(track) => now_playing_row(s, track),
    };

    let counter = |glyph: char, count: u32, msg: Message| {
        button(
            row![icon_sized(glyph, typography::SIZE_BODY), text(count.to_string()).size(typography::SIZE_SMALL)]
                .spacing(spacing::XS)
                .align_y(Alignment::Center),
        )
        .padding([4, 8])
        .style(theme::button_ghost)
        .on_press(msg)
    };

    let actions = row![
        counter(icons::HEART_OUTLINE, item.likes, Message::FeedLike(item.id.clone())),
        counter(icons::COMMENT, item.comments, Message::FeedComment(item.id.clone())),
        Space::with_width(Length::Fill),
        icon_button(
            icons::SHARE,
            IconVariant::Default,
            IconSize::Sm,
            false,
            Message::FeedShare(item.id.clone()),
        ),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    card(
        column![author, payload, horizontal_rule(1), actions].spacing(spacing::LG),
        CardVariant::Default,
    )
    .into()
}

fn now_playing_row<'a>(s: &'a LoadedState, track: &'a Track) -> Element<'a, Message> {
    let content = row![
        artwork(s, &track.artwork, Placeholder::for_track(track), layout::ARTWORK_CARD, false),
        column![
            text(&track.title)
                .size(typography::SIZE_BODY)
                .font(SEMIBOLD)
                .color(color::TEXT_PRIMARY),
            text(&track.artist)
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
        ]
        .spacing(2)
        .width(Length::Fill),
        icon_button(
            icons::PLAY,
            IconVariant::Play,
            IconSize::Sm,
            false,
            Message::PlayerPlayTrack(track.clone()),
        ),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    card(content, CardVariant::Glass).padding(spacing::MD).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_feed_is_empty_state() {
        assert_eq!(FeedSection::of(&[]), FeedSection::Empty);
    }

    #[test]
    fn test_builtin_feed_has_items() {
        let catalog = Catalog::builtin(Utc::now());
        match FeedSection::of(catalog.feed()) {
            FeedSection::Items(items) => assert_eq!(items.len(), catalog.feed().len()),
            FeedSection::Empty => panic!("built-in catalog should have feed items"),
        }
    }
}
