//! Presentational building blocks shared by the tabs.
//!
//! Cards, icon buttons, artwork with placeholder fallback, track and
//! playlist cards, and avatar stacks. Components read state; every
//! interaction is reported as a [`Message`].

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::artwork::Placeholder;
use crate::format::{format_date, format_optional_duration};
use crate::model::{Playlist, Track, User};
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, layout, radius, spacing, typography};

use super::helpers::{SEMIBOLD, caption, px, truncate};

// ============================================================================
// Card
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Glass,
    Elevated,
}

pub fn card<'a>(
    content: impl Into<Element<'a, Message>>,
    variant: CardVariant,
) -> container::Container<'a, Message> {
    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(move |_| match variant {
            CardVariant::Default => theme::card_style(),
            CardVariant::Glass => theme::card_glass_style(),
            CardVariant::Elevated => theme::card_elevated_style(),
        })
}

// ============================================================================
// Icon button
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    Like,
    Skip,
    Add,
    Play,
    Pause,
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IconSize {
    /// (button diameter, glyph size)
    fn dimensions(self) -> (u16, u16) {
        match self {
            IconSize::Sm => (32, 14),
            IconSize::Md => (40, 16),
            IconSize::Lg => (48, 20),
        }
    }
}

/// Round icon button. `active` marks the liked state for [`IconVariant::Like`].
pub fn icon_button<'a>(
    glyph: char,
    variant: IconVariant,
    size: IconSize,
    active: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let (diameter, glyph_size) = size.dimensions();
    let face = container(icon_sized(glyph, glyph_size))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let btn = button(face)
        .width(px(diameter))
        .height(px(diameter))
        .padding(0)
        .on_press(on_press);

    match variant {
        IconVariant::Like => btn.style(theme::button_like(active)).into(),
        IconVariant::Add => btn.style(theme::button_add).into(),
        IconVariant::Play => btn.style(theme::button_play).into(),
        IconVariant::Pause => btn.style(theme::button_pause).into(),
        IconVariant::Skip | IconVariant::Default => btn.style(theme::button_icon).into(),
    }
}

/// Heart button bound to a like toggle
pub fn like_button<'a>(liked: bool, size: IconSize, on_press: Message) -> Element<'a, Message> {
    let glyph = if liked { icons::HEART } else { icons::HEART_OUTLINE };
    icon_button(glyph, IconVariant::Like, size, liked, on_press)
}

// ============================================================================
// Artwork
// ============================================================================

/// Loaded artwork, or a gradient placeholder while loading or after failure.
pub fn artwork<'a>(
    s: &'a LoadedState,
    reference: &str,
    placeholder: Placeholder,
    size: u16,
    rounded: bool,
) -> Element<'a, Message> {
    if let Some(handle) = s.artwork.get(reference) {
        return image(handle.clone())
            .width(px(size))
            .height(px(size))
            .content_fit(iced::ContentFit::Cover)
            .into();
    }

    let corner = if rounded { radius::PILL } else { radius::SM };
    let glyph = text(placeholder.glyph)
        .size(size / 2)
        .font(SEMIBOLD)
        .color(Color::WHITE);
    let face: Element<'a, Message> = match placeholder.caption {
        Some(caption) => column![
            glyph,
            text(caption)
                .size(typography::SIZE_TINY)
                .color(color::with_alpha(Color::WHITE, 0.8)),
        ]
        .align_x(Alignment::Center)
        .into(),
        None => glyph.into(),
    };

    container(face)
        .center(px(size))
        .style(move |_| theme::gradient_style(corner))
        .into()
}

pub fn user_avatar<'a>(s: &'a LoadedState, user: &User, size: u16) -> Element<'a, Message> {
    artwork(s, &user.avatar, Placeholder::for_user(user), size, true)
}

// ============================================================================
// Track card
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackCardVariant {
    #[default]
    Default,
    Compact,
}

fn is_current(s: &LoadedState, track: &Track) -> bool {
    s.transport.current().is_some_and(|t| t.id == track.id)
}

pub fn track_card<'a>(
    s: &'a LoadedState,
    track: &'a Track,
    variant: TrackCardVariant,
) -> Element<'a, Message> {
    match variant {
        TrackCardVariant::Compact => compact_track_card(s, track),
        TrackCardVariant::Default => default_track_card(s, track),
    }
}

/// One-line card: artwork, title, artist, like and add.
fn compact_track_card<'a>(s: &'a LoadedState, track: &'a Track) -> Element<'a, Message> {
    let liked = s.likes.is_track_liked(&track.id);
    let current = is_current(s, track);

    let title_color = if current { color::PRIMARY } else { color::TEXT_PRIMARY };
    let info = column![
        text(truncate(&track.title, 28))
            .size(typography::SIZE_BODY)
            .font(SEMIBOLD)
            .color(title_color),
        text(truncate(&track.artist, 32))
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_SECONDARY),
    ]
    .spacing(2)
    .width(Length::Fill);

    let cover = button(artwork(
        s,
        &track.artwork,
        Placeholder::for_track(track),
        layout::ARTWORK_CARD,
        false,
    ))
    .padding(0)
    .style(theme::button_ghost)
    .on_press(Message::PlayerPlayTrack(track.clone()));

    let content = row![
        cover,
        info,
        like_button(liked, IconSize::Sm, Message::ToggleLikeTrack(track.id.clone())),
        icon_button(
            icons::PLUS,
            IconVariant::Add,
            IconSize::Sm,
            false,
            Message::AddToPlaylist(track.id.clone()),
        ),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    card(content, CardVariant::Default)
        .padding(spacing::MD)
        .into()
}

/// Full card: artwork with play overlay, title, artist, album, actions and duration.
fn default_track_card<'a>(s: &'a LoadedState, track: &'a Track) -> Element<'a, Message> {
    let liked = s.likes.is_track_liked(&track.id);
    let current = is_current(s, track);
    let playing = current && s.transport.is_playing();

    let play_action = if playing {
        icon_button(icons::PAUSE, IconVariant::Pause, IconSize::Sm, false, Message::PlayerToggle)
    } else if current {
        icon_button(icons::PLAY, IconVariant::Play, IconSize::Sm, false, Message::PlayerToggle)
    } else {
        icon_button(
            icons::PLAY,
            IconVariant::Play,
            IconSize::Sm,
            false,
            Message::PlayerPlayTrack(track.clone()),
        )
    };

    let mut title = row![
        text(truncate(&track.title, 24))
            .size(typography::SIZE_BODY)
            .font(SEMIBOLD)
            .color(color::TEXT_PRIMARY)
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);
    if playing {
        // Now-playing dot
        title = title.push(text("●").size(typography::SIZE_TINY).color(color::ACCENT));
    }

    let header = row![
        artwork(s, &track.artwork, Placeholder::for_track(track), layout::ARTWORK_CARD, false),
        column![
            title,
            text(truncate(&track.artist, 28))
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
            caption(truncate(&track.album, 28)),
        ]
        .spacing(2)
        .width(Length::Fill),
        play_action,
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    let actions = row![
        like_button(liked, IconSize::Sm, Message::ToggleLikeTrack(track.id.clone())),
        icon_button(
            icons::SKIP_FORWARD,
            IconVariant::Skip,
            IconSize::Sm,
            false,
            Message::SkipTrack(track.id.clone()),
        ),
        icon_button(
            icons::PLUS,
            IconVariant::Add,
            IconSize::Sm,
            false,
            Message::AddToPlaylist(track.id.clone()),
        ),
        Space::with_width(Length::Fill),
        caption(format_optional_duration(track.known_duration())),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let variant = if current {
        CardVariant::Elevated
    } else {
        CardVariant::Default
    };
    card(column![header, actions].spacing(spacing::MD), variant).into()
}

// ============================================================================
// Playlist card
// ============================================================================

pub fn playlist_card<'a>(s: &'a LoadedState, playlist: &'a Playlist) -> Element<'a, Message> {
    let tracks = s.catalog.resolve_playlist_tracks(playlist);
    let liked = s.likes.is_playlist_liked(&playlist.id);
    let cover_ref = tracks.first().map(|t| t.artwork.clone()).unwrap_or_default();
    let creator = s
        .catalog
        .user(&playlist.creator_id)
        .map(|u| u.display_name.clone())
        .unwrap_or_else(|| playlist.creator_id.to_string());

    let header = row![
        artwork(
            s,
            &cover_ref,
            Placeholder::for_playlist(playlist, tracks.len()),
            layout::ARTWORK_PLAYLIST,
            false,
        ),
        column![
            text(truncate(&playlist.name, 26))
                .size(typography::SIZE_HEADING)
                .font(SEMIBOLD)
                .color(color::TEXT_PRIMARY),
            text(truncate(&playlist.description, 40))
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
            caption(format!("by {}", creator)),
        ]
        .spacing(2)
        .width(Length::Fill),
        like_button(liked, IconSize::Sm, Message::ToggleLikePlaylist(playlist.id.clone())),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    let preview = tracks.iter().take(3).fold(column![].spacing(2), |col, t| {
        col.push(caption(truncate(&format!("{} - {}", t.artist, t.title), 44)))
    });

    let play_all = button(text("Play All").size(typography::SIZE_SMALL).font(SEMIBOLD))
        .padding([6, 14])
        .style(theme::button_primary)
        .on_press_maybe(
            (!tracks.is_empty()).then(|| Message::PlayerPlayAll(playlist.id.clone())),
        );

    let footer = row![
        caption(format!(
            "{} tracks · {}",
            tracks.len(),
            format_date(playlist.created_at)
        )),
        Space::with_width(Length::Fill),
        play_all,
    ]
    .align_y(Alignment::Center);

    card(column![header, preview, footer].spacing(spacing::MD), CardVariant::Default).into()
}

// ============================================================================
// Avatar stack
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    fn pixels(self) -> u16 {
        match self {
            AvatarSize::Sm => 24,
            AvatarSize::Md => layout::AVATAR_STACK,
            AvatarSize::Lg => 48,
        }
    }
}

pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Split a stack into (visible count, hidden count for the "+N" badge).
pub fn stack_split(total: usize, max_visible: usize) -> (usize, Option<usize>) {
    let visible = total.min(max_visible);
    let hidden = total - visible;
    (visible, (hidden > 0).then_some(hidden))
}

pub fn avatar_stack<'a>(
    s: &'a LoadedState,
    users: &'a [User],
    max_visible: usize,
    size: AvatarSize,
) -> Element<'a, Message> {
    let px_size = size.pixels();
    let (visible, hidden) = stack_split(users.len(), max_visible);

    let mut stack = users[..visible]
        .iter()
        .fold(row![].spacing(2), |r, u| r.push(user_avatar(s, u, px_size)));

    if let Some(hidden) = hidden {
        let badge = container(
            text(format!("+{}", hidden))
                .size(typography::SIZE_TINY)
                .color(color::TEXT_PRIMARY),
        )
        .center(px(px_size))
        .style(|_| iced::widget::container::Style {
            background: Some(iced::Background::Color(color::SURFACE_HOVER)),
            border: iced::Border {
                color: color::BORDER,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            ..Default::default()
        });
        stack = stack.push(badge);
    }

    stack.align_y(Alignment::Center).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_split() {
        assert_eq!(stack_split(0, 3), (0, None));
        assert_eq!(stack_split(3, 3), (3, None));
        assert_eq!(stack_split(5, 3), (3, Some(2)));
        assert_eq!(stack_split(2, 0), (0, Some(2)));
    }

    #[test]
    fn test_icon_sizes_grow() {
        let (sm, _) = IconSize::Sm.dimensions();
        let (md, _) = IconSize::Md.dimensions();
        let (lg, _) = IconSize::Lg.dimensions();
        assert!(sm < md && md < lg);
    }
}
