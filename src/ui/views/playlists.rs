//! Playlists tab.

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};

use crate::ui::icons;
use crate::ui::messages::Message;
use crate::ui::state::LoadedState;
use crate::ui::theme::{self, color, spacing, typography};

use super::components::playlist_card;
use super::helpers::{SEMIBOLD, heading};

pub fn playlists_tab(s: &LoadedState) -> Element<'_, Message> {
    let create = button(
        row![
            text(icons::PLUS.to_string()).size(typography::SIZE_SMALL),
            text("Create").size(typography::SIZE_SMALL).font(SEMIBOLD),
        ]
        .spacing(spacing::XS)
        .align_y(Alignment::Center),
    )
    .padding([6, 14])
    .style(theme::button_primary)
    .on_press(Message::CreatePlaylist);

    let header = row![heading("Playlists", None), iced::widget::horizontal_space(), create]
        .align_y(Alignment::Center);

    let list: Element<'_, Message> = if s.trending.is_empty() {
        text("No playlists yet")
            .size(typography::SIZE_BODY)
            .color(color::TEXT_MUTED)
            .into()
    } else {
        s.trending
            .iter()
            .fold(column![].spacing(spacing::LG), |col, p| {
                col.push(playlist_card(s, p))
            })
            .into()
    };

    column![header, list].spacing(spacing::XL).into()
}
