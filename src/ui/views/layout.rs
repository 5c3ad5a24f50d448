//! Layout composition: the mini-app frame.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ header (optional)        │
//! │ ┌──────────────────────┐ │
//! │ │ active tab           │ │
//! │ │ (scrollable)         │ │
//! │ └──────────────────────┘ │
//! │ bottom navigation        │
//! │ transport bar (if any)   │
//! └──────────────────────────┘
//! ```

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::meta::APP;
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::state::{LoadedState, Tab};
use crate::ui::theme::{self, color, layout, spacing, typography};

use super::components::{CardVariant, card};
use super::discover::discover_tab;
use super::feed::feed_tab;
use super::helpers::BOLD;
use super::player::player_bar;
use super::playlists::playlists_tab;
use super::profile::profile_tab;

/// Main loaded state view
pub fn loaded_view(s: &LoadedState, show_header: bool) -> Element<'_, Message> {
    let content = match s.active_tab {
        Tab::Discover => discover_tab(s),
        Tab::Feed => feed_tab(s),
        Tab::Playlists => playlists_tab(s),
        Tab::Profile => profile_tab(s),
    };

    let body = scrollable(container(content).padding([spacing::LG, spacing::LG]))
        .height(Length::Fill)
        .style(theme::scrollbar_style);

    let mut page = Column::new();
    if show_header {
        page = page.push(header());
    }
    page = page.push(body).push(bottom_nav(s.active_tab));
    if let Some(bar) = player_bar(s) {
        page = page.push(bar);
    }

    frame(page.spacing(spacing::SM).into())
}

/// Centered, phone-width column on the base background.
pub fn frame(content: Element<'_, Message>) -> Element<'_, Message> {
    container(
        container(content)
            .max_width(layout::FRAME_WIDTH)
            .height(Length::Fill),
    )
    .center_x(Length::Fill)
    .height(Length::Fill)
    .style(|_| theme::container_style(color::BASE))
    .into()
}

fn header<'a>() -> Element<'a, Message> {
    container(
        column![
            text(APP.name)
                .size(typography::SIZE_TITLE)
                .font(BOLD)
                .color(color::TEXT_PRIMARY),
            text(APP.tagline)
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_SECONDARY),
        ]
        .spacing(2)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .into()
}

fn tab_glyph(tab: Tab) -> char {
    match tab {
        Tab::Discover => icons::MUSIC,
        Tab::Feed => icons::USERS,
        Tab::Playlists => icons::LIST,
        Tab::Profile => icons::USER,
    }
}

fn bottom_nav<'a>(active: Tab) -> Element<'a, Message> {
    let tabs = Tab::ALL.iter().fold(row![].spacing(spacing::XS), |r, &tab| {
        let style = if tab == active {
            theme::button_tab_active
        } else {
            theme::button_tab
        };
        r.push(
            button(
                column![
                    icon_sized(tab_glyph(tab), 18),
                    text(tab.label()).size(typography::SIZE_TINY),
                ]
                .spacing(2)
                .align_x(Alignment::Center),
            )
            .padding([6, 0])
            .width(Length::FillPortion(1))
            .style(style)
            .on_press(Message::SelectTab(tab)),
        )
    });

    container(card(tabs, CardVariant::Glass).padding(spacing::SM))
        .padding([0, spacing::LG])
        .into()
}
