//! Loading and error boundaries shown while the catalog is unavailable.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::meta::APP;
use crate::ui::icons::{self, icon_sized, spinner_frame};
use crate::ui::messages::Message;
use crate::ui::theme::{self, color, spacing, typography};

use super::helpers::{BOLD, SEMIBOLD};

/// Loading ticks between message changes (~3 s at 4 Hz)
const TICKS_PER_MESSAGE: u32 = 12;

const MESSAGES: &[&str] = &[
    "Loading your music...",
    "Tuning the instruments...",
    "Gathering the community...",
    "Shuffling the crates...",
];

/// Message for a loading tick, rotating every few seconds.
pub fn message_for_tick(tick: u32) -> &'static str {
    MESSAGES[(tick / TICKS_PER_MESSAGE) as usize % MESSAGES.len()]
}

/// Heights of the three pulse bars for a tick.
fn pulse_heights(tick: u32) -> [f32; 3] {
    const STEPS: [f32; 4] = [8.0, 16.0, 24.0, 16.0];
    [0, 1, 2].map(|offset| STEPS[(tick as usize + offset) % STEPS.len()])
}

/// Full-window loading state
pub fn loading_view<'a>(tick: u32) -> Element<'a, Message> {
    let badge = container(icon_sized(icons::MUSIC, 32).color(Color::WHITE))
        .center(Length::Fixed(64.0))
        .style(|_| theme::gradient_style(theme::radius::PILL));

    let bars = pulse_heights(tick)
        .into_iter()
        .fold(row![].spacing(spacing::XS), |r, h| {
            r.push(
                container(Space::new(Length::Fixed(4.0), Length::Fixed(h)))
                    .style(|_| theme::container_style(color::PRIMARY)),
            )
        })
        .height(Length::Fixed(24.0))
        .align_y(Alignment::End);

    let status = row![
        text(spinner_frame(tick).to_string())
            .size(typography::SIZE_BODY)
            .color(color::PRIMARY),
        text(message_for_tick(tick))
            .size(typography::SIZE_BODY)
            .color(color::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    centered(
        column![
            badge,
            text(APP.name)
                .size(typography::SIZE_TITLE)
                .font(BOLD)
                .color(color::TEXT_PRIMARY),
            bars,
            status,
        ]
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .into(),
    )
}

/// Error boundary with a retry button
pub fn error_view(error: &str) -> Element<'_, Message> {
    let retry = button(text("Try again").size(typography::SIZE_BODY).font(SEMIBOLD))
        .padding([10, 20])
        .style(theme::button_primary)
        .on_press(Message::RetryLoad);

    centered(
        column![
            text("Something went wrong!")
                .size(typography::SIZE_TITLE)
                .font(BOLD)
                .color(color::TEXT_PRIMARY),
            text(format!(
                "We encountered an error while loading {}. Please try again.",
                APP.name
            ))
            .size(typography::SIZE_BODY)
            .color(color::TEXT_SECONDARY),
            text(error).size(typography::SIZE_SMALL).color(color::ERROR),
            retry,
        ]
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .max_width(360.0)
        .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(spacing::XL)
        .center(Length::Fill)
        .style(|_| theme::container_style(color::BASE))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_rotate() {
        assert_eq!(message_for_tick(0), MESSAGES[0]);
        assert_eq!(message_for_tick(TICKS_PER_MESSAGE - 1), MESSAGES[0]);
        assert_eq!(message_for_tick(TICKS_PER_MESSAGE), MESSAGES[1]);
        // Wraps without panicking
        let _ = message_for_tick(u32::MAX);
    }

    #[test]
    fn test_pulse_bars_are_staggered() {
        let h = pulse_heights(0);
        assert_eq!(h, [8.0, 16.0, 24.0]);
        assert_eq!(pulse_heights(4), h);
    }
}
