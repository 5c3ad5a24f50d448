//! Helper functions shared across view components.

use iced::font::Weight;
use iced::widget::{Row, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::ui::messages::Message;
use crate::ui::theme::{color, typography};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Convert a theme dimension to a fixed length
pub fn px(size: u16) -> Length {
    Length::Fixed(f32::from(size))
}

/// Tab heading with an optional subtitle
pub fn heading<'a>(title: &'a str, subtitle: Option<&'a str>) -> Element<'a, Message> {
    let title = text(title)
        .size(typography::SIZE_TITLE)
        .font(BOLD)
        .color(color::TEXT_PRIMARY);
    match subtitle {
        Some(sub) => iced::widget::column![
            title,
            text(sub).size(typography::SIZE_BODY).color(color::TEXT_SECONDARY),
        ]
        .spacing(4)
        .into(),
        None => title.into(),
    }
}

/// Section title with a trailing element on the right
pub fn section_header<'a>(
    title: &'a str,
    trailing: Option<Element<'a, Message>>,
) -> Row<'a, Message> {
    let title = text(title)
        .size(typography::SIZE_HEADING)
        .font(SEMIBOLD)
        .color(color::TEXT_PRIMARY);
    let mut header = row![title, iced::widget::horizontal_space()].align_y(Alignment::Center);
    if let Some(trailing) = trailing {
        header = header.push(trailing);
    }
    header
}

/// Small muted caption (timestamps, counts)
pub fn caption<'a>(content: impl text::IntoFragment<'a>) -> iced::widget::Text<'a> {
    text(content).size(typography::SIZE_SMALL).color(color::TEXT_MUTED)
}

/// Clamp a long label to `max` characters with an ellipsis.
pub fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let kept: String = label.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Midnight", 20), "Midnight");
        assert_eq!(truncate("Midnight Dreams", 9), "Midnight…");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
