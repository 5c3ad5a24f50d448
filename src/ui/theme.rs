//! Design System Theme Constants
//!
//! Centralized theme definitions for consistent UI across the application.
//! All colors, spacing, and sizing should be defined here.
//!
//! # Color Philosophy
//! - Dark blue-gray theme (not pure black)
//! - Blue primary for actions, magenta accent for highlights
//! - The primary-to-accent gradient marks brand surfaces: the play button,
//!   the hero card and artwork placeholders
//! - Red is reserved for "liked" state
//!
//! # Usage
//! ```rust
//! use crate::ui::theme;
//!
//! let bg = theme::color::SURFACE;
//! let padding = theme::spacing::MD;
//! ```

use iced::Color;

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    // -------------------------------------------------------------------------
    // Backgrounds (darkest to lightest)
    // -------------------------------------------------------------------------

    /// Main app background
    /// Hex: #1f242e
    pub const BASE: Color = Color::from_rgb(
        0x1f as f32 / 255.0,
        0x24 as f32 / 255.0,
        0x2e as f32 / 255.0,
    );

    /// Cards, panels, the transport bar
    /// Hex: #29303d
    pub const SURFACE: Color = Color::from_rgb(
        0x29 as f32 / 255.0,
        0x30 as f32 / 255.0,
        0x3d as f32 / 255.0,
    );

    /// Hover states, active items, subtle highlights
    /// Hex: #333b4c
    pub const SURFACE_HOVER: Color = Color::from_rgb(
        0x33 as f32 / 255.0,
        0x3b as f32 / 255.0,
        0x4c as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Borders & Dividers
    // -------------------------------------------------------------------------

    /// Card borders
    /// Hex: #414958
    pub const BORDER: Color = Color::from_rgb(
        0x41 as f32 / 255.0,
        0x49 as f32 / 255.0,
        0x58 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Primary text - headings, titles
    /// Hex: #f0f2f4
    pub const TEXT_PRIMARY: Color = Color::from_rgb(
        0xf0 as f32 / 255.0,
        0xf2 as f32 / 255.0,
        0xf4 as f32 / 255.0,
    );

    /// Secondary text - artists, descriptions
    /// Hex: #b6bcc9
    pub const TEXT_SECONDARY: Color = Color::from_rgb(
        0xb6 as f32 / 255.0,
        0xbc as f32 / 255.0,
        0xc9 as f32 / 255.0,
    );

    /// Muted text - timestamps, counts
    /// Hex: #818898
    pub const TEXT_MUTED: Color = Color::from_rgb(
        0x81 as f32 / 255.0,
        0x88 as f32 / 255.0,
        0x98 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Brand
    // -------------------------------------------------------------------------

    /// Primary action color
    /// Hex: #3c71dd
    pub const PRIMARY: Color = Color::from_rgb(
        0x3c as f32 / 255.0,
        0x71 as f32 / 255.0,
        0xdd as f32 / 255.0,
    );

    /// Accent, gradient end
    /// Hex: #e64ce6
    pub const ACCENT: Color = Color::from_rgb(
        0xe6 as f32 / 255.0,
        0x4c as f32 / 255.0,
        0xe6 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Liked tracks and playlists
    /// Hex: #ef4444
    pub const LIKE: Color = Color::from_rgb(
        0xef as f32 / 255.0,
        0x44 as f32 / 255.0,
        0x44 as f32 / 255.0,
    );

    /// Add-to-playlist hover
    /// Hex: #4ade80
    pub const ADD: Color = Color::from_rgb(
        0x4a as f32 / 255.0,
        0xde as f32 / 255.0,
        0x80 as f32 / 255.0,
    );

    /// Error boundary text
    /// Hex: #f87171
    pub const ERROR: Color = Color::from_rgb(
        0xf8 as f32 / 255.0,
        0x71 as f32 / 255.0,
        0x71 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Create a color with alpha transparency
    pub const fn with_alpha(color: Color, alpha: f32) -> Color {
        Color {
            r: color.r,
            g: color.g,
            b: color.b,
            a: alpha,
        }
    }

    /// Slightly lighten a color for hover states
    pub fn lighten(color: Color, amount: f32) -> Color {
        Color {
            r: (color.r + amount).min(1.0),
            g: (color.g + amount).min(1.0),
            b: (color.b + amount).min(1.0),
            a: color.a,
        }
    }

    /// Linear blend between two colors, `t` in [0, 1]
    pub fn mix(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

// =============================================================================
// SPACING
// =============================================================================

pub mod spacing {
    /// Tightest spacing - icon gaps, inline elements
    pub const XS: u16 = 4;

    /// Small spacing - component padding, small gaps
    pub const SM: u16 = 8;

    /// Medium spacing - between related items
    pub const MD: u16 = 12;

    /// Default section spacing - card padding, group separation
    pub const LG: u16 = 16;

    /// Major section spacing - tab padding, large sections
    pub const XL: u16 = 24;
}

// =============================================================================
// LAYOUT DIMENSIONS
// =============================================================================

pub mod layout {
    /// Mini-app frame width (mobile-sized)
    pub const FRAME_WIDTH: f32 = 448.0;

    /// Window height
    pub const FRAME_HEIGHT: f32 = 820.0;

    /// Track artwork in cards
    pub const ARTWORK_CARD: u16 = 48;

    /// Track artwork in the transport bar
    pub const ARTWORK_PLAYER: u16 = 64;

    /// Playlist cover
    pub const ARTWORK_PLAYLIST: u16 = 64;

    /// Feed author avatar
    pub const AVATAR: u16 = 40;

    /// Avatar in stacks
    pub const AVATAR_STACK: u16 = 32;
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub mod typography {
    /// Hero text - app name
    pub const SIZE_HERO: u16 = 28;

    /// Title - tab headings
    pub const SIZE_TITLE: u16 = 20;

    /// Heading - card titles
    pub const SIZE_HEADING: u16 = 16;

    /// Body - Default text
    pub const SIZE_BODY: u16 = 14;

    /// Small - Secondary info, metadata
    pub const SIZE_SMALL: u16 = 12;

    /// Tiny - Timestamps, counts
    pub const SIZE_TINY: u16 = 10;
}

// =============================================================================
// BORDER RADIUS
// =============================================================================

pub mod radius {
    /// Small radius - artwork
    pub const SM: f32 = 8.0;

    /// Medium radius - cards
    pub const MD: f32 = 12.0;

    /// Large radius - hero card
    pub const LG: f32 = 16.0;

    /// Pill shape - icon buttons, avatars
    pub const PILL: f32 = 9999.0;
}

// =============================================================================
// CONTAINER STYLE HELPERS
// =============================================================================

use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Degrees, Gradient, Shadow, Vector};

/// Primary-to-accent brand gradient
pub fn brand_gradient() -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(135.0))
            .add_stop(0.0, color::PRIMARY)
            .add_stop(1.0, color::ACCENT),
    ))
}

/// Create a standard container style with the given background color
pub fn container_style(bg: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border::default(),
        ..Default::default()
    }
}

/// Card style - surface background with subtle border and radius
pub fn card_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(color::SURFACE)),
        border: Border {
            color: color::with_alpha(color::BORDER, 0.5),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Glass card - translucent surface over the base
pub fn card_glass_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(color::with_alpha(color::SURFACE, 0.6))),
        border: Border {
            color: color::with_alpha(color::TEXT_PRIMARY, 0.1),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Elevated card - lighter surface with a drop shadow
pub fn card_elevated_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(color::SURFACE_HOVER)),
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: color::with_alpha(Color::BLACK, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Gradient block with the given corner radius (hero card, placeholders)
pub fn gradient_style(corner: f32) -> container::Style {
    container::Style {
        background: Some(brand_gradient()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Transport bar - surface with a top divider look
pub fn player_bar_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(color::SURFACE)),
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

// =============================================================================
// BUTTON STYLE HELPERS
// =============================================================================

use iced::Theme;
use iced::widget::button;

fn round(bg: Option<Background>, text_color: Color) -> button::Style {
    button::Style {
        background: bg,
        text_color,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Play button - brand gradient
pub fn button_play(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => round(
            Some(Background::Color(color::SURFACE_HOVER)),
            color::TEXT_MUTED,
        ),
        _ => round(Some(brand_gradient()), Color::WHITE),
    }
}

/// Pause button - solid surface
pub fn button_pause(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => color::SURFACE_HOVER,
        _ => color::SURFACE,
    };
    round(Some(Background::Color(bg)), color::TEXT_PRIMARY)
}

/// Default round icon button (skip, share, comment)
pub fn button_icon(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => round(
            Some(Background::Color(color::with_alpha(color::SURFACE, 0.5))),
            color::TEXT_SECONDARY,
        ),
        button::Status::Hovered | button::Status::Pressed => round(
            Some(Background::Color(color::SURFACE)),
            color::TEXT_PRIMARY,
        ),
        button::Status::Disabled => round(None, color::TEXT_MUTED),
    }
}

/// Toggle button with an active (on) state, e.g. shuffle and repeat
pub fn button_toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            round(
                Some(Background::Color(color::with_alpha(color::PRIMARY, 0.25))),
                color::PRIMARY,
            )
        } else {
            button_icon(theme, status)
        }
    }
}

/// Like button: solid red when liked
pub fn button_like(liked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if liked {
            let bg = match status {
                button::Status::Hovered => color::lighten(color::LIKE, 0.05),
                _ => color::LIKE,
            };
            round(Some(Background::Color(bg)), Color::WHITE)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => round(
                    Some(Background::Color(color::with_alpha(color::LIKE, 0.1))),
                    color::LIKE,
                ),
                _ => button_icon(theme, status),
            }
        }
    }
}

/// Add-to-playlist button
pub fn button_add(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => round(
            Some(Background::Color(color::with_alpha(color::ADD, 0.1))),
            color::ADD,
        ),
        _ => button_icon(theme, status),
    }
}

/// Ghost button - minimal, for less important actions
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active => (Color::TRANSPARENT, color::TEXT_SECONDARY),
        button::Status::Hovered => (color::SURFACE_HOVER, color::TEXT_PRIMARY),
        button::Status::Pressed => (color::SURFACE, color::TEXT_PRIMARY),
        button::Status::Disabled => (Color::TRANSPARENT, color::TEXT_MUTED),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tab button - inactive state with hover effect
pub fn button_tab(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => color::SURFACE_HOVER,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: color::TEXT_SECONDARY,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tab button - active/selected state
pub fn button_tab_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(brand_gradient()),
        text_color: Color::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Primary text button (Play All, Retry)
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => color::lighten(color::PRIMARY, 0.08),
        button::Status::Disabled => color::SURFACE_HOVER,
        _ => color::PRIMARY,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: color::TEXT_PRIMARY,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// SCROLLABLE STYLE HELPERS
// =============================================================================

use iced::widget::scrollable;
use iced::widget::scrollable::{Rail, Scroller, Status as ScrollStatus};

/// Standard scrollbar style
pub fn scrollbar_style(_theme: &Theme, status: ScrollStatus) -> scrollable::Style {
    let scroller_color = match status {
        ScrollStatus::Active => color::BORDER,
        ScrollStatus::Hovered { .. } => color::TEXT_MUTED,
        ScrollStatus::Dragged { .. } => color::PRIMARY,
    };

    let rail = || Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            color: scroller_color,
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(),
        horizontal_rail: rail(),
        gap: None,
    }
}

// =============================================================================
// SLIDER STYLE HELPERS
// =============================================================================

use iced::widget::slider;
use iced::widget::slider::{Handle, HandleShape, Rail as SliderRail};

/// Seek bar style
pub fn slider_style(_theme: &Theme, status: slider::Status) -> slider::Style {
    let (fill, handle_radius) = match status {
        slider::Status::Active => (color::PRIMARY, 0.0),
        slider::Status::Hovered => (color::mix(color::PRIMARY, color::ACCENT, 0.5), 6.0),
        slider::Status::Dragged => (color::ACCENT, 6.0),
    };

    slider::Style {
        rail: SliderRail {
            backgrounds: (
                Background::Color(fill),
                Background::Color(color::SURFACE_HOVER),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
        },
        handle: Handle {
            shape: HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(color::TEXT_PRIMARY),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(color::mix(color::PRIMARY, color::ACCENT, 0.0), color::PRIMARY);
        assert_eq!(color::mix(color::PRIMARY, color::ACCENT, 1.0), color::ACCENT);
        assert_eq!(color::mix(color::PRIMARY, color::ACCENT, 7.0), color::ACCENT);
    }
}
