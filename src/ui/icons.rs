//! Icon glyphs.
//!
//! Icons are plain Unicode symbols rendered with the default font, relying on
//! the system's font fallback for coverage.

use iced::widget::Text;

use super::theme::color;

// ============================================================================
// Player Control Icons
// ============================================================================

/// Play (U+25B6)
pub const PLAY: char = '\u{25b6}';

/// Pause (U+23F8)
pub const PAUSE: char = '\u{23f8}';

/// Skip backward (U+23EE)
pub const SKIP_BACK: char = '\u{23ee}';

/// Skip forward (U+23ED)
pub const SKIP_FORWARD: char = '\u{23ed}';

/// Shuffle (U+1F500)
pub const SHUFFLE: char = '\u{1f500}';

/// Repeat all (U+1F501)
pub const REPEAT: char = '\u{1f501}';

/// Repeat one (U+1F502)
pub const REPEAT_ONE: char = '\u{1f502}';

// ============================================================================
// Social Icons
// ============================================================================

/// Filled heart (U+2665)
pub const HEART: char = '\u{2665}';

/// Outline heart (U+2661)
pub const HEART_OUTLINE: char = '\u{2661}';

/// Plus (U+FF0B)
pub const PLUS: char = '\u{ff0b}';

/// Speech balloon (U+1F4AC)
pub const COMMENT: char = '\u{1f4ac}';

/// Share arrow (U+2197)
pub const SHARE: char = '\u{2197}';

/// Chart with upwards trend (U+1F4C8)
pub const TRENDING: char = '\u{1f4c8}';

// ============================================================================
// Navigation Icons
// ============================================================================

/// Discover - eighth notes (U+266B)
pub const MUSIC: char = '\u{266b}';

/// Feed - busts in silhouette (U+1F465)
pub const USERS: char = '\u{1f465}';

/// Playlists - list (U+2630)
pub const LIST: char = '\u{2630}';

/// Profile - bust in silhouette (U+1F464)
pub const USER: char = '\u{1f464}';

/// Spinner frames for the loading screen
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Spinner frame for an animation tick
pub fn spinner_frame(tick: u32) -> char {
    SPINNER[tick as usize % SPINNER.len()]
}

/// Window icon pixels: a brand-gradient disc on transparency.
pub fn window_icon_rgba(size: u32) -> Vec<u8> {
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let (dx, dy) = (x as f32 - center, y as f32 - center);
            let inside = (dx * dx + dy * dy).sqrt() <= radius;
            // Diagonal blend, matching the 135 degree UI gradient
            let t = (x + y) as f32 / (2 * size.max(1)) as f32;
            let c = color::mix(color::PRIMARY, color::ACCENT, t);
            let [r, g, b, _] = c.into_rgba8();
            pixels.extend_from_slice(&[r, g, b, if inside { 255 } else { 0 }]);
        }
    }
    pixels
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Create an icon text element with specific size
pub fn icon_sized(c: char, size: u16) -> Text<'static> {
    Text::new(c.to_string()).size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_icon_shape() {
        let px = window_icon_rgba(32);
        assert_eq!(px.len(), 32 * 32 * 4);
        // Corner is transparent, center is opaque
        assert_eq!(px[3], 0);
        let mid = (16 * 32 + 16) * 4;
        assert_eq!(px[mid + 3], 255);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(4), '|');
        assert_eq!(spinner_frame(5), '/');
    }
}
