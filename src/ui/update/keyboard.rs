//! Keyboard shortcut handling.
//!
//! Maps keyboard events to player and navigation actions.

use iced::Task;
use iced::keyboard::{self, key};

use super::super::messages::Message;
use super::super::state::{LoadedState, Tab};

/// Handle keyboard shortcuts.
///
/// Returns a Task if the key triggered an action, or Task::none() if unhandled.
pub fn handle_keyboard(
    s: &LoadedState,
    key: keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Task<Message> {
    match shortcut(s, &key, modifiers) {
        Some(msg) => {
            tracing::debug!(target: "ui::keyboard", key = ?key, "Shortcut -> {:?}", msg);
            Task::done(msg)
        }
        None => Task::none(),
    }
}

fn shortcut(s: &LoadedState, key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    // Shortcuts are bare keys; leave modified chords to the platform
    if !modifiers.is_empty() && modifiers != keyboard::Modifiers::SHIFT {
        return None;
    }

    match key.as_ref() {
        keyboard::Key::Named(key::Named::Space) => Some(Message::PlayerToggle),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PlayerPrevious),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::PlayerNext),
        keyboard::Key::Character(c) => {
            if let Some(tab) = Tab::from_shortcut(c) {
                return Some(Message::SelectTab(tab));
            }
            match c.to_ascii_lowercase().as_str() {
                "l" if s.transport.current().is_some() => Some(Message::ToggleLikeCurrent),
                "s" => Some(Message::PlayerToggleShuffle),
                "r" => Some(Message::PlayerCycleRepeat),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::ArtworkLoader;
    use crate::config::Config;
    use crate::test_utils::{mock_catalog, mock_track};

    fn loaded() -> LoadedState {
        LoadedState::new(mock_catalog(2), &Config::default(), ArtworkLoader::local_only())
    }

    fn char_key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn test_space_toggles() {
        let s = loaded();
        let msg = shortcut(&s, &keyboard::Key::Named(key::Named::Space), keyboard::Modifiers::empty());
        assert!(matches!(msg, Some(Message::PlayerToggle)));
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let s = loaded();
        let msg = shortcut(&s, &char_key("3"), keyboard::Modifiers::empty());
        assert!(matches!(msg, Some(Message::SelectTab(Tab::Playlists))));
    }

    #[test]
    fn test_like_needs_current_track() {
        let mut s = loaded();
        assert!(shortcut(&s, &char_key("l"), keyboard::Modifiers::empty()).is_none());
        s.transport.play(mock_track("1"));
        let msg = shortcut(&s, &char_key("L"), keyboard::Modifiers::SHIFT);
        assert!(matches!(msg, Some(Message::ToggleLikeCurrent)));
    }

    #[test]
    fn test_ctrl_chords_ignored() {
        let s = loaded();
        assert!(shortcut(&s, &char_key("s"), keyboard::Modifiers::CTRL).is_none());
    }
}
