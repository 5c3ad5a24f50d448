//! Fallback shown when artwork is missing or failed.

use crate::format::initial;
use crate::model::{Playlist, Track, User};

/// Text drawn over the brand gradient in place of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Single character, from the entity's display name
    pub glyph: String,
    /// Secondary line (playlist track count)
    pub caption: Option<String>,
}

impl Placeholder {
    pub fn for_track(track: &Track) -> Self {
        Self {
            glyph: initial(&track.title, false),
            caption: None,
        }
    }

    /// Avatars use the uppercased initial.
    pub fn for_user(user: &User) -> Self {
        Self {
            glyph: initial(&user.display_name, true),
            caption: None,
        }
    }

    /// `track_count` is the number of tracks that resolved in the catalog.
    pub fn for_playlist(playlist: &Playlist, track_count: usize) -> Self {
        Self {
            glyph: initial(&playlist.name, false),
            caption: Some(format!("{track_count} tracks")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_playlist, mock_track, mock_user};

    #[test]
    fn test_track_placeholder() {
        let track = Track {
            title: "midnight Vibes".to_string(),
            ..mock_track("1")
        };
        assert_eq!(Placeholder::for_track(&track).glyph, "m");
    }

    #[test]
    fn test_user_placeholder_is_uppercase() {
        let user = User {
            display_name: "soundWave".to_string(),
            ..mock_user("u")
        };
        assert_eq!(Placeholder::for_user(&user).glyph, "S");
    }

    #[test]
    fn test_playlist_placeholder_counts_tracks() {
        let p = mock_playlist("p", &["1", "2", "99"]);
        let ph = Placeholder::for_playlist(&p, 2);
        assert_eq!(ph.glyph, "P");
        assert_eq!(ph.caption.as_deref(), Some("2 tracks"));
    }

    #[test]
    fn test_empty_name_placeholder() {
        let track = Track {
            title: String::new(),
            ..mock_track("1")
        };
        assert_eq!(Placeholder::for_track(&track).glyph, "?");
    }
}
