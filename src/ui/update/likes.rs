//! Liked tracks and playlists.

use crate::model::{PlaylistId, TrackId};

use super::super::messages::Message;
use super::super::state::LoadedState;

/// Handle like toggles from any tab or the transport bar.
pub fn handle_likes(s: &mut LoadedState, msg: Message) {
    match msg {
        Message::ToggleLikeTrack(id) => toggle_track(s, id),
        Message::ToggleLikePlaylist(id) => toggle_playlist(s, id),
        Message::ToggleLikeCurrent => {
            if let Some(id) = s.transport.current().map(|t| t.id.clone()) {
                toggle_track(s, id);
            }
        }
        _ => {}
    }
}

fn toggle_track(s: &mut LoadedState, id: TrackId) {
    let liked = s.likes.toggle_track(id.clone());
    tracing::debug!(target: "ui::likes", track = %id, liked, "Track like toggled");
}

fn toggle_playlist(s: &mut LoadedState, id: PlaylistId) {
    let liked = s.likes.toggle_playlist(id.clone());
    tracing::debug!(target: "ui::likes", playlist = %id, liked, "Playlist like toggled");
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

    #[test]
    fn test_like_current_without_track_is_noop() {
        let mut s = loaded();
        handle_likes(&mut s, Message::ToggleLikeCurrent);
        assert_eq!(s.likes.track_count(), 0);
    }

    #[test]
    fn test_like_current_shares_state_with_cards() {
        let mut s = loaded();
        s.transport.play(mock_track("1"));
        handle_likes(&mut s, Message::ToggleLikeCurrent);
        assert!(s.likes.is_track_liked(&TrackId::from("1")));

        // Unliking from a card clears the transport bar's heart too
        handle_likes(&mut s, Message::ToggleLikeTrack(TrackId::from("1")));
        assert!(!s.likes.is_track_liked(&TrackId::from("1")));
    }

    #[test]
    fn test_playlist_likes_counted() {
        let mut s = loaded();
        handle_likes(&mut s, Message::ToggleLikePlaylist(PlaylistId::from("p1")));
        assert_eq!(s.likes.playlist_count(), 1);
    }
}
