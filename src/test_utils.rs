//! Test utilities and fixtures for tunesphere tests.
//!
//! This module provides mock factories for the catalog entities so tests
//! can build exactly the tracks and playlists they need.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_track, mock_tracks};
//!
//! #[test]
//! fn test_something() {
//!     let track = mock_track("1");
//!     let queue = PlayQueue::from_tracks(mock_tracks(3));
//!     // ... test logic
//! }
//! ```

use chrono::{TimeZone, Utc};

use crate::catalog::Catalog;
use crate::model::{Playlist, PlaylistId, Track, TrackId, User, UserId};

/// Creates a mock Track with a known 180 second duration.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let track = Track {
///     duration: None,
///     ..mock_track("1")
/// };
/// ```
pub fn mock_track(id: &str) -> Track {
    Track {
        id: TrackId::from(id),
        title: format!("Track {}", id),
        artist: "Test Artist".to_string(),
        album: "Test Album".to_string(),
        artwork: format!("/test/artwork/{}.png", id),
        duration: Some(180),
        preview: None,
    }
}

/// Creates `n` mock tracks with ids "1" through "n".
pub fn mock_tracks(n: usize) -> Vec<Track> {
    (1..=n).map(|i| mock_track(&i.to_string())).collect()
}

/// Creates a mock Playlist referencing the given track ids.
pub fn mock_playlist(id: &str, track_ids: &[&str]) -> Playlist {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_default();
    Playlist {
        id: PlaylistId::from(id),
        name: format!("Playlist {}", id),
        description: "Test playlist".to_string(),
        creator_id: UserId::from("user1"),
        track_ids: track_ids.iter().map(|s| TrackId::from(*s)).collect(),
        is_public: true,
        created_at: created,
        updated_at: created,
    }
}

/// Creates a mock User with no social graph.
pub fn mock_user(id: &str) -> User {
    User {
        id: UserId::from(id),
        display_name: format!("user {}", id),
        avatar: format!("/test/avatars/{}.png", id),
        following: Vec::new(),
        followers: Vec::new(),
        listen_history: Vec::new(),
    }
}

/// Creates a catalog of `n` mock tracks and one playlist holding all of them.
pub fn mock_catalog(n: usize) -> Catalog {
    let tracks = mock_tracks(n);
    let ids: Vec<String> = tracks.iter().map(|t| t.id.0.clone()).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    Catalog::new(
        tracks,
        vec![mock_user("user1")],
        vec![mock_playlist("p1", &id_refs)],
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_track_defaults() {
        let track = mock_track("7");
        assert_eq!(track.id, TrackId::from("7"));
        assert_eq!(track.title, "Track 7");
        assert_eq!(track.known_duration(), Some(180));
    }

    #[test]
    fn test_mock_tracks_ids() {
        let ids: Vec<_> = mock_tracks(3).into_iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_mock_catalog_playlist_resolves() {
        let catalog = mock_catalog(4);
        let playlist = &catalog.playlists()[0];
        assert_eq!(catalog.resolve_playlist_tracks(playlist).len(), 4);
    }
}
