//! Built-in seed data.

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::Catalog;
use crate::model::{
    FeedContent, FeedItem, FeedItemId, Playlist, PlaylistId, Track, TrackId, User, UserId,
};

fn track(id: &str, title: &str, artist: &str, album: &str, color: &str, duration: u32) -> Track {
    let initials: String = title
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    Track {
        id: TrackId::from(id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        artwork: format!("https://via.placeholder.com/300x300/{color}/FFFFFF?text={initials}"),
        duration: Some(duration),
        preview: None,
    }
}

fn user(id: &str, name: &str, color: &str, initials: &str, following: &[&str], followers: &[&str]) -> User {
    User {
        id: UserId::from(id),
        display_name: name.to_string(),
        avatar: format!("https://via.placeholder.com/100x100/{color}/FFFFFF?text={initials}"),
        following: following.iter().map(|s| UserId::from(*s)).collect(),
        followers: followers.iter().map(|s| UserId::from(*s)).collect(),
        listen_history: Vec::new(),
    }
}

fn playlist(
    id: &str,
    name: &str,
    description: &str,
    creator: &str,
    tracks: &[&str],
    created: DateTime<Utc>,
) -> Playlist {
    Playlist {
        id: PlaylistId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        creator_id: UserId::from(creator),
        track_ids: tracks.iter().map(|s| TrackId::from(*s)).collect(),
        is_public: true,
        created_at: created,
        updated_at: created,
    }
}

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn tracks() -> Vec<Track> {
    vec![
        track("1", "Midnight Vibes", "Luna Echo", "Neon Dreams", "8B5CF6", 210),
        track("2", "Digital Sunset", "Cyber Waves", "Future Sounds", "3B82F6", 185),
        track("3", "Base Frequency", "Chain Reaction", "Onchain Melodies", "EC4899", 195),
        track("4", "Farcaster Dreams", "Social Harmony", "Connected", "10B981", 220),
        track("5", "Crypto Rhythm", "Block Beats", "Decentralized", "F59E0B", 175),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        user("user1", "MusicLover", "8B5CF6", "ML", &["user2", "user3"], &["user2", "user4"]),
        user("user2", "BeatMaster", "3B82F6", "BM", &["user1", "user3"], &["user1", "user3"]),
        user("user3", "SoundWave", "EC4899", "SW", &["user1", "user2"], &["user1", "user2"]),
    ]
}

pub fn playlists() -> Vec<Playlist> {
    vec![
        playlist(
            "playlist1",
            "Base Vibes",
            "The best tracks for Base builders",
            "user1",
            &["1", "3", "5"],
            day(2024, 1, 15),
        ),
        playlist(
            "playlist2",
            "Midnight Sessions",
            "Late night coding soundtrack",
            "user2",
            &["1", "2", "4"],
            day(2024, 1, 14),
        ),
    ]
}

/// The seed catalog. Feed timestamps are relative to `now`.
pub fn catalog(now: DateTime<Utc>) -> Catalog {
    let tracks = tracks();
    let users = users();
    let playlists = playlists();

    let feed = vec![
        FeedItem {
            id: FeedItemId::from("1"),
            author: users[0].clone(),
            content: FeedContent::TrackShare(tracks[0].clone()),
            timestamp: now - Duration::minutes(30),
            likes: 12,
            comments: 3,
        },
        FeedItem {
            id: FeedItemId::from("2"),
            author: users[1].clone(),
            content: FeedContent::PlaylistShare(playlists[0].clone()),
            timestamp: now - Duration::hours(2),
            likes: 8,
            comments: 1,
        },
        FeedItem {
            id: FeedItemId::from("3"),
            author: users[2].clone(),
            content: FeedContent::NowPlaying(tracks[2].clone()),
            timestamp: now - Duration::hours(4),
            likes: 5,
            comments: 0,
        },
    ];

    Catalog::new(tracks, users, playlists, feed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedKind;

    #[test]
    fn test_seed_shape() {
        let now = Utc::now();
        let catalog = catalog(now);
        assert_eq!(catalog.tracks().len(), 5);
        assert_eq!(catalog.users().len(), 3);
        assert_eq!(catalog.playlists().len(), 2);

        let kinds: Vec<_> = catalog.feed().iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![FeedKind::TrackShare, FeedKind::PlaylistShare, FeedKind::NowPlaying]
        );
        assert_eq!(catalog.feed()[0].timestamp, now - Duration::minutes(30));
    }

    #[test]
    fn test_seed_artwork_initials() {
        let t = &tracks()[0];
        assert!(t.artwork.ends_with("8B5CF6/FFFFFF?text=MV"));
    }

    #[test]
    fn test_seed_playlists_resolve_fully() {
        let catalog = catalog(Utc::now());
        for p in catalog.playlists() {
            assert_eq!(catalog.resolve_playlist_tracks(p).len(), p.track_ids.len());
        }
    }
}
