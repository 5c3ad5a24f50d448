//! Core data models for the music catalog.
//!
//! Defines the primary entities: [`Track`], [`User`], [`Playlist`],
//! [`ListenEvent`] and [`FeedItem`]. All entities are seeded once when the
//! catalog loads and are immutable afterwards.
//!
//! Feed items are a tagged variant over [`FeedContent`], so a track share
//! always carries a track and a playlist share always carries a playlist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identity of a track in the catalog.
    TrackId
);
string_id!(
    /// Identity of a user (Farcaster id in the seed data).
    UserId
);
string_id!(
    /// Identity of a playlist.
    PlaylistId
);
string_id!(
    /// Identity of a feed entry.
    FeedItemId
);

/// A listenable track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Artwork reference (local path or http(s) URL)
    pub artwork: String,
    /// Duration in seconds, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Preview clip reference, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl Track {
    /// Duration in seconds, treating zero as unknown.
    pub fn known_duration(&self) -> Option<u32> {
        self.duration.filter(|d| *d > 0)
    }
}

/// What a user did with a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenAction {
    Play,
    Skip,
    Like,
    AddToPlaylist,
}

/// One entry of a user's listen history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenEvent {
    pub user_id: UserId,
    pub track_id: TrackId,
    pub timestamp: DateTime<Utc>,
    pub action: ListenAction,
}

/// A community member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    /// Avatar reference (local path or http(s) URL)
    pub avatar: String,
    #[serde(default)]
    pub following: Vec<UserId>,
    #[serde(default)]
    pub followers: Vec<UserId>,
    #[serde(default)]
    pub listen_history: Vec<ListenEvent>,
}

/// An ordered list of track ids curated by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: String,
    /// Weak reference; the creator need not be in the catalog
    pub creator_id: UserId,
    /// Playback order. Duplicates are allowed.
    pub track_ids: Vec<TrackId>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Discriminant of a feed entry, used in catalog files and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    TrackShare,
    PlaylistShare,
    NowPlaying,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeedKind::TrackShare => "track_share",
            FeedKind::PlaylistShare => "playlist_share",
            FeedKind::NowPlaying => "now_playing",
        })
    }
}

/// Kind-specific payload of a feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedContent {
    TrackShare(Track),
    PlaylistShare(Playlist),
    NowPlaying(Track),
}

impl FeedContent {
    pub fn kind(&self) -> FeedKind {
        match self {
            FeedContent::TrackShare(_) => FeedKind::TrackShare,
            FeedContent::PlaylistShare(_) => FeedKind::PlaylistShare,
            FeedContent::NowPlaying(_) => FeedKind::NowPlaying,
        }
    }

    /// Phrase shown after the author's name.
    pub fn action_phrase(&self) -> &'static str {
        match self {
            FeedContent::TrackShare(_) => "shared a track",
            FeedContent::PlaylistShare(_) => "shared a playlist",
            FeedContent::NowPlaying(_) => "is listening to",
        }
    }

    /// The track carried by this entry, if it is track-shaped.
    pub fn track(&self) -> Option<&Track> {
        match self {
            FeedContent::TrackShare(t) | FeedContent::NowPlaying(t) => Some(t),
            FeedContent::PlaylistShare(_) => None,
        }
    }
}

/// One entry of the social activity feed.
///
/// Like and comment counts are display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: FeedItemId,
    pub author: User,
    pub content: FeedContent,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
}

impl FeedItem {
    pub fn kind(&self) -> FeedKind {
        self.content.kind()
    }
}
