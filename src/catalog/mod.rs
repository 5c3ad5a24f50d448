//! In-memory music catalog.
//!
//! The catalog is seeded once at startup, either from the built-in seed data
//! or from a catalog file on disk, and is read-only afterwards.
//!
//! # Sources
//!
//! - [`CatalogSource::Builtin`]: the bundled seed data (see [`seed`])
//! - [`CatalogSource::File`]: a `.json` or `.toml` file (see [`file`])
//!
//! Lookups are linear scans; catalogs are small.

pub mod file;
pub mod seed;

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::format;
use crate::model::{FeedItem, Playlist, PlaylistId, Track, TrackId, User, UserId};

pub use file::{CatalogFile, CatalogFormat, FeedEntry};

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick a source from an optional path (CLI flag or config).
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or_default()
    }

    /// Human-readable label for logs and the CLI.
    pub fn label(&self) -> String {
        match self {
            CatalogSource::Builtin => "built-in catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Catalog loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to write catalog {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Invalid JSON in {0}: {1}")]
    Json(PathBuf, serde_json::Error),

    #[error("Invalid TOML in {0}: {1}")]
    Toml(PathBuf, toml::de::Error),

    #[error("Failed to serialize catalog: {0}")]
    Serialize(String),

    #[error("Unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Duplicate track id: {0}")]
    DuplicateTrack(TrackId),

    #[error("Feed entry {entry} references unknown user {user}")]
    UnknownUser { entry: String, user: UserId },

    #[error("Feed entry {entry} of kind {kind} has no {missing}")]
    MissingPayload {
        entry: String,
        kind: crate::model::FeedKind,
        missing: &'static str,
    },

    #[error("Feed entry {entry} of kind {kind} must not carry a {unexpected}")]
    UnexpectedPayload {
        entry: String,
        kind: crate::model::FeedKind,
        unexpected: &'static str,
    },

    #[error("Feed entry {entry} references unknown track {track}")]
    UnknownTrack { entry: String, track: TrackId },

    #[error("Feed entry {entry} references unknown playlist {playlist}")]
    UnknownPlaylist { entry: String, playlist: PlaylistId },
}

/// The loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    users: Vec<User>,
    playlists: Vec<Playlist>,
    feed: Vec<FeedItem>,
}

impl Catalog {
    /// Assemble a catalog from already-validated parts.
    pub fn new(
        tracks: Vec<Track>,
        users: Vec<User>,
        playlists: Vec<Playlist>,
        feed: Vec<FeedItem>,
    ) -> Self {
        Self {
            tracks,
            users,
            playlists,
            feed,
        }
    }

    /// The built-in seed catalog, with feed times relative to `now`.
    pub fn builtin(now: DateTime<Utc>) -> Self {
        seed::catalog(now)
    }

    /// Load a catalog from a file, picking the format by extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Read(path.to_path_buf(), e))?;
        CatalogFile::parse(&contents, format, path)?.into_catalog()
    }

    /// Load from a source without blocking the UI thread.
    pub async fn load(source: CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Builtin => Ok(Self::builtin(Utc::now())),
            CatalogSource::File(path) => {
                let format = CatalogFormat::from_path(&path)?;
                let contents = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| CatalogError::Read(path.clone(), e))?;
                CatalogFile::parse(&contents, format, &path)?.into_catalog()
            }
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn feed(&self) -> &[FeedItem] {
        &self.feed
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.playlists.is_empty() && self.feed.is_empty()
    }

    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Tracks of a playlist in playlist order.
    ///
    /// Ids missing from the catalog are skipped silently.
    pub fn resolve_playlist_tracks(&self, playlist: &Playlist) -> Vec<Track> {
        playlist
            .track_ids
            .iter()
            .filter_map(|id| self.track(id))
            .cloned()
            .collect()
    }

    /// Random selection of up to `count` tracks for the Discover tab.
    pub fn recommended(&self, count: usize) -> Vec<Track> {
        let mut tracks = format::shuffled(&self.tracks);
        tracks.truncate(count);
        tracks
    }
}
