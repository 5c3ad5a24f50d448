//! Catalog file format (JSON or TOML).
//!
//! Feed entries on disk reference users, tracks and playlists by id. They are
//! resolved into [`FeedItem`]s when the catalog is built, and an entry whose
//! kind requires a payload it does not carry is rejected there.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::{Catalog, CatalogError};
use crate::meta::APP;
use crate::model::{
    FeedContent, FeedItem, FeedItemId, FeedKind, Playlist, PlaylistId, Track, TrackId, User,
    UserId,
};

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A feed entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: FeedItemId,
    pub kind: FeedKind,
    pub user: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<PlaylistId>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub tracks: Vec<Track>,
    pub users: Vec<User>,
    pub playlists: Vec<Playlist>,
    pub feed: Vec<FeedEntry>,
}

impl CatalogFile {
    /// Parse a document. `origin` is only used in error messages.
    pub fn parse(contents: &str, format: CatalogFormat, origin: &Path) -> Result<Self, CatalogError> {
        match format {
            CatalogFormat::Json => serde_json::from_str(contents)
                .map_err(|e| CatalogError::Json(origin.to_path_buf(), e)),
            CatalogFormat::Toml => {
                toml::from_str(contents).map_err(|e| CatalogError::Toml(origin.to_path_buf(), e))
            }
        }
    }

    /// Serialize in the given format.
    pub fn render(&self, format: CatalogFormat) -> Result<String, CatalogError> {
        match format {
            CatalogFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| CatalogError::Serialize(e.to_string()))
            }
            CatalogFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| CatalogError::Serialize(e.to_string()))
            }
        }
    }

    /// Write to `path`, picking the format by extension.
    pub fn write(&self, path: &Path) -> Result<PathBuf, CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        let contents = self.render(format)?;

        // Write atomically (write to temp, then rename)
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, contents)
            .map_err(|e| CatalogError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, path).map_err(|e| CatalogError::Write(path.to_path_buf(), e))?;
        Ok(path.to_path_buf())
    }

    /// Validate references and build the in-memory catalog.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(&track.id) {
                return Err(CatalogError::DuplicateTrack(track.id.clone()));
            }
        }

        let mut per_creator: HashMap<&UserId, usize> = HashMap::new();
        for playlist in &self.playlists {
            let count = per_creator.entry(&playlist.creator_id).or_default();
            *count += 1;
            if *count == APP.max_playlists_per_user + 1 {
                tracing::warn!(
                    target: "catalog",
                    creator = %playlist.creator_id,
                    limit = APP.max_playlists_per_user,
                    "Creator exceeds the playlist limit"
                );
            }
            if playlist.track_ids.len() > APP.max_playlist_tracks {
                tracing::warn!(
                    target: "catalog",
                    playlist = %playlist.id,
                    tracks = playlist.track_ids.len(),
                    limit = APP.max_playlist_tracks,
                    "Playlist exceeds the track limit"
                );
            }
        }

        let feed = self
            .feed
            .iter()
            .map(|entry| self.resolve_entry(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(self.tracks, self.users, self.playlists, feed))
    }

    fn resolve_entry(&self, entry: &FeedEntry) -> Result<FeedItem, CatalogError> {
        let entry_id = entry.id.to_string();

        let author = self
            .users
            .iter()
            .find(|u| u.id == entry.user)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownUser {
                entry: entry_id.clone(),
                user: entry.user.clone(),
            })?;

        let unexpected = match entry.kind {
            FeedKind::TrackShare | FeedKind::NowPlaying => {
                entry.playlist.is_some().then_some("playlist")
            }
            FeedKind::PlaylistShare => entry.track.is_some().then_some("track"),
        };
        if let Some(unexpected) = unexpected {
            return Err(CatalogError::UnexpectedPayload {
                entry: entry_id,
                kind: entry.kind,
                unexpected,
            });
        }

        let content = match entry.kind {
            FeedKind::TrackShare => FeedContent::TrackShare(self.entry_track(entry)?),
            FeedKind::NowPlaying => FeedContent::NowPlaying(self.entry_track(entry)?),
            FeedKind::PlaylistShare => {
                let id = entry
                    .playlist
                    .as_ref()
                    .ok_or_else(|| CatalogError::MissingPayload {
                        entry: entry_id.clone(),
                        kind: entry.kind,
                        missing: "playlist",
                    })?;
                let playlist = self
                    .playlists
                    .iter()
                    .find(|p| &p.id == id)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownPlaylist {
                        entry: entry_id.clone(),
                        playlist: id.clone(),
                    })?;
                FeedContent::PlaylistShare(playlist)
            }
        };

        Ok(FeedItem {
            id: entry.id.clone(),
            author,
            content,
            timestamp: entry.timestamp,
            likes: entry.likes,
            comments: entry.comments,
        })
    }

    fn entry_track(&self, entry: &FeedEntry) -> Result<Track, CatalogError> {
        let id = entry
            .track
            .as_ref()
            .ok_or_else(|| CatalogError::MissingPayload {
                entry: entry.id.to_string(),
                kind: entry.kind,
                missing: "track",
            })?;
        self.tracks
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownTrack {
                entry: entry.id.to_string(),
                track: id.clone(),
            })
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        let feed = catalog
            .feed()
            .iter()
            .map(|item| {
                let (track, playlist) = match &item.content {
                    FeedContent::TrackShare(t) | FeedContent::NowPlaying(t) => {
                        (Some(t.id.clone()), None)
                    }
                    FeedContent::PlaylistShare(p) => (None, Some(p.id.clone())),
                };
                FeedEntry {
                    id: item.id.clone(),
                    kind: item.kind(),
                    user: item.author.id.clone(),
                    track,
                    playlist,
                    timestamp: item.timestamp,
                    likes: item.likes,
                    comments: item.comments,
                }
            })
            .collect();

        Self {
            tracks: catalog.tracks().to_vec(),
            users: catalog.users().to_vec(),
            playlists: catalog.playlists().to_vec(),
            feed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_playlist;

    const MINIMAL_JSON: &str = r#"{
        "tracks": [
            {"id": "1", "title": "Midnight Vibes", "artist": "Luna Echo",
             "album": "Neon Dreams", "artwork": "art/mv.png", "duration": 210}
        ],
        "users": [
            {"id": "user1", "display_name": "MusicLover", "avatar": "art/ml.png"}
        ],
        "playlists": [],
        "feed": [
            {"id": "f1", "kind": "now_playing", "user": "user1", "track": "1",
             "timestamp": "2024-01-20T12:00:00Z", "likes": 2}
        ]
    }"#;

    fn parse_json(s: &str) -> Result<CatalogFile, CatalogError> {
        CatalogFile::parse(s, CatalogFormat::Json, Path::new("test.json"))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("a.toml")).unwrap(),
            CatalogFormat::Toml
        );
        assert!(matches!(
            CatalogFormat::from_path(Path::new("a.yaml")),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_minimal_json_builds_catalog() {
        let catalog = parse_json(MINIMAL_JSON).unwrap().into_catalog().unwrap();
        assert_eq!(catalog.tracks().len(), 1);
        let item = &catalog.feed()[0];
        assert_eq!(item.kind(), FeedKind::NowPlaying);
        assert_eq!(item.author.display_name, "MusicLover");
        assert_eq!(item.likes, 2);
        assert_eq!(item.comments, 0);
    }

    #[test]
    fn test_track_share_without_track_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        file.feed[0].kind = FeedKind::TrackShare;
        file.feed[0].track = None;

        let err = file.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingPayload {
                missing: "track",
                ..
            }
        ));
    }

    #[test]
    fn test_playlist_share_with_unknown_playlist_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        file.feed[0].kind = FeedKind::PlaylistShare;
        file.feed[0].playlist = Some(PlaylistId::from("nope"));

        let err = file.into_catalog().unwrap_err();
        assert!(err.to_string().contains("unknown playlist nope"));
    }

    #[test]
    fn test_track_share_with_playlist_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        file.feed[0].kind = FeedKind::TrackShare;
        file.feed[0].playlist = Some(PlaylistId::from("p"));

        let err = file.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnexpectedPayload {
                unexpected: "playlist",
                ..
            }
        ));
    }

    #[test]
    fn test_playlist_share_with_track_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        file.playlists.push(mock_playlist("p", &["1"]));
        file.feed[0].kind = FeedKind::PlaylistShare;
        file.feed[0].playlist = Some(PlaylistId::from("p"));

        let err = file.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnexpectedPayload {
                unexpected: "track",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_author_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        file.feed[0].user = UserId::from("ghost");
        assert!(matches!(
            file.into_catalog(),
            Err(CatalogError::UnknownUser { .. })
        ));
    }

    #[test]
    fn test_duplicate_track_is_rejected() {
        let mut file = parse_json(MINIMAL_JSON).unwrap();
        let dup = file.tracks[0].clone();
        file.tracks.push(dup);
        assert!(matches!(
            file.into_catalog(),
            Err(CatalogError::DuplicateTrack(_))
        ));
    }

    #[test]
    fn test_invalid_json_reports_origin() {
        let err = parse_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("test.json"));
    }

    #[test]
    fn test_builtin_exports_and_reloads_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");

        let original = Catalog::builtin(Utc::now());
        CatalogFile::from(&original).write(&path).unwrap();

        assert!(!path.with_extension("tmp").exists());
        let reloaded = Catalog::from_path(&path).unwrap();
        assert_eq!(reloaded.tracks(), original.tracks());
        assert_eq!(reloaded.feed().len(), original.feed().len());
        assert_eq!(reloaded.feed()[1].kind(), FeedKind::PlaylistShare);
    }
}
