//! Application state types.

use std::collections::HashSet;

use iced::widget::image;

use crate::artwork::{ArtworkLoader, ArtworkStore};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::model::{FeedItem, Playlist, PlaylistId, Track, TrackId};
use crate::player::Transport;

/// Top-level application state
pub enum AppState {
    /// Catalog is loading; the counter drives the spinner
    Loading(u32),
    Loaded(Box<LoadedState>),
    /// Catalog failed to load
    Error(String),
}

/// The four mutually exclusive tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Feed,
    Playlists,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Discover, Tab::Feed, Tab::Playlists, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Feed => "Feed",
            Tab::Playlists => "Playlists",
            Tab::Profile => "Profile",
        }
    }

    /// Tab bound to a number key (`1`..`4`).
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Tab::Discover),
            "2" => Some(Tab::Feed),
            "3" => Some(Tab::Playlists),
            "4" => Some(Tab::Profile),
            _ => None,
        }
    }
}

/// Liked tracks and playlists, shared by every tab and the transport bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Likes {
    tracks: HashSet<TrackId>,
    playlists: HashSet<PlaylistId>,
}

impl Likes {
    /// Flip a track's liked state. Returns whether it is now liked.
    pub fn toggle_track(&mut self, id: TrackId) -> bool {
        toggle(&mut self.tracks, id)
    }

    /// Flip a playlist's liked state. Returns whether it is now liked.
    pub fn toggle_playlist(&mut self, id: PlaylistId) -> bool {
        toggle(&mut self.playlists, id)
    }

    pub fn is_track_liked(&self, id: &TrackId) -> bool {
        self.tracks.contains(id)
    }

    pub fn is_playlist_liked(&self, id: &PlaylistId) -> bool {
        self.playlists.contains(id)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

fn toggle<T: std::hash::Hash + Eq>(set: &mut HashSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// State once the catalog is available
pub struct LoadedState {
    pub catalog: Catalog,
    pub active_tab: Tab,

    pub transport: Transport,
    /// Seek preview position while the user drags the slider
    pub seek_preview: Option<f32>,

    pub likes: Likes,

    /// Shuffled catalog tracks for Discover; also the initial queue
    pub recommended: Vec<Track>,
    pub trending: Vec<Playlist>,

    /// Decoded artwork handles keyed by reference
    pub artwork: ArtworkStore<image::Handle>,
    pub loader: ArtworkLoader,
}

impl LoadedState {
    pub fn new(catalog: Catalog, config: &Config, loader: ArtworkLoader) -> Self {
        let recommended = catalog.recommended(config.catalog.recommended_count);
        let trending = catalog.playlists().to_vec();
        let transport = Transport::new(recommended.clone())
            .with_modes(config.player.shuffle, config.player.repeat);

        Self {
            catalog,
            active_tab: Tab::default(),
            transport,
            seek_preview: None,
            likes: Likes::default(),
            recommended,
            trending,
            artwork: ArtworkStore::new(),
            loader,
        }
    }

    pub fn feed(&self) -> &[FeedItem] {
        self.catalog.feed()
    }

    /// Every artwork reference the views can show.
    pub fn artwork_refs(&self) -> Vec<String> {
        let tracks = self.catalog.tracks().iter().map(|t| t.artwork.clone());
        let users = self.catalog.users().iter().map(|u| u.avatar.clone());
        let feed = self.catalog.feed().iter().flat_map(|item| {
            let track = item.content.track().map(|t| t.artwork.clone());
            std::iter::once(item.author.avatar.clone()).chain(track)
        });
        let mut seen = HashSet::new();
        tracks
            .chain(users)
            .chain(feed)
            .filter(|r| !r.trim().is_empty())
            .filter(|r| seen.insert(r.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_catalog;

    #[test]
    fn test_tab_shortcuts() {
        assert_eq!(Tab::from_shortcut("1"), Some(Tab::Discover));
        assert_eq!(Tab::from_shortcut("4"), Some(Tab::Profile));
        assert_eq!(Tab::from_shortcut("5"), None);
        assert_eq!(Tab::ALL.len(), 4);
    }

    #[test]
    fn test_toggle_like_reports_state() {
        let mut likes = Likes::default();
        assert!(likes.toggle_track(TrackId::new("1")));
        assert!(likes.is_track_liked(&TrackId::new("1")));
        assert!(!likes.toggle_track(TrackId::new("1")));
        assert_eq!(likes.track_count(), 0);

        assert!(likes.toggle_playlist(PlaylistId::new("p1")));
        assert_eq!(likes.playlist_count(), 1);
        assert!(!likes.is_track_liked(&TrackId::new("p1")));
    }

    #[test]
    fn test_loaded_state_uses_config() {
        let mut config = Config::default();
        config.catalog.recommended_count = 3;
        config.player.shuffle = true;

        let s = LoadedState::new(mock_catalog(5), &config, ArtworkLoader::local_only());
        assert_eq!(s.recommended.len(), 3);
        assert_eq!(s.transport.queue().len(), 3);
        assert!(s.transport.shuffle());
        assert_eq!(s.trending.len(), 1);
        assert_eq!(s.active_tab, Tab::Discover);
        assert!(s.transport.current().is_none());
    }

    #[test]
    fn test_artwork_refs_are_unique() {
        let s = LoadedState::new(mock_catalog(3), &Config::default(), ArtworkLoader::local_only());
        let refs = s.artwork_refs();
        let unique: HashSet<_> = refs.iter().collect();
        assert_eq!(refs.len(), unique.len());
        assert!(refs.contains(&"/test/artwork/1.png".to_string()));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn toggling_twice_restores_likes(
                initial in proptest::collection::vec("[a-z0-9]{1,4}", 0..8),
                id in "[a-z0-9]{1,4}",
            ) {
                let mut likes = Likes::default();
                for t in &initial {
                    likes.tracks.insert(TrackId::new(t.clone()));
                    likes.playlists.insert(PlaylistId::new(t.clone()));
                }
                let before = likes.clone();

                likes.toggle_track(TrackId::new(id.clone()));
                likes.toggle_track(TrackId::new(id.clone()));
                likes.toggle_playlist(PlaylistId::new(id.clone()));
                likes.toggle_playlist(PlaylistId::new(id));

                prop_assert_eq!(likes, before);
            }
        }
    }
}
