//! Message types for the UI.

use iced::keyboard;

use crate::artwork::Artwork;
use crate::catalog::Catalog;
use crate::model::{FeedItemId, PlaylistId, Track, TrackId};
use crate::player::Session;

use super::state::Tab;

#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    CatalogLoaded(Result<Catalog, String>),
    RetryLoad,
    LoadingTick,

    // Navigation
    SelectTab(Tab),

    // Player messages
    PlayerPlayTrack(Track),
    PlayerPlayPlaylist(PlaylistId), // First resolved track only
    PlayerPlayAll(PlaylistId),      // Replace the queue with the playlist
    PlayerToggle,
    PlayerNext,
    PlayerPrevious,
    PlayerSeekPreview(f32), // While dragging - updates display only
    PlayerSeekRelease,      // On release - seeks to the stored preview position
    PlayerTick(Session),
    PlayerToggleShuffle,
    PlayerCycleRepeat,

    // Likes
    ToggleLikeTrack(TrackId),
    ToggleLikePlaylist(PlaylistId),
    ToggleLikeCurrent,

    // Intents without a backend yet (logged only)
    SkipTrack(TrackId),
    AddToPlaylist(TrackId),
    FeedLike(FeedItemId),
    FeedComment(FeedItemId),
    FeedShare(FeedItemId),
    CreatePlaylist,
    ConnectWallet,
    SeeAllRecommended,

    // Artwork (background, non-blocking)
    ArtworkLoaded(String, Result<Artwork, String>),

    // Config persistence
    ConfigSaved(Result<(), String>),

    // Keyboard shortcuts
    KeyPressed(keyboard::Key, keyboard::Modifiers),
}

impl Message {
    /// High-frequency messages that are not worth tracing.
    pub fn is_tick(&self) -> bool {
        matches!(self, Message::PlayerTick(_) | Message::LoadingTick)
    }
}
