//! Update handlers for application messages.
//!
//! This module is split into submodules for maintainability:
//! - `catalog`: Catalog loading and retry
//! - `player`: Transport controls and the playback ticker
//! - `likes`: Liked tracks and playlists
//! - `intents`: Feed reactions and other logged-only actions
//! - `artwork`: Background artwork loading
//! - `keyboard`: Keyboard shortcuts

mod artwork;
mod catalog;
mod intents;
mod keyboard;
mod likes;
mod player;

// Re-export all handler functions
pub use artwork::handle_artwork_loaded;
pub use catalog::{handle_catalog_loaded, load_catalog_task};
pub use intents::handle_intent;
pub use keyboard::handle_keyboard;
pub use likes::handle_likes;
pub use player::handle_player;
