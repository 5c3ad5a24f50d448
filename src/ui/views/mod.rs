//! View rendering functions for the UI components.
//!
//! This module is organized into submodules by concern:
//! - `layout`: Frame, header and bottom navigation
//! - `player`: Transport bar
//! - `discover`, `feed`, `playlists`, `profile`: One module per tab
//! - `components`: Cards, icon buttons, artwork and avatar stacks
//! - `loading`: Loading and error boundaries

mod components;
mod discover;
mod feed;
mod helpers;
mod layout;
pub mod loading;
mod player;
mod playlists;
mod profile;

pub use layout::loaded_view;
pub use loading::{error_view, loading_view};
