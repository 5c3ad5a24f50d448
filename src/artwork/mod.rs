//! Artwork loading with soft failure.
//!
//! Track artwork, playlist covers and user avatars are references that may
//! point at a local file or an http(s) URL. Loading is best-effort:
//!
//! 1. **Local files** are read with `tokio::fs`
//! 2. **Remote URLs** are downloaded with `reqwest` (can be disabled)
//! 3. The bytes are decoded with `image` into RGBA pixels
//!
//! Any failure marks the reference as failed in the [`ArtworkStore`] and the
//! UI falls back to a [`Placeholder`]. Failed references are not retried.

mod loader;
mod placeholder;
mod store;

pub use loader::{ArtworkLoader, ArtworkSource};
pub use placeholder::Placeholder;
pub use store::{ArtworkStatus, ArtworkStore};

use std::path::PathBuf;

/// Decoded artwork, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

impl Artwork {
    /// Decode PNG/JPEG/etc. bytes into RGBA pixels.
    pub fn decode(bytes: &[u8]) -> Result<Self, ArtworkError> {
        if bytes.is_empty() {
            return Err(ArtworkError::Empty);
        }
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

/// Why a piece of artwork could not be shown.
#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    #[error("Empty artwork reference")]
    EmptyReference,

    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Remote artwork disabled: {0}")]
    RemoteDisabled(String),

    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Artwork data is empty")]
    Empty,

    #[error("Failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Artwork task failed: {0}")]
    Task(String),
}
