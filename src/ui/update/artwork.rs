//! Background artwork loading.
//!
//! Every reference is loaded at most once. Failures are logged at debug
//! level and the views keep showing the placeholder.

use iced::Task;
use iced::widget::image;

use crate::artwork::{Artwork, ArtworkStatus};

use super::super::messages::Message;
use super::super::state::LoadedState;

/// Start loads for every reference not seen before.
pub fn request_artwork(s: &mut LoadedState, references: Vec<String>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = references
        .into_iter()
        .filter(|r| s.artwork.request(r))
        .map(|reference| {
            let loader = s.loader.clone();
            let key = reference.clone();
            Task::perform(
                async move { loader.load(&reference).await.map_err(|e| e.to_string()) },
                move |result| Message::ArtworkLoaded(key.clone(), result),
            )
        })
        .collect();

    if !tasks.is_empty() {
        tracing::debug!(
            target: "artwork",
            count = tasks.len(),
            known = s.artwork.len(),
            "Requesting artwork"
        );
    }
    Task::batch(tasks)
}

/// Record a finished load.
pub fn handle_artwork_loaded(s: &mut LoadedState, reference: String, result: Result<Artwork, String>) {
    if !matches!(s.artwork.status(&reference), Some(ArtworkStatus::Loading)) {
        tracing::trace!(target: "artwork", reference = %reference, "Ignoring unrequested artwork");
        return;
    }
    match result {
        Ok(art) => {
            let handle = image::Handle::from_rgba(art.width, art.height, art.pixels);
            s.artwork.resolve(&reference, Some(handle));
        }
        Err(e) => {
            tracing::debug!(target: "artwork", reference = %reference, "Artwork unavailable: {}", e);
            s.artwork.resolve(&reference, None);
        }
    }
}
