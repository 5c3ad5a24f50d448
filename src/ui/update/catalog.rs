//! Catalog loading handler.

use iced::Task;

use crate::artwork::ArtworkLoader;
use crate::catalog::{Catalog, CatalogSource};
use crate::config::Config;
use crate::error::ResultExt;

use super::super::messages::Message;
use super::super::state::{AppState, LoadedState};
use super::artwork::request_artwork;

/// Task that loads the catalog off the UI thread.
pub fn load_catalog_task(source: CatalogSource) -> Task<Message> {
    let label = source.label();
    tracing::info!(target: "catalog", source = %label, "Loading catalog");
    Task::perform(
        async move {
            Catalog::load(source)
                .await
                .with_context(format!("Failed to load {}", label))
                .map_err(|e| e.to_string())
        },
        Message::CatalogLoaded,
    )
}

/// Handle the catalog load result
pub fn handle_catalog_loaded(
    state: &mut AppState,
    config: &Config,
    loader: &ArtworkLoader,
    result: Result<Catalog, String>,
) -> Task<Message> {
    match result {
        Ok(catalog) => {
            tracing::info!(
                target: "catalog",
                tracks = catalog.tracks().len(),
                playlists = catalog.playlists().len(),
                feed = catalog.feed().len(),
                "Catalog loaded"
            );
            if catalog.is_empty() {
                tracing::info!(target: "catalog", "Catalog is empty, showing empty states");
            }
            let mut loaded = LoadedState::new(catalog, config, loader.clone());
            let refs = loaded.artwork_refs();
            let artwork = request_artwork(&mut loaded, refs);
            *state = AppState::Loaded(Box::new(loaded));
            artwork
        }
        Err(e) => {
            tracing::error!(target: "catalog", "Failed to load catalog: {}", e);
            *state = AppState::Error(e);
            Task::none()
        }
    }
}
