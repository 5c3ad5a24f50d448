//! User intents that have no backend yet.
//!
//! Feed reactions, playlist editing and account connection are accepted
//! and logged. Feed counts are display-only and never change.

use super::super::messages::Message;
use super::super::state::LoadedState;

pub fn handle_intent(s: &LoadedState, msg: Message) {
    match msg {
        Message::SkipTrack(id) => {
            tracing::info!(target: "ui::intent", track = %id, "Skip requested");
        }
        Message::AddToPlaylist(id) => {
            tracing::info!(target: "ui::intent", track = %id, "Add to playlist requested");
        }
        Message::FeedLike(id) => log_feed(s, "like", &id),
        Message::FeedComment(id) => log_feed(s, "comment", &id),
        Message::FeedShare(id) => log_feed(s, "share", &id),
        Message::CreatePlaylist => {
            tracing::info!(target: "ui::intent", "Create playlist requested");
        }
        Message::ConnectWallet => {
            tracing::info!(target: "ui::intent", "Connect wallet requested");
        }
        Message::SeeAllRecommended => {
            tracing::info!(
                target: "ui::intent",
                count = s.recommended.len(),
                "See all recommendations requested"
            );
        }
        _ => {}
    }
}

fn log_feed(s: &LoadedState, action: &str, id: &crate::model::FeedItemId) {
    match s.feed().iter().find(|item| &item.id == id) {
        Some(item) => tracing::info!(
            target: "ui::feed",
            item = %id,
            kind = %item.kind(),
            author = %item.author.display_name,
            "Feed {} requested",
            action
        ),
        None => tracing::debug!(target: "ui::feed", item = %id, "Feed {} on unknown item", action),
    }
}
