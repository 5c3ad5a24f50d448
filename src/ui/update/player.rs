//! Transport control handlers.
//!
//! # Control Flow
//!
//! All player commands flow through `handle_player()` which delegates to
//! internal helper functions. This keeps behavior identical regardless of
//! entry point (transport bar, track card, or keyboard shortcut).

use iced::Task;

use crate::config::{self, Config};
use crate::model::{PlaylistId, Track};
use crate::player::{Session, TickOutcome};

use super::super::messages::Message;
use super::super::state::LoadedState;

// ============================================================================
// Main message handler
// ============================================================================

/// Handle player-related messages.
pub fn handle_player(s: &mut LoadedState, config: &mut Config, msg: Message) -> Task<Message> {
    match msg {
        Message::PlayerPlayTrack(track) => do_play_track(s, track),
        Message::PlayerPlayPlaylist(id) => do_play_playlist(s, &id),
        Message::PlayerPlayAll(id) => do_play_all(s, &id),
        Message::PlayerToggle => do_toggle(s),
        Message::PlayerNext => do_next(s),
        Message::PlayerPrevious => do_previous(s),

        Message::PlayerSeekPreview(pos) => {
            s.seek_preview = Some(pos);
        }
        Message::PlayerSeekRelease => {
            if let Some(pos) = s.seek_preview.take() {
                do_seek(s, pos);
            }
        }

        Message::PlayerTick(session) => do_tick(s, session),

        Message::PlayerToggleShuffle => {
            s.transport.toggle_shuffle();
            tracing::debug!(target: "ui::player", shuffle = s.transport.shuffle(), "Shuffle toggled");
            return persist_modes(s, config);
        }
        Message::PlayerCycleRepeat => {
            s.transport.cycle_repeat();
            tracing::debug!(target: "ui::player", repeat = %s.transport.repeat(), "Repeat cycled");
            return persist_modes(s, config);
        }

        _ => {}
    }
    Task::none()
}

// ============================================================================
// Internal helper functions - each action implemented once
// ============================================================================

fn do_play_track(s: &mut LoadedState, track: Track) {
    tracing::info!(target: "ui::player", id = %track.id, "Playing: {} - {}", track.artist, track.title);
    s.seek_preview = None;
    s.transport.play(track);
}

/// Play the first resolvable track of a playlist.
fn do_play_playlist(s: &mut LoadedState, id: &PlaylistId) {
    let Some(first) = playlist_tracks(s, id).into_iter().next() else {
        tracing::debug!(target: "ui::player", playlist = %id, "Playlist has no playable tracks");
        return;
    };
    do_play_track(s, first);
}

/// Replace the queue with a playlist and start from its first track.
fn do_play_all(s: &mut LoadedState, id: &PlaylistId) {
    let tracks = playlist_tracks(s, id);
    let count = tracks.len();
    s.seek_preview = None;
    if s.transport.load_queue(tracks, 0) {
        tracing::info!(target: "ui::player", playlist = %id, count, "Queued playlist");
    } else {
        tracing::debug!(target: "ui::player", playlist = %id, "Playlist has no playable tracks");
    }
}

fn do_toggle(s: &mut LoadedState) {
    s.transport.toggle();
    tracing::debug!(target: "ui::player", status = ?s.transport.status(), "Toggled playback");
}

fn do_next(s: &mut LoadedState) {
    s.seek_preview = None;
    if s.transport.skip_next() {
        log_track_changed(s, "Skipped forward");
    }
}

fn do_previous(s: &mut LoadedState) {
    s.seek_preview = None;
    if s.transport.skip_previous() {
        log_track_changed(s, "Skipped back");
    }
}

/// Seek to position (0.0 - 1.0).
fn do_seek(s: &mut LoadedState, position: f32) {
    s.transport.seek(position);
    tracing::debug!(target: "ui::player", elapsed = s.transport.elapsed(), "Seeked");
}

fn do_tick(s: &mut LoadedState, session: Session) {
    match s.transport.tick(session) {
        TickOutcome::AutoAdvanced => {
            // A drag started on the old track must not seek the new one
            s.seek_preview = None;
            log_track_changed(s, "Track ended, advancing");
        }
        TickOutcome::Finished => {
            s.seek_preview = None;
            tracing::info!(target: "ui::player", "Queue finished");
        }
        TickOutcome::Ignored => {
            tracing::trace!(target: "ui::player", session = session.id(), "Ignored tick");
        }
        TickOutcome::Advanced => {}
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn playlist_tracks(s: &LoadedState, id: &PlaylistId) -> Vec<Track> {
    s.catalog
        .playlist(id)
        .map(|p| s.catalog.resolve_playlist_tracks(p))
        .unwrap_or_default()
}

fn log_track_changed(s: &LoadedState, what: &str) {
    if let Some(track) = s.transport.current() {
        tracing::info!(target: "ui::player", id = %track.id, "{}: {} - {}", what, track.artist, track.title);
    }
}

/// Remember shuffle and repeat for the next launch.
///
/// Only the `[player]` section is written back; the in-memory config may
/// carry credentials from the environment.
fn persist_modes(s: &LoadedState, config: &mut Config) -> Task<Message> {
    config.player.shuffle = s.transport.shuffle();
    config.player.repeat = s.transport.repeat();
    let player = config.player.clone();
    Task::perform(
        async move { config::save_player_async(player).await.map_err(|e| e.to_string()) },
        Message::ConfigSaved,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::ArtworkLoader;
    use crate::model::TrackId;
    use crate::player::RepeatMode;
    use crate::test_utils::{mock_catalog, mock_track};

    fn loaded() -> LoadedState {
        LoadedState::new(mock_catalog(3), &Config::default(), ArtworkLoader::local_only())
    }

    fn send(s: &mut LoadedState, msg: Message) {
        // Config-saving messages are not exercised here
        let mut config = Config::default();
        let _ = handle_player(s, &mut config, msg);
    }

    #[test]
    fn test_play_track_starts_session() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayTrack(mock_track("2")));
        assert!(s.transport.is_playing());
        assert_eq!(s.transport.current().map(|t| t.id.clone()), Some(TrackId::from("2")));
        assert!(s.transport.session().is_some());
    }

    #[test]
    fn test_play_playlist_plays_first_resolved() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayPlaylist(PlaylistId::from("p1")));
        assert_eq!(s.transport.current().map(|t| t.id.clone()), Some(TrackId::from("1")));
    }

    #[test]
    fn test_play_unknown_playlist_is_noop() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayPlaylist(PlaylistId::from("missing")));
        send(&mut s, Message::PlayerPlayAll(PlaylistId::from("missing")));
        assert!(s.transport.current().is_none());
        assert!(!s.transport.is_playing());
    }

    #[test]
    fn test_play_all_replaces_queue() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayAll(PlaylistId::from("p1")));
        assert_eq!(s.transport.queue().len(), 3);
        assert!(s.transport.is_playing());
    }

    #[test]
    fn test_seek_applies_on_release() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayTrack(mock_track("1")));
        send(&mut s, Message::PlayerSeekPreview(0.5));
        assert_eq!(s.transport.elapsed(), 0);
        send(&mut s, Message::PlayerSeekRelease);
        assert_eq!(s.transport.elapsed(), 90);
        assert!(s.seek_preview.is_none());
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayTrack(mock_track("1")));
        let old = s.transport.session().unwrap();
        send(&mut s, Message::PlayerNext);
        send(&mut s, Message::PlayerTick(old));
        assert_eq!(s.transport.elapsed(), 0);
    }

    #[test]
    fn test_toggle_pauses() {
        let mut s = loaded();
        send(&mut s, Message::PlayerPlayTrack(mock_track("1")));
        send(&mut s, Message::PlayerToggle);
        assert!(!s.transport.is_playing());
        assert!(s.transport.session().is_none());
    }

    #[test]
    fn test_auto_advance_drops_pending_seek() {
        let mut s = loaded();
        let short = Track {
            duration: Some(2),
            ..mock_track("1")
        };
        assert!(s.transport.load_queue(vec![short, mock_track("2")], 0));
        send(&mut s, Message::PlayerSeekPreview(0.9));

        for _ in 0..2 {
            let session = s.transport.session().unwrap();
            send(&mut s, Message::PlayerTick(session));
        }
        assert_eq!(s.transport.current().map(|t| t.id.clone()), Some(TrackId::from("2")));
        assert!(s.seek_preview.is_none());

        send(&mut s, Message::PlayerSeekRelease);
        assert_eq!(s.transport.elapsed(), 0);
    }

    #[test]
    fn test_modes_written_to_config() {
        let mut s = loaded();
        let mut config = Config::default();
        // The returned save task is dropped without running
        let _ = handle_player(&mut s, &mut config, Message::PlayerCycleRepeat);
        let _ = handle_player(&mut s, &mut config, Message::PlayerToggleShuffle);
        assert_eq!(config.player.repeat, RepeatMode::All);
        assert!(config.player.shuffle);
    }
}
