//! Simulated playback transport.
//!
//! No audio is decoded. The transport tracks which track is current, whether
//! it is playing, and how many seconds have elapsed. Elapsed time advances
//! only through [`Transport::tick`], which the UI drives once per second.
//!
//! # Sessions
//!
//! Every start of playback and every track change begins a new [`Session`];
//! pausing ends it. The UI keys its ticker on the live session, so changing
//! session drops the old ticker, and a tick already in flight for an old
//! session is rejected here.

use super::queue::PlayQueue;
use super::state::{PlaybackStatus, RepeatMode, Session, TickOutcome};
use crate::model::Track;

#[derive(Debug, Clone, Default)]
pub struct Transport {
    queue: PlayQueue,
    current: Option<Track>,
    playing: bool,
    /// Seconds into the current track
    elapsed: u32,
    repeat: RepeatMode,
    session: u64,
}

impl Transport {
    /// Create a stopped transport over a queue of tracks.
    pub fn new(queue: Vec<Track>) -> Self {
        Self {
            queue: PlayQueue::from_tracks(queue),
            ..Self::default()
        }
    }

    /// Apply startup shuffle and repeat preferences.
    pub fn with_modes(mut self, shuffle: bool, repeat: RepeatMode) -> Self {
        self.queue.set_shuffle(shuffle);
        self.repeat = repeat;
        self
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.queue.shuffle()
    }

    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.current, self.playing) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    /// Known duration of the current track in seconds.
    pub fn duration(&self) -> Option<u32> {
        self.current.as_ref().and_then(Track::known_duration)
    }

    /// The live session, present only while playing a track.
    pub fn session(&self) -> Option<Session> {
        (self.playing && self.current.is_some()).then_some(Session(self.session))
    }

    /// Fraction of the current track played, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.duration() {
            Some(d) => (self.elapsed as f32 / d as f32).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// Play a track from the start.
    ///
    /// If the track is in the queue the queue position follows it, so skips
    /// continue from there. Otherwise the queue position is left alone.
    pub fn play(&mut self, track: Track) {
        let already_there = self.queue.current().is_some_and(|t| t.id == track.id);
        if !already_there && let Some(index) = self.queue.find(&track.id) {
            self.queue.jump_to(index);
        }
        self.start(track);
    }

    /// Replace the queue and play `tracks[start]`.
    ///
    /// Returns false (and changes nothing) when `tracks` is empty.
    pub fn load_queue(&mut self, tracks: Vec<Track>, start: usize) -> bool {
        if tracks.is_empty() {
            return false;
        }
        let start = start.min(tracks.len() - 1);
        self.queue.replace(tracks);
        if let Some(track) = self.queue.jump_to(start).cloned() {
            self.queue.set_shuffle(self.queue.shuffle());
            self.start(track);
        }
        true
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.next_session();
        }
    }

    /// Resume the current track. No-op without one.
    pub fn resume(&mut self) {
        if !self.playing && self.current.is_some() {
            self.playing = true;
            self.next_session();
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Advance elapsed time by one second.
    pub fn tick(&mut self, session: Session) -> TickOutcome {
        if self.session() != Some(session) {
            return TickOutcome::Ignored;
        }

        self.elapsed = self.elapsed.saturating_add(1);
        let Some(duration) = self.duration() else {
            return TickOutcome::Advanced;
        };
        if self.elapsed < duration {
            return TickOutcome::Advanced;
        }

        if self.repeat == RepeatMode::One {
            self.elapsed = 0;
            return TickOutcome::AutoAdvanced;
        }
        if self.skip_next() {
            TickOutcome::AutoAdvanced
        } else {
            self.elapsed = 0;
            self.playing = false;
            self.next_session();
            TickOutcome::Finished
        }
    }

    /// Jump to a fraction of the current track. No-op when the duration is unknown.
    pub fn seek(&mut self, fraction: f32) {
        let Some(duration) = self.duration() else {
            return;
        };
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.elapsed = ((fraction * duration as f32).floor() as u32).min(duration);
    }

    /// Play the next queue entry, wrapping. Returns false on an empty queue.
    pub fn skip_next(&mut self) -> bool {
        match self.queue.skip_forward().cloned() {
            Some(track) => {
                self.start(track);
                true
            }
            None => false,
        }
    }

    /// Play the previous queue entry, wrapping. Returns false on an empty queue.
    pub fn skip_previous(&mut self) -> bool {
        match self.queue.previous().cloned() {
            Some(track) => {
                self.start(track);
                true
            }
            None => false,
        }
    }

    pub fn toggle_shuffle(&mut self) {
        let enabled = !self.queue.shuffle();
        self.queue.set_shuffle(enabled);
    }

    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
    }

    fn start(&mut self, track: Track) {
        self.current = Some(track);
        self.playing = true;
        self.elapsed = 0;
        self.next_session();
    }

    fn next_session(&mut self) {
        self.session = self.session.wrapping_add(1);
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::mock_tracks;
    use proptest::prelude::*;

    proptest! {
        /// Skipping forward then back returns to the same queue position
        #[test]
        fn next_then_previous_is_identity(
            len in 1usize..12,
            start in 0usize..12,
            shuffle in any::<bool>(),
        ) {
            let tracks = mock_tracks(len);
            let mut t = Transport::new(Vec::new()).with_modes(shuffle, RepeatMode::Off);
            t.load_queue(tracks, start);

            let before = t.queue().current_index();
            t.skip_next();
            t.skip_previous();
            prop_assert_eq!(t.queue().current_index(), before);

            t.skip_previous();
            t.skip_next();
            prop_assert_eq!(t.queue().current_index(), before);
        }

        /// A track of duration d auto-advances exactly once after d ticks
        #[test]
        fn exactly_one_auto_advance(duration in 1u32..400, len in 1usize..6) {
            let mut tracks = mock_tracks(len);
            for track in &mut tracks {
                track.duration = Some(duration);
            }
            let mut t = Transport::new(tracks.clone());
            t.play(tracks[0].clone());

            let mut advances = 0;
            for _ in 0..duration {
                let session = t.session().unwrap();
                if t.tick(session) == TickOutcome::AutoAdvanced {
                    advances += 1;
                }
            }
            prop_assert_eq!(advances, 1);
            prop_assert_eq!(t.elapsed(), 0);
        }

        /// Progress stays within [0, 1] whatever the seeks and ticks
        #[test]
        fn progress_is_bounded(
            fractions in prop::collection::vec(-2.0f32..3.0, 0..10),
            ticks in 0usize..50,
        ) {
            let mut t = Transport::new(mock_tracks(2));
            t.skip_next();
            for f in fractions {
                t.seek(f);
                prop_assert!((0.0..=1.0).contains(&t.progress()));
            }
            for _ in 0..ticks {
                if let Some(session) = t.session() {
                    t.tick(session);
                }
                prop_assert!((0.0..=1.0).contains(&t.progress()));
            }
        }

        /// Seeking sets elapsed to floor(fraction * duration)
        #[test]
        fn seek_floors(fraction in 0.0f32..=1.0, duration in 1u32..3600) {
            let mut tracks = mock_tracks(1);
            tracks[0].duration = Some(duration);
            let mut t = Transport::new(tracks.clone());
            t.play(tracks[0].clone());
            t.seek(fraction);
            prop_assert_eq!(t.elapsed(), (fraction * duration as f32).floor() as u32);
        }
    }
}
