//! Play queue management.
//!
//! Navigation always wraps: the track after the last is the first, and the
//! track before the first is the last. With shuffle enabled the walk follows
//! a shuffle order (a permutation of the queue) instead of queue order.

use rand::seq::SliceRandom;

use crate::model::{Track, TrackId};

/// The play queue with current position tracking.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    /// All tracks in the queue
    items: Vec<Track>,
    /// Current position in the queue (None = not started)
    position: Option<usize>,
    /// Shuffle mode enabled
    shuffle: bool,
    /// Shuffled indices (maps shuffle position -> item index)
    shuffle_order: Vec<usize>,
    /// Current position in shuffle_order when shuffling
    shuffle_position: usize,
}

impl PlayQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue from tracks, not yet started.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            items: tracks,
            ..Self::default()
        }
    }

    /// Check if queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get queue length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Replace the contents, keeping the shuffle setting.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.items = tracks;
        self.position = None;
        if self.shuffle {
            self.generate_shuffle_order();
        } else {
            self.shuffle_order.clear();
            self.shuffle_position = 0;
        }
    }

    /// Get current position (index into items).
    pub fn current_index(&self) -> Option<usize> {
        self.position.filter(|&p| p < self.items.len())
    }

    /// Get current track.
    pub fn current(&self) -> Option<&Track> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    /// Index of the first queue entry with this id.
    pub fn find(&self, id: &TrackId) -> Option<usize> {
        self.items.iter().position(|t| &t.id == id)
    }

    /// Advance to the next track (wrapping) and return it.
    pub fn skip_forward(&mut self) -> Option<&Track> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        if self.shuffle && self.shuffle_order.len() == len {
            self.shuffle_position = match self.position {
                Some(_) => (self.shuffle_position + 1) % len,
                None => 0,
            };
            self.position = Some(self.shuffle_order[self.shuffle_position]);
        } else {
            self.position = Some(match self.position {
                Some(i) => (i + 1) % len,
                None => 0,
            });
        }

        self.current()
    }

    /// Go to the previous track (wrapping) and return it.
    pub fn previous(&mut self) -> Option<&Track> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        if self.shuffle && self.shuffle_order.len() == len {
            self.shuffle_position = match self.position {
                Some(_) if self.shuffle_position == 0 => len - 1,
                Some(_) => self.shuffle_position - 1,
                None => len - 1,
            };
            self.position = Some(self.shuffle_order[self.shuffle_position]);
        } else {
            self.position = Some(match self.position {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            });
        }

        self.current()
    }

    /// Jump to a specific position.
    pub fn jump_to(&mut self, index: usize) -> Option<&Track> {
        if index >= self.items.len() {
            return None;
        }
        self.position = Some(index);
        // Keep shuffle position in step
        if self.shuffle
            && let Some(shuffle_pos) = self.shuffle_order.iter().position(|&i| i == index)
        {
            self.shuffle_position = shuffle_pos;
        }
        self.current()
    }

    /// Set shuffle mode.
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
        if enabled {
            self.generate_shuffle_order();
        } else {
            self.shuffle_order.clear();
            self.shuffle_position = 0;
        }
    }

    /// Get shuffle mode.
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Generate a new shuffle order, keeping the current track first.
    fn generate_shuffle_order(&mut self) {
        let mut indices: Vec<usize> = (0..self.items.len()).collect();
        indices.shuffle(&mut rand::rng());

        if let Some(current) = self.current_index()
            && let Some(pos) = indices.iter().position(|&i| i == current)
        {
            indices.remove(pos);
            indices.insert(0, current);
        }

        self.shuffle_position = 0;
        self.shuffle_order = indices;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_tracks;
    use std::collections::HashSet;

    fn queue_of(n: usize) -> PlayQueue {
        PlayQueue::from_tracks(mock_tracks(n))
    }

    fn id(track: Option<&Track>) -> String {
        track.map(|t| t.id.0.clone()).unwrap_or_default()
    }

    #[test]
    fn test_queue_basic() {
        let mut queue = queue_of(3);
        assert_eq!(queue.len(), 3);
        assert!(queue.current().is_none()); // Not started yet

        // First skip_forward() starts playback
        assert_eq!(id(queue.skip_forward()), "1");
        assert_eq!(queue.current_index(), Some(0));
        assert_eq!(id(queue.skip_forward()), "2");
    }

    #[test]
    fn test_skip_forward_wraps() {
        let mut queue = queue_of(2);
        queue.jump_to(1);
        assert_eq!(id(queue.skip_forward()), "1");
        assert_eq!(queue.current_index(), Some(0));
    }

    #[test]
    fn test_previous_wraps() {
        let mut queue = queue_of(3);
        queue.jump_to(0);
        assert_eq!(id(queue.previous()), "3");
        assert_eq!(queue.current_index(), Some(2));
    }

    #[test]
    fn test_empty_queue_navigation() {
        let mut queue = PlayQueue::new();
        assert!(queue.skip_forward().is_none());
        assert!(queue.previous().is_none());
        assert!(queue.jump_to(0).is_none());
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        let mut queue = queue_of(1);
        queue.jump_to(0);
        assert_eq!(id(queue.skip_forward()), "1");
        assert_eq!(id(queue.previous()), "1");
    }

    #[test]
    fn test_find() {
        let queue = queue_of(3);
        assert_eq!(queue.find(&TrackId::from("2")), Some(1));
        assert_eq!(queue.find(&TrackId::from("9")), None);
    }

    #[test]
    fn test_shuffle_visits_all_tracks() {
        let mut queue = queue_of(10);
        queue.set_shuffle(true);

        let mut visited = HashSet::new();
        for _ in 0..10 {
            if let Some(track) = queue.skip_forward() {
                visited.insert(track.id.clone());
            }
        }
        assert_eq!(visited.len(), 10);
    }

    #[test]
    fn test_shuffle_keeps_current_first() {
        let mut queue = queue_of(3);
        queue.jump_to(1);

        queue.set_shuffle(true);
        assert_eq!(queue.current_index(), Some(1));
        assert_eq!(queue.shuffle_order[0], 1);
    }

    #[test]
    fn test_shuffle_previous_returns() {
        let mut queue = queue_of(5);
        queue.jump_to(2);
        queue.set_shuffle(true);

        let first = id(queue.skip_forward());
        let second = id(queue.skip_forward());
        assert_eq!(id(queue.previous()), first);
        assert_eq!(id(queue.skip_forward()), second);
    }

    #[test]
    fn test_shuffle_disable_clears_order() {
        let mut queue = queue_of(2);
        queue.set_shuffle(true);
        assert!(!queue.shuffle_order.is_empty());

        queue.set_shuffle(false);
        assert!(queue.shuffle_order.is_empty());
        assert!(!queue.shuffle());
    }

    #[test]
    fn test_jump_to_updates_shuffle_position() {
        let mut queue = queue_of(3);
        queue.set_shuffle(true);
        queue.skip_forward();

        queue.jump_to(2);
        assert_eq!(queue.current_index(), Some(2));
        assert_eq!(queue.shuffle_order[queue.shuffle_position], 2);
    }

    #[test]
    fn test_replace_resets_position() {
        let mut queue = queue_of(3);
        queue.jump_to(2);
        queue.replace(mock_tracks(2));
        assert_eq!(queue.len(), 2);
        assert!(queue.current().is_none());
    }
}
