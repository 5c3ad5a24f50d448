//! Per-reference artwork status.

use std::collections::HashMap;

/// Load status of one artwork reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtworkStatus<T> {
    Loading,
    Ready(T),
    /// Terminal: rendered as a placeholder and never retried
    Failed,
}

/// Tracks which references are loading, loaded, or failed.
///
/// Generic over the loaded value so the UI can keep renderer handles here
/// while tests use plain values.
#[derive(Debug, Clone)]
pub struct ArtworkStore<T> {
    entries: HashMap<String, ArtworkStatus<T>>,
}

impl<T> Default for ArtworkStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> ArtworkStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a reference as loading.
    ///
    /// Returns true only the first time a reference is seen, meaning the
    /// caller should start a load for it.
    pub fn request(&mut self, reference: &str) -> bool {
        if reference.trim().is_empty() || self.entries.contains_key(reference) {
            return false;
        }
        self.entries.insert(reference.to_string(), ArtworkStatus::Loading);
        true
    }

    /// Record the outcome of a load.
    pub fn resolve(&mut self, reference: &str, loaded: Option<T>) {
        let status = match loaded {
            Some(value) => ArtworkStatus::Ready(value),
            None => ArtworkStatus::Failed,
        };
        self.entries.insert(reference.to_string(), status);
    }

    pub fn status(&self, reference: &str) -> Option<&ArtworkStatus<T>> {
        self.entries.get(reference)
    }

    /// The loaded value, if ready.
    pub fn get(&self, reference: &str) -> Option<&T> {
        match self.entries.get(reference) {
            Some(ArtworkStatus::Ready(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self, reference: &str) -> bool {
        matches!(self.entries.get(reference), Some(ArtworkStatus::Failed))
    }

    /// Number of references (any status).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_once() {
        let mut store: ArtworkStore<u8> = ArtworkStore::new();
        assert!(store.request("a.png"));
        assert!(!store.request("a.png"));
        assert_eq!(store.status("a.png"), Some(&ArtworkStatus::Loading));
        assert!(store.get("a.png").is_none());
    }

    #[test]
    fn test_empty_reference_never_requested() {
        let mut store: ArtworkStore<u8> = ArtworkStore::new();
        assert!(!store.request(""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_ready() {
        let mut store = ArtworkStore::new();
        store.request("a.png");
        store.resolve("a.png", Some(7u8));
        assert_eq!(store.get("a.png"), Some(&7));
        assert!(!store.is_failed("a.png"));
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut store: ArtworkStore<u8> = ArtworkStore::new();
        store.request("broken.png");
        store.resolve("broken.png", None);
        assert!(store.is_failed("broken.png"));
        // Not retried
        assert!(!store.request("broken.png"));
        assert!(store.is_failed("broken.png"));
    }
}
