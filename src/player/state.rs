//! Player state types.

use std::fmt;

/// Current playback status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No current track
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Repeat mode for the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    /// Wrap around the queue
    All,
    /// Replay the current track when it ends
    One,
}

impl RepeatMode {
    /// Next mode in the Off → All → One cycle.
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        })
    }
}

/// Identity of a playback session.
///
/// A session begins whenever playback starts or the track changes, and ends
/// on pause. Ticks carry the session they were scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Session(pub(crate) u64);

impl Session {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Result of delivering a tick to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale session, paused, or nothing loaded
    Ignored,
    /// Elapsed time advanced within the current track
    Advanced,
    /// The track ended and the next one started (or the same one, on repeat one)
    AutoAdvanced,
    /// The track ended with nothing to advance to
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_cycle() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn test_repeat_serde_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            repeat: RepeatMode,
        }
        let w: Wrapper = toml::from_str("repeat = \"one\"").unwrap();
        assert_eq!(w.repeat, RepeatMode::One);
    }
}
