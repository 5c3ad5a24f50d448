//! Simulated playback transport with a play queue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     UI update loop (iced)                       │
//! │   Play / Pause / Skip / Seek messages mutate the Transport      │
//! └────────────────────────────┬────────────────────────────────────┘
//!                              │ Transport::session()
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Ticker subscription (1 Hz)                      │
//! │     keyed by session; dropped when the session changes          │
//! └────────────────────────────┬────────────────────────────────────┘
//!                              │ Tick(session)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Transport::tick                            │
//! │   stale sessions ignored; auto-advance at end of track          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod queue;
mod state;
mod transport;

pub use queue::PlayQueue;
pub use state::{PlaybackStatus, RepeatMode, Session, TickOutcome};
pub use transport::Transport;
