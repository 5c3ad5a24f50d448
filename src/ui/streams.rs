//! Async streams for background work.

use std::time::Duration;

use futures::Stream;

use super::messages::Message;
use crate::player::Session;

/// Simulated playback advances one second per tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Ticker for one playback session.
///
/// The subscription is keyed by the session id, so iced drops this stream as
/// soon as the transport moves to another session.
pub fn ticker_stream(session: Session) -> impl Stream<Item = Message> {
    futures::stream::unfold(session, |session| async move {
        tokio::time::sleep(TICK_INTERVAL).await;
        Some((Message::PlayerTick(session), session))
    })
}
