use std::time::Duration;

use async_trait::async_trait;

/// Source of wall-clock time and suspension for the chat session.
///
/// The browser implements this with `Date.now()` and timer futures; tests
/// implement it over tokio's paused clock.
#[async_trait(?Send)]
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    async fn sleep(&self, duration: Duration);
}
