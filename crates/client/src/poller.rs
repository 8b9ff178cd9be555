//! Fixed-interval background polling.
//!
//! The game refreshes chat, mail, and the leaderboard by polling rather than
//! holding a push channel open. [`Poller`] wraps a tokio interval task so the
//! UI layer only supplies the fetch closure.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A repeating background task on a fixed interval.
///
/// The task runs until [`Poller::stop`] is called or the poller is dropped.
#[derive(Debug)]
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a task that awaits `tick()` every `interval`.
    ///
    /// The first tick fires after one full interval, not immediately; callers
    /// that want fresh data at startup fetch once before spawning.
    pub fn spawn<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            // Consume the immediate first tick.
            timer.tick().await;
            loop {
                timer.tick().await;
                tick().await;
            }
        });
        Self { handle }
    }

    /// Stop polling. Safe to call more than once.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
