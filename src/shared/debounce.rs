// src/shared/debounce.rs
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

//
// ──────────────────────────────────────────────────────────
// Debouncer
// ──────────────────────────────────────────────────────────
// Coalesces bursts of edits into one commit: each call re-arms the
// timer and cancels the previous pending commit. A commit already past
// its delay may still race a fresh edit, so commit callbacks must be
// idempotent.
//

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `commit` to run after the configured delay, replacing
    /// any commit still waiting.
    pub fn call<F, Fut>(&self, commit: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit().await;
        });

        let mut pending = self.pending.lock().expect("debouncer lock poisoned");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drop whatever commit is still waiting without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().expect("debouncer lock poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }
}
