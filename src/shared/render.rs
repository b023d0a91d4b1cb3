// src/shared/render.rs
use std::sync::Mutex;

//
// ──────────────────────────────────────────────────────────
// Re-render requests
// ──────────────────────────────────────────────────────────
// The rendering layer redraws from ContentStore snapshots; the sync
// core only signals which surface went stale.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// The project table.
    Projects,
    /// The portfolio forms (all four subsections).
    Portfolio,
}

pub trait RenderSink: Send + Sync {
    fn request_render(&self, scope: RenderScope);
}

/// Queueing sink for shells that coalesce redraws on their next tick,
/// and for tests.
#[derive(Debug, Default)]
pub struct RenderQueue {
    queue: Mutex<Vec<RenderScope>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<RenderScope> {
        std::mem::take(&mut *self.queue.lock().expect("render queue lock poisoned"))
    }
}

impl RenderSink for RenderQueue {
    fn request_render(&self, scope: RenderScope) {
        self.queue
            .lock()
            .expect("render queue lock poisoned")
            .push(scope);
    }
}
