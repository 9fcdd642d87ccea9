//! Single-slot transient highlight with a deferred revert.

use std::time::Duration;
use tokio::task::JoinHandle;

pub const HIGHLIGHT_REVERT_MS: u64 = 1200;

/// Applies a highlight immediately and schedules one revert after a fixed
/// delay. A new request aborts any pending revert instead of stacking timers,
/// so at most one revert is outstanding.
#[derive(Default)]
pub struct HighlightSlot {
    pending: Option<JoinHandle<()>>,
}

impl HighlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash<A, R>(&mut self, apply: A, revert: R)
    where
        A: FnOnce(),
        R: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        apply();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(HIGHLIGHT_REVERT_MS)).await;
            revert();
        }));
    }

    /// Wait for the pending revert to run. One-shot commands call this so the
    /// flash is visible before the process exits.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
    }
}
