// Stop signal module
// One-shot cancellation for the background refresher

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// One-shot cancellation signal for the refresher.
///
/// `trigger` is idempotent: the first call flips the flag and wakes any
/// waiter, later calls are no-ops. The flag backs up the `Notify` because
/// `notify_waiters` only reaches tasks already parked on `notified()`; a
/// waiter that registers late re-checks `is_triggered` instead.
pub struct StopSignal {
    notify: Notify,
    triggered: AtomicBool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            notify: Notify::new(),
            triggered: AtomicBool::new(false),
        }
    }

    /// Request cancellation. Safe to call any number of times.
    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Wait until the signal is triggered.
    ///
    /// Completes immediately when cancellation already happened, so callers
    /// can select on this every loop iteration without losing a wake that
    /// landed between iterations.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        // Register interest before checking the flag so a concurrent
        // trigger cannot slip between the check and the wait
        notified.as_mut().enable();
        if self.is_triggered() {
            return;
        }
        notified.await;
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
