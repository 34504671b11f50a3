use crate::ssl::structs::restart_signal::{RestartHook, RestartSignal};
use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Notify;

impl std::fmt::Debug for RestartSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestartSignal")
            .field("pending", &self.is_pending())
            .field("requested", &self.requested_count())
            .finish()
    }
}

impl Default for RestartSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RestartSignal {
    pub fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            requested: AtomicU64::new(0),
            notify: Notify::new(),
        }
    }

    /// Requests a listener restart. Does nothing while a previous request
    /// has not been acknowledged yet.
    pub fn trigger(&self) {
        if self.pending.swap(true, Ordering::AcqRel) {
            debug!("[RESTART] Restart already pending, ignoring request");
            return;
        }
        self.requested.fetch_add(1, Ordering::Relaxed);
        info!("[RESTART] Listener restart requested");
        self.notify.notify_one();
    }

    /// Resolves once a restart is pending.
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            if self.pending.load(Ordering::Acquire) {
                return;
            }
            notified.await;
        }
    }

    /// Called by the listener owner once the listeners were rebuilt.
    pub fn acknowledge(&self) {
        self.pending.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn requested_count(&self) -> u64 {
        self.requested.load(Ordering::Relaxed)
    }

    pub fn hook(self: &Arc<Self>) -> RestartHook {
        let signal = Arc::clone(self);
        Arc::new(move || signal.trigger())
    }
}
