use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64};
use tokio::sync::Notify;

/// Callable handed to the service; invoked after every state-changing mutation.
pub type RestartHook = Arc<dyn Fn() + Send + Sync>;

pub struct RestartSignal {
    pub(crate) pending: AtomicBool,
    pub(crate) requested: AtomicU64,
    pub(crate) notify: Notify,
}
