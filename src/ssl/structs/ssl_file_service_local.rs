use std::path::PathBuf;
use std::sync::atomic::AtomicU64;

/// Keeps the managed certificate files under `<root>/certs`.
#[derive(Debug)]
pub struct SslFileServiceLocal {
    pub(crate) root: PathBuf,
    pub(crate) sequence: AtomicU64,
}
