//! Call context carried through getters, setters, backends and loggers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation carrier passed to every secret operation
///
/// The core never blocks on a context itself. It hands it to the keyring
/// backend (which refuses to start a platform call once cancelled) and to
/// the logger. Clones share state, so cancelling any clone cancels all.
#[derive(Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, never-yet-cancelled context
    pub fn background() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}
