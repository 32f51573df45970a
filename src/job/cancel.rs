use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot cancellation signal shared between the job slot and a running loop.
///
/// Clones share the same underlying flag. Once closed, a token stays closed.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    closed: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the token. Returns `true` only for the call that performed the
    /// `open -> closed` transition; every later call is a no-op.
    pub fn close(&self) -> bool {
        self.closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Non-blocking poll of the current state.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
