//! Cooperative cancellation of a running search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag.
///
/// The host keeps one clone and passes another to the search, which checks
/// [`is_done`](Context::is_done) after every round. Once cancelled a context
/// stays cancelled; use a fresh one for the next run.
#[derive(Clone, Debug, Default)]
pub struct Context(Arc<AtomicBool>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Ask every holder of this context to stop.
    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
