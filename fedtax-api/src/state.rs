//! Shared server state.

use std::sync::{Arc, Mutex, MutexGuard};

use fedtax_core::Taxpayer;

/// State cloned into every handler: one taxpayer session per process.
///
/// The mutex serializes handlers so concurrent requests cannot corrupt
/// the entry lists. There is no per-user isolation; every client talks
/// to the same session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    session: Arc<Mutex<Taxpayer>>,
}

impl AppState {
    /// State holding a fresh, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the session for the duration of one handler.
    ///
    /// Panics if a previous handler panicked while holding the lock.
    pub fn session(&self) -> MutexGuard<'_, Taxpayer> {
        self.session.lock().unwrap()
    }
}
