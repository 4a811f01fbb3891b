//! Shared run flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop signal shared by all loops
///
/// Starts running. Every loop checks [`is_running`](Self::is_running)
/// once per iteration; any holder of a clone may [`stop`](Self::stop) the
/// run, after which all loops wind down on their next check.
#[derive(Clone, Debug)]
pub struct RunState {
    running: Arc<AtomicBool>,
}

impl RunState {
    /// Create a new run state in the running position
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the simulation should keep running
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Signal every loop to stop
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
