//! Liveness flags for activation cycles.
//!
//! Every activation mints a fresh [`ActivationToken`]. The fetch started by
//! that activation keeps a clone and checks it before touching any state;
//! deactivation revokes the token, so a response that arrives later has no
//! effect. The request itself is not cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag saying whether the activation that created it is still live.
#[derive(Clone, Debug)]
pub struct ActivationToken {
    live: Arc<AtomicBool>,
    cycle: u64,
}

impl ActivationToken {
    pub(crate) fn new(cycle: u64) -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
            cycle,
        }
    }

    /// Whether the originating activation is still live.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Activation cycle this token belongs to, counting from 1.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Revoke the token. Every clone observes the change. Idempotent.
    pub(crate) fn revoke(&self) {
        self.live.store(false, Ordering::Release);
    }
}
