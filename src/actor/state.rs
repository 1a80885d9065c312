//! Lifecycle and termination status shared between handles and the worker.

use std::sync::atomic::{AtomicI32, AtomicU8, Ordering};

/// Where an active object is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Lifecycle {
    /// Accepting and executing work.
    Running = 0,
    /// `kill` was called; the worker has not yet observed it.
    Terminating = 1,
    /// The worker thread has exited. Final.
    Terminated = 2,
}

impl Lifecycle {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Running,
            1 => Self::Terminating,
            _ => Self::Terminated,
        }
    }
}

/// State visible to every handle of one object.
#[derive(Debug)]
pub(crate) struct Shared {
    identity: String,
    status: AtomicI32,
    lifecycle: AtomicU8,
}

impl Shared {
    pub(crate) const fn new(identity: String) -> Self {
        Self {
            identity,
            status: AtomicI32::new(0),
            lifecycle: AtomicU8::new(Lifecycle::Running as u8),
        }
    }

    pub(crate) fn identity(&self) -> &str {
        &self.identity
    }

    pub(crate) fn status(&self) -> i32 {
        self.status.load(Ordering::Acquire)
    }

    pub(crate) fn record_status(&self, status: i32) {
        self.status.store(status, Ordering::Release);
    }

    pub(crate) fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_u8(self.lifecycle.load(Ordering::Acquire))
    }

    pub(crate) fn is_running(&self) -> bool {
        self.lifecycle() == Lifecycle::Running
    }

    /// Running -> Terminating. Returns false if already past Running.
    pub(crate) fn begin_termination(&self) -> bool {
        self.lifecycle
            .compare_exchange(
                Lifecycle::Running as u8,
                Lifecycle::Terminating as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub(crate) fn mark_terminated(&self) {
        self.lifecycle
            .store(Lifecycle::Terminated as u8, Ordering::Release);
    }
}
