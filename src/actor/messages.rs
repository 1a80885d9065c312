//! Message types for mailbox communication.
//!
//! These define what travels from producers to the worker, and why the
//! worker's wait returned.

/// A deferred, fire-and-forget piece of work.
///
/// Nothing is returned to the submitter; any result must be sent back
/// through a channel the closure captures.
pub type WorkUnit = Box<dyn FnOnce() + Send + 'static>;

/// Why the worker's blocking wait returned.
pub(crate) enum Wake {
    /// The next unit in submission order.
    Work(WorkUnit),

    /// `kill` was called.
    Cancelled,

    /// Every producer handle was dropped.
    Disconnected,
}

impl std::fmt::Debug for Wake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work(_) => f.write_str("Work(..)"),
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Disconnected => f.write_str("Disconnected"),
        }
    }
}
