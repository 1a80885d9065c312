//! Construction-time settings for an active object.

/// What the worker does when a work unit panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicPolicy {
    /// Log the panic and retire the worker. Later submits fail with `Closed`.
    #[default]
    Terminate,
    /// Log the panic and move on to the next unit.
    Continue,
}

/// Configuration for an [`ActiveObject`](super::ActiveObject).
#[derive(Debug, Clone)]
pub struct ActiveObjectConfig {
    /// Worker threads are named `<prefix>-<identity>`.
    pub thread_name_prefix: String,
    /// `None` for an unbounded mailbox. `Some(n)` makes `submit` block
    /// while `n` units are queued (`Some(0)` is a rendezvous).
    pub mailbox_capacity: Option<usize>,
    /// Reaction to a panicking work unit.
    pub panic_policy: PanicPolicy,
}

impl Default for ActiveObjectConfig {
    fn default() -> Self {
        Self {
            thread_name_prefix: "active-object".to_string(),
            mailbox_capacity: None,
            panic_policy: PanicPolicy::default(),
        }
    }
}

impl ActiveObjectConfig {
    /// Thread name for the worker of `identity`.
    pub(crate) fn thread_name(&self, identity: &str) -> String {
        format!("{}-{identity}", self.thread_name_prefix)
    }
}
