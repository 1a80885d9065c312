//! `ActiveObject`: the owner handle for one mailbox and its worker thread.

use super::config::ActiveObjectConfig;
use super::mailbox::{work_channel, Inbox, Submitter};
use super::state::{Lifecycle, Shared};
use super::worker;
use crate::error::{panic_message, SpawnError, SubmitError, TerminationError};
use crossbeam_channel::{bounded, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// An object whose calls run serially on its own worker thread.
///
/// The worker starts at construction and runs until [`kill`](Self::kill)
/// is called or the handle is dropped. Work units still queued at that
/// point are discarded.
///
/// Domain types usually wrap an `ActiveObject` and expose methods that
/// [`submit`](Self::submit) closures:
///
/// ```rust
/// use active_object::{ActiveObject, SubmitError};
///
/// struct Orc {
///     object: ActiveObject,
/// }
///
/// impl Orc {
///     fn roam(&self) -> Result<(), SubmitError> {
///         let name = self.object.identity().to_string();
///         self.object.submit(move || println!("{name} has started to roam"))
///     }
/// }
///
/// let orc = Orc { object: ActiveObject::new("Orc") };
/// orc.roam().unwrap();
/// orc.object.kill(0);
/// ```
#[derive(Debug)]
pub struct ActiveObject {
    /// Producer half of the mailbox.
    submitter: Submitter,
    /// Wakes the worker's wait with a cancellation.
    cancel_tx: Sender<()>,
    /// Handle to the worker thread.
    handle: Option<JoinHandle<Result<(), TerminationError>>>,
}

impl ActiveObject {
    /// Create an object with default configuration and start its worker.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the worker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn new(identity: impl Into<String>) -> Self {
        Self::spawn(identity, ActiveObjectConfig::default())
            .expect("Failed to spawn active object worker thread")
    }

    /// Create an object with custom configuration and start its worker.
    pub fn spawn(
        identity: impl Into<String>,
        config: ActiveObjectConfig,
    ) -> Result<Self, SpawnError> {
        let identity = identity.into();
        let shared = Arc::new(Shared::new(identity.clone()));
        let shared_clone = shared.clone();

        let (work_tx, work_rx) = work_channel(config.mailbox_capacity);
        // One slot is enough: only the first kill sends
        let (cancel_tx, cancel_rx) = bounded(1);
        let inbox = Inbox::new(work_rx, cancel_rx);
        let policy = config.panic_policy;

        let handle = thread::Builder::new()
            .name(config.thread_name(&identity))
            .spawn(move || worker::run_loop(&inbox, &shared_clone, policy))
            .map_err(|source| SpawnError::Thread {
                identity: identity.clone(),
                source,
            })?;

        tracing::debug!(
            object = %identity,
            capacity = ?config.mailbox_capacity,
            "active object spawned"
        );

        Ok(Self {
            submitter: Submitter::new(work_tx, shared),
            cancel_tx,
            handle: Some(handle),
        })
    }

    /// Queue `work` for execution on the worker thread.
    ///
    /// Returns once the unit is queued, without waiting for it to run.
    /// Fails with [`SubmitError::Closed`] after [`kill`](Self::kill).
    pub fn submit<F>(&self, work: F) -> Result<(), SubmitError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submitter.submit(work)
    }

    /// Queue `work` without blocking on a full bounded mailbox.
    pub fn try_submit<F>(&self, work: F) -> Result<(), SubmitError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submitter.try_submit(work)
    }

    /// A clonable producer handle that can be moved to other threads.
    pub fn submitter(&self) -> Submitter {
        self.submitter.clone()
    }

    /// Request termination with `status` (0 = normal, anything else is
    /// reported as an abnormal stop).
    ///
    /// Returns immediately. A unit already running finishes; queued units
    /// never start. Calling again only overwrites the recorded status.
    pub fn kill(&self, status: i32) {
        self.shared().record_status(status);
        if self.shared().begin_termination() {
            tracing::debug!(object = self.identity(), status, "kill requested");
            // Full means a cancellation is already pending
            let _ = self.cancel_tx.try_send(());
        }
    }

    /// The last status passed to [`kill`](Self::kill), or 0.
    pub fn status(&self) -> i32 {
        self.shared().status()
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.shared().lifecycle()
    }

    /// Whether the object has stopped accepting work.
    pub fn is_closed(&self) -> bool {
        self.submitter.is_closed()
    }

    /// Units queued but not yet taken by the worker.
    pub fn pending(&self) -> usize {
        self.submitter.pending()
    }

    /// The identity this object was constructed with.
    pub fn identity(&self) -> &str {
        self.submitter.identity()
    }

    /// Wait for the worker thread to finish.
    ///
    /// Requests a normal stop first if no kill was requested. Blocks for
    /// as long as the currently running unit takes.
    pub fn join(mut self) -> Result<(), TerminationError> {
        if self.lifecycle() == Lifecycle::Running {
            self.kill(0);
        }
        self.handle.take().map_or(Ok(()), |handle| {
            handle.join().unwrap_or_else(|payload| {
                Err(TerminationError::Panicked {
                    message: panic_message(&*payload),
                })
            })
        })
    }

    fn shared(&self) -> &Shared {
        self.submitter.shared()
    }
}

impl Drop for ActiveObject {
    fn drop(&mut self) {
        if self.lifecycle() == Lifecycle::Running {
            self.kill(0);
        }
    }
}
