//! Mailbox: the FIFO between producers and the worker.
//!
//! The producer half ([`Submitter`]) may be cloned into any number of
//! threads. The consumer half ([`Inbox`]) is owned by the worker thread and
//! also watches the cancellation channel, so a single wait reports either
//! the next unit or a kill request.

use super::messages::{Wake, WorkUnit};
use super::state::{Lifecycle, Shared};
use crate::error::SubmitError;
use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender, TrySendError};
use std::sync::Arc;

/// Create the work channel, bounded or not.
pub(crate) fn work_channel(capacity: Option<usize>) -> (Sender<WorkUnit>, Receiver<WorkUnit>) {
    capacity.map_or_else(unbounded, bounded)
}

/// Clonable producer handle for one active object.
///
/// Obtained from [`ActiveObject::submitter`](super::ActiveObject::submitter).
/// Holding a submitter does not keep the worker alive: once the owning
/// object is killed or dropped, every submit fails with
/// [`SubmitError::Closed`].
#[derive(Debug, Clone)]
pub struct Submitter {
    work_tx: Sender<WorkUnit>,
    shared: Arc<Shared>,
}

impl Submitter {
    pub(crate) const fn new(work_tx: Sender<WorkUnit>, shared: Arc<Shared>) -> Self {
        Self { work_tx, shared }
    }

    /// Queue `work` for execution on the worker thread.
    ///
    /// Returns as soon as the unit is queued. On a bounded mailbox this
    /// blocks while the mailbox is full.
    pub fn submit<F>(&self, work: F) -> Result<(), SubmitError>
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.shared.is_running() {
            return Err(SubmitError::Closed);
        }
        self.work_tx
            .send(Box::new(work))
            .map_err(|_| SubmitError::Closed)
    }

    /// Queue `work` without ever blocking.
    ///
    /// Fails with [`SubmitError::Full`] when a bounded mailbox is at
    /// capacity; the unit is dropped unexecuted.
    pub fn try_submit<F>(&self, work: F) -> Result<(), SubmitError>
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.shared.is_running() {
            return Err(SubmitError::Closed);
        }
        self.work_tx.try_send(Box::new(work)).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::Full,
            TrySendError::Disconnected(_) => SubmitError::Closed,
        })
    }

    pub(crate) fn shared(&self) -> &Shared {
        &self.shared
    }

    /// Identity of the object this submitter feeds.
    pub fn identity(&self) -> &str {
        self.shared.identity()
    }

    /// Whether the object has stopped accepting work.
    pub fn is_closed(&self) -> bool {
        self.shared.lifecycle() != Lifecycle::Running
    }

    /// Units queued but not yet taken by the worker.
    pub fn pending(&self) -> usize {
        self.work_tx.len()
    }
}

/// Consumer half, owned by the worker thread.
#[derive(Debug)]
pub(crate) struct Inbox {
    work_rx: Receiver<WorkUnit>,
    cancel_rx: Receiver<()>,
}

impl Inbox {
    pub(crate) const fn new(work_rx: Receiver<WorkUnit>, cancel_rx: Receiver<()>) -> Self {
        Self { work_rx, cancel_rx }
    }

    /// Block until there is work or a cancellation request.
    ///
    /// A pending cancellation always wins over queued work, so no unit
    /// starts after the kill has been observed.
    pub(crate) fn wait(&self) -> Wake {
        if self.cancel_rx.try_recv().is_ok() {
            return Wake::Cancelled;
        }

        select! {
            // A dropped cancel sender means the owner is gone: stop as well.
            recv(self.cancel_rx) -> _ => Wake::Cancelled,
            recv(self.work_rx) -> unit => unit.map_or(Wake::Disconnected, Wake::Work),
        }
    }

    /// Units still queued; these are discarded when the worker exits.
    pub(crate) fn pending(&self) -> usize {
        self.work_rx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn mailbox(capacity: Option<usize>) -> (Submitter, Inbox, Sender<()>) {
        let (work_tx, work_rx) = work_channel(capacity);
        let (cancel_tx, cancel_rx) = bounded(1);
        let shared = Arc::new(Shared::new("test".to_string()));
        (
            Submitter::new(work_tx, shared),
            Inbox::new(work_rx, cancel_rx),
            cancel_tx,
        )
    }

    fn run(wake: Wake) {
        match wake {
            Wake::Work(unit) => unit(),
            other => panic!("expected work, got {other:?}"),
        }
    }

    #[test]
    fn test_wait_returns_units_in_order() {
        let (submitter, inbox, _cancel_tx) = mailbox(None);
        let (tx, rx) = unbounded();

        for i in 0..3 {
            let tx = tx.clone();
            submitter.submit(move || tx.send(i).unwrap()).unwrap();
        }
        assert_eq!(inbox.pending(), 3);

        for _ in 0..3 {
            run(inbox.wait());
        }
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_cancellation_wins_over_queued_work() {
        let (submitter, inbox, cancel_tx) = mailbox(None);
        submitter.submit(|| {}).unwrap();
        cancel_tx.send(()).unwrap();

        assert!(matches!(inbox.wait(), Wake::Cancelled));
        assert_eq!(inbox.pending(), 1);
    }

    #[test]
    fn test_wait_wakes_on_cancel_while_blocked() {
        let (_submitter, inbox, cancel_tx) = mailbox(None);

        let waiter = thread::spawn(move || matches!(inbox.wait(), Wake::Cancelled));
        thread::sleep(Duration::from_millis(20));
        cancel_tx.send(()).unwrap();

        assert!(waiter.join().unwrap());
    }

    #[test]
    fn test_wait_reports_disconnect() {
        let (submitter, inbox, _cancel_tx) = mailbox(None);
        drop(submitter);
        assert!(matches!(inbox.wait(), Wake::Disconnected));
    }

    #[test]
    fn test_try_submit_full() {
        let (submitter, _inbox, _cancel_tx) = mailbox(Some(1));
        assert_eq!(submitter.try_submit(|| {}), Ok(()));
        assert_eq!(submitter.try_submit(|| {}), Err(SubmitError::Full));
        assert_eq!(submitter.pending(), 1);
    }

    #[test]
    fn test_submit_after_inbox_dropped() {
        let (submitter, inbox, _cancel_tx) = mailbox(None);
        drop(inbox);
        assert_eq!(submitter.submit(|| {}), Err(SubmitError::Closed));
        assert_eq!(submitter.try_submit(|| {}), Err(SubmitError::Closed));
    }
}
