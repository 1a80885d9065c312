//! Worker loop: the one thread that runs an object's work units.
//!
//! The loop blocks in [`Inbox::wait`], runs each unit to completion, and
//! exits only when it observes cancellation (or every producer is gone).
//! An empty mailbox just means blocking.

use super::config::PanicPolicy;
use super::mailbox::Inbox;
use super::messages::{Wake, WorkUnit};
use super::state::Shared;
use crate::error::{panic_message, TerminationError};
use std::panic::{self, AssertUnwindSafe};

/// Main worker loop. Marks the object terminated on every exit path.
pub(crate) fn run_loop(
    inbox: &Inbox,
    shared: &Shared,
    policy: PanicPolicy,
) -> Result<(), TerminationError> {
    tracing::debug!(object = shared.identity(), "active_object.worker.start");

    let outcome = loop {
        match inbox.wait() {
            Wake::Work(unit) => {
                let Err(message) = execute(unit) else {
                    continue;
                };
                tracing::error!(
                    object = shared.identity(),
                    panic = %message,
                    ?policy,
                    "work unit panicked"
                );
                if policy == PanicPolicy::Terminate {
                    break Err(TerminationError::Panicked { message });
                }
            }
            Wake::Cancelled => break observe_cancellation(inbox, shared),
            Wake::Disconnected => {
                tracing::debug!(object = shared.identity(), "all producers dropped");
                break Ok(());
            }
        }
    };

    shared.mark_terminated();
    tracing::debug!(
        object = shared.identity(),
        discarded = inbox.pending(),
        "active_object.worker.exit"
    );
    outcome
}

/// Run one unit, catching a panic so the loop never dies silently.
fn execute(unit: WorkUnit) -> Result<(), String> {
    tracing::trace!("active_object.worker.execute");
    panic::catch_unwind(AssertUnwindSafe(unit)).map_err(|payload| panic_message(&*payload))
}

/// Report the kill the worker just woke up for.
///
/// Status 0 is an intentional stop and stays silent.
fn observe_cancellation(inbox: &Inbox, shared: &Shared) -> Result<(), TerminationError> {
    let status = shared.status();
    if status == 0 {
        return Ok(());
    }

    tracing::error!(
        object = shared.identity(),
        status,
        discarded = inbox.pending(),
        "worker was killed with abnormal status"
    );
    Err(TerminationError::Abnormal { status })
}
