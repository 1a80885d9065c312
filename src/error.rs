//! Error types for submitting work and retiring workers.

use std::any::Any;
use std::io;
use thiserror::Error;

/// Why a work unit was not queued.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Termination was requested (or the worker is gone); stop submitting.
    #[error("active object is closed")]
    Closed,

    /// The bounded mailbox is at capacity. Only returned by `try_submit`.
    #[error("mailbox is full")]
    Full,
}

/// The worker thread could not be started.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The OS refused to spawn the worker thread.
    #[error("failed to spawn worker thread for `{identity}`: {source}")]
    Thread {
        /// Identity of the object being constructed.
        identity: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// How a worker ended, when it did not end normally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerminationError {
    /// `kill` was called with a non-zero status.
    #[error("worker killed with abnormal status {status}")]
    Abnormal {
        /// The status passed to `kill`.
        status: i32,
    },

    /// A work unit panicked and the worker was retired.
    #[error("worker stopped after a work unit panicked: {message}")]
    Panicked {
        /// Panic payload rendered as text.
        message: String,
    },
}

/// Render a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn test_panic_message_static_str() {
        let payload = panic::catch_unwind(|| panic!("boom-str")).unwrap_err();
        assert_eq!(panic_message(&*payload), "boom-str");
    }

    #[test]
    fn test_panic_message_formatted_string() {
        let payload = panic::catch_unwind(|| panic!("boom-{}", 7)).unwrap_err();
        assert_eq!(panic_message(&*payload), "boom-7");
    }

    #[test]
    fn test_panic_message_other_payload() {
        let payload = panic::catch_unwind(|| panic::panic_any(42_u32)).unwrap_err();
        assert_eq!(panic_message(&*payload), "non-string panic payload");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SubmitError::Closed.to_string(), "active object is closed");
        assert_eq!(
            TerminationError::Abnormal { status: 3 }.to_string(),
            "worker killed with abnormal status 3"
        );
    }
}
