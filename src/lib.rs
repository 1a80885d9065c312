//! # Active Object
//!
//! Objects that expose a thread-safe, fire-and-forget API while every call
//! actually runs serially on a private worker thread owned by the object.
//!
//! ## Core Concepts
//!
//! - **Mailbox**: Unbounded FIFO of pending work units, appended to by any thread
//! - **Worker**: One dedicated thread per object that drains the mailbox in order
//! - **Kill**: Cooperative shutdown with a termination status (0 = normal)
//! - **Submitter**: Clonable producer handle for feeding an object from other threads
//!
//! ## Example
//!
//! ```rust
//! use active_object::{ActiveObject, SubmitError};
//! use crossbeam_channel::unbounded;
//!
//! let object = ActiveObject::new("orc");
//! let (tx, rx) = unbounded();
//!
//! for meal in ["porridge", "bread"] {
//!     let tx = tx.clone();
//!     object.submit(move || tx.send(meal).unwrap()).unwrap();
//! }
//!
//! assert_eq!(rx.recv().unwrap(), "porridge");
//! assert_eq!(rx.recv().unwrap(), "bread");
//!
//! object.kill(0);
//! assert_eq!(object.submit(|| {}), Err(SubmitError::Closed));
//! assert_eq!(object.status(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;

// Re-exports for convenience
pub use actor::{ActiveObject, ActiveObjectConfig, Lifecycle, PanicPolicy, Submitter, WorkUnit};
pub use error::{SpawnError, SubmitError, TerminationError};
