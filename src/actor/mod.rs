//! Active objects: message-passing execution on a private worker thread.
//!
//! Each [`ActiveObject`] owns one mailbox and one worker thread built on
//! crossbeam channels:
//! - **Producers**: Any thread calling `submit`, directly or via a [`Submitter`]
//! - **Worker**: Takes units from the mailbox one at a time and runs them
//! - **Kill**: A separate cancellation channel that wakes the worker's wait
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      WorkUnit       ┌──────────────┐
//! │  Producer A  │ ─────────────────▶  │              │
//! └──────────────┘                     │   Mailbox    │      ┌──────────────┐
//! ┌──────────────┐      WorkUnit       │    (FIFO)    │ ───▶ │Worker Thread │
//! │  Producer B  │ ─────────────────▶  │              │      │              │
//! └──────────────┘                     └──────────────┘      │  select! on  │
//!                                                            │ work/cancel  │
//! ┌──────────────┐       kill(status)                        │              │
//! │    Owner     │ ────────────────────────────────────────▶ │              │
//! └──────────────┘                                           └──────────────┘
//! ```

mod config;
mod mailbox;
mod messages;
mod object;
mod state;
mod worker;

pub use config::{ActiveObjectConfig, PanicPolicy};
pub use mailbox::Submitter;
pub use messages::WorkUnit;
pub use object::ActiveObject;
pub use state::Lifecycle;
