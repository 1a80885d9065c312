//! Creatures Demo: Several active objects eating and roaming concurrently.
//!
//! Each creature owns its own worker thread. Calls to `eat` and `roam`
//! return immediately; the log shows every creature's actions in the order
//! it was asked to perform them, interleaved with the other creatures.
//!
//! Run with `RUST_LOG=debug` to also see worker lifecycle events.

use active_object::{ActiveObject, SubmitError};
use std::thread;
use std::time::Duration;
use tracing::info;

/// A creature whose actions run on its own worker.
struct Creature {
    object: ActiveObject,
}

impl Creature {
    fn new(name: &str) -> Self {
        Self {
            object: ActiveObject::new(name),
        }
    }

    /// Eats the porridge.
    fn eat(&self) -> Result<(), SubmitError> {
        let name = self.object.identity().to_string();
        self.object.submit(move || {
            info!("{name} is eating!");
            info!("{name} has finished eating!");
        })
    }

    /// Roams the wastelands.
    fn roam(&self) -> Result<(), SubmitError> {
        let name = self.object.identity().to_string();
        self.object
            .submit(move || info!("{name} has started to roam in the wastelands."))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .init();

    let creatures: Vec<Creature> = (1..=3).map(|i| Creature::new(&format!("Orc{i}"))).collect();

    for creature in &creatures {
        if let Err(e) = creature.eat().and_then(|()| creature.roam()) {
            info!("could not reach {}: {e}", creature.object.identity());
        }
    }

    thread::sleep(Duration::from_secs(1));

    for creature in &creatures {
        creature.object.kill(0);
    }

    // A killed creature ignores further requests
    if let Err(e) = creatures[0].eat() {
        info!("{} refused to eat: {e}", creatures[0].object.identity());
    }

    for creature in creatures {
        let name = creature.object.identity().to_string();
        match creature.object.join() {
            Ok(()) => info!("{name} stopped"),
            Err(e) => info!("{name} stopped abnormally: {e}"),
        }
    }
}
