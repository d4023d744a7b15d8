//! Game state machine
//!
//! A presentation layer feeds `Event`s into a `Game` and draws the
//! `Snapshot` it returns after each one.

mod config;
mod engine;
mod event;
mod snapshot;

pub use config::{DEFAULT_ROWS, GameConfig};
pub use engine::Game;
pub use event::{Event, Outcome, RoundStatus};
pub use snapshot::Snapshot;
