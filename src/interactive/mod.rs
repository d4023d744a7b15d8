//! Interactive TUI interface
//!
//! Maps terminal key presses to game events and redraws the board every tick.

mod app;
mod rendering;

pub use app::{App, BLINK_SECS, TICK_RATE, map_key, run_tui};
pub use rendering::ui;
