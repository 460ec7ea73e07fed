//! Terminal front-ends for the algoviz trace engine.
//!
//! Both binaries follow the same loop: generate a trace, hand it to a
//! playback [`Controller`](algoviz_playback::Controller) whose callback
//! folds events into a shared view, and redraw that view while polling the
//! keyboard.

pub mod logger;
pub mod pathview;
pub mod sortview;
pub mod term;

pub use term::{Action, Keys, Terminal};

/// Speed change per key press, in percent.
pub const SPEED_STEP: u8 = 10;
