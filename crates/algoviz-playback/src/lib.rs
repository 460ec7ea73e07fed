//! Paced playback of algoviz traces.
//!
//! A [`Controller`] replays any sequence of [`Paced`] events (sorting
//! [`TraceEvent`](algoviz_sort::TraceEvent)s, pathfinding
//! [`PathEvent`](algoviz_paths::PathEvent)s) on a worker thread, handing
//! each one to a render callback in the order it was recorded. Between
//! events the worker waits `101 - speed` milliseconds; pause and cancel are
//! observed at those waits.
//!
//! ```no_run
//! use algoviz_playback::{Controller, Speed};
//! use algoviz_sort::SortAlgorithm;
//!
//! let input = [5, 3, 4, 1, 2];
//! let trace = SortAlgorithm::Bubble.run(&input);
//! let ctl = Controller::default();
//! let session = ctl.start(trace, Speed::MAX, |ev| println!("{ev}")).unwrap();
//! session.join();
//! ```

mod controller;
mod error;
mod pace;
mod speed;

pub use controller::{Controller, Outcome, PlaybackState, Session};
pub use error::PlaybackError;
pub use pace::{PATH_STEP_DELAY, Paced};
pub use speed::Speed;
