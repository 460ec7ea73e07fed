//! Wall generators for a [`Grid`](algoviz_core::Grid).
//!
//! Provides two layouts:
//! - **Random walls**: every non-endpoint cell independently becomes a wall
//!   with a fixed probability.
//! - **Recursive division**: a walled border, then the interior is split by
//!   walls with a single gap each, recursing into both halves.
//!
//! Neither generator ever places a wall on the start or end cell. Neither
//! guarantees that the end stays reachable.

mod mazegen;

pub use mazegen::{MazeGen, MazeStyle, RANDOM_WALL_DENSITY};
