//! **algoviz-core**: shared types for the algorithm trace engine.
//!
//! This crate provides the foundational types used across the *algoviz*
//! workspace: geometry primitives, the grid model searched by the
//! pathfinding algorithms, read-only cell snapshots, run configuration and
//! the configuration error type.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNREACHABLE};
pub use config::VisualizerConfig;
pub use error::ConfigError;
pub use geom::{Point, Range};
pub use grid::Grid;
