//! The [`Cell`] view: one grid position plus the search metadata of a run.

use crate::geom::Point;

/// Sentinel distance for cells a search has not reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Read-only snapshot of a grid position.
///
/// Identity flags come from the [`Grid`](crate::Grid); the remaining fields
/// come from whichever search produced the snapshot. `predecessor` is a
/// plain position, never an owning link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    /// Accumulated distance from the start, [`UNREACHABLE`] if unknown.
    pub distance: i32,
    /// Manhattan estimate to the end (0 until a heuristic search sets it).
    pub heuristic: i32,
    /// `distance + heuristic` for A*, [`UNREACHABLE`] otherwise.
    pub f_score: i32,
    pub visited: bool,
    pub predecessor: Option<Point>,
}

impl Cell {
    /// A cell at `pos` with every search field at its sentinel.
    pub const fn unsearched(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_end: false,
            is_wall: false,
            distance: UNREACHABLE,
            heuristic: 0,
            f_score: UNREACHABLE,
            visited: false,
            predecessor: None,
        }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }
}
