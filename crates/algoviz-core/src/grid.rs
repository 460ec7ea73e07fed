//! The [`Grid`] type: the static layout a search runs over.
//!
//! A `Grid` only holds identity data: its dimensions, the wall bitmap and
//! the two endpoints. Per-run search metadata lives in a separate table
//! owned by the search itself, so any number of searches can read the same
//! grid without stepping on each other.

use crate::error::ConfigError;
use crate::geom::{Point, Range};

/// A fixed-size 2-D cell map with wall, start and end flags.
///
/// Invariants: exactly one start and one end, they never coincide, both
/// lie inside the bounds, and neither is ever a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    bounds: Range,
    walls: Vec<bool>,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a grid of `rows` × `cols` open cells with the given endpoints.
    ///
    /// Fails with [`ConfigError::InvalidConfiguration`] if a dimension is
    /// not positive, an endpoint is out of bounds, or `start == end`.
    pub fn new(rows: i32, cols: i32, start: Point, end: Point) -> Result<Self, ConfigError> {
        if rows < 1 || cols < 1 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        let bounds = Range::with_size(rows, cols);
        if !bounds.contains(start) {
            return Err(ConfigError::endpoint("start", start, "is out of bounds"));
        }
        if !bounds.contains(end) {
            return Err(ConfigError::endpoint("end", end, "is out of bounds"));
        }
        if start == end {
            return Err(ConfigError::endpoint("start", start, "coincides with end"));
        }
        Ok(Self {
            bounds,
            walls: vec![false; bounds.len()],
            start,
            end,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Alias of [`Grid::len`].
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.len()
    }

    /// Always `false`: a grid has at least two cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// range.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols() as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Append the in-bounds cardinal neighbours of `p` to `buf`, in the
    /// order up, down, left, right. Walls are included; callers filter them.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Whether `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.walls[i])
    }

    /// Whether a search may step onto `p`.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.walls[i])
    }

    /// Set or clear a wall. Endpoints and out-of-bounds points are left
    /// untouched. Returns whether the cell changed.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        if p == self.start || p == self.end {
            return false;
        }
        match self.index(p) {
            Some(i) if self.walls[i] != wall => {
                self.walls[i] = wall;
                true
            }
            _ => false,
        }
    }

    /// Flip the wall flag of `p`. Returns whether the cell changed.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        let wall = !self.is_wall(p);
        self.set_wall(p, wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.iter_mut().for_each(|w| *w = false);
    }

    /// Number of walls.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over wall positions.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Move the start cell. A wall under the new position is removed.
    pub fn set_start(&mut self, p: Point) -> Result<(), ConfigError> {
        self.check_endpoint("start", p, self.end)?;
        self.start = p;
        self.clear_wall_at(p);
        Ok(())
    }

    /// Move the end cell. A wall under the new position is removed.
    pub fn set_end(&mut self, p: Point) -> Result<(), ConfigError> {
        self.check_endpoint("end", p, self.start)?;
        self.end = p;
        self.clear_wall_at(p);
        Ok(())
    }

    fn check_endpoint(&self, what: &str, p: Point, other: Point) -> Result<(), ConfigError> {
        if !self.contains(p) {
            return Err(ConfigError::endpoint(what, p, "is out of bounds"));
        }
        if p == other {
            return Err(ConfigError::endpoint(what, p, "coincides with the other endpoint"));
        }
        Ok(())
    }

    fn clear_wall_at(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.walls[i] = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// On-disk shape of a [`Grid`]: dimensions, endpoints and the wall list.
/// Deserializing goes through [`Grid::new`], so a loaded grid upholds the
/// same invariants as a built one.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    start: Point,
    end: Point,
    #[serde(default)]
    walls: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = ConfigError;

    fn try_from(r: GridRepr) -> Result<Self, ConfigError> {
        let mut grid = Grid::new(r.rows, r.cols, r.start, r.end)?;
        for p in r.walls {
            if !grid.contains(p) {
                return Err(ConfigError::endpoint("wall", p, "is out of bounds"));
            }
            if p == grid.start || p == grid.end {
                return Err(ConfigError::endpoint("wall", p, "covers an endpoint"));
            }
            grid.set_wall(p, true);
        }
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        GridRepr {
            rows: g.rows(),
            cols: g.cols(),
            start: g.start,
            end: g.end,
            walls: g.walls().collect(),
        }
    }
}
