use std::fmt;

use algoviz_core::{Grid, Point};
use rand::{Rng, RngExt};

/// Probability that [`MazeGen::random_walls`] turns a cell into a wall.
pub const RANDOM_WALL_DENSITY: f64 = 0.3;

/// The layouts a front-end can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeStyle {
    /// No walls at all.
    Empty,
    /// Independent walls at [`RANDOM_WALL_DENSITY`].
    Random,
    /// Bordered recursive division.
    RecursiveDivision,
}

impl MazeStyle {
    pub const ALL: [MazeStyle; 3] = [
        MazeStyle::Empty,
        MazeStyle::Random,
        MazeStyle::RecursiveDivision,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MazeStyle::Empty => "Empty",
            MazeStyle::Random => "Random walls",
            MazeStyle::RecursiveDivision => "Recursive division",
        }
    }
}

impl fmt::Display for MazeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Orientation {
    /// The dividing wall runs along a row.
    Horizontal,
    /// The dividing wall runs along a column.
    Vertical,
}

/// Wall generator operating on a [`Grid`].
///
/// Every generator starts from the grid's current endpoints; walls are set
/// through [`Grid::set_wall`], which refuses to cover an endpoint.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen over the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Apply `style` from a cleared grid. Returns the resulting wall count.
    pub fn generate(&mut self, style: MazeStyle) -> usize {
        let walls = match style {
            MazeStyle::Empty => {
                self.clear();
                0
            }
            MazeStyle::Random => self.random_walls(RANDOM_WALL_DENSITY),
            MazeStyle::RecursiveDivision => self.recursive_division(),
        };
        log::debug!("{style}: {walls} walls on {} cells", self.grid.len());
        walls
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.grid.clear_walls();
    }

    /// Re-roll every non-endpoint cell: a wall with probability `density`
    /// (0.0–1.0), open otherwise.
    ///
    /// Returns the number of walls placed.
    pub fn random_walls(&mut self, density: f64) -> usize {
        for p in self.grid.bounds() {
            let wall = self.rng.random::<f64>() < density;
            self.grid.set_wall(p, wall);
        }
        self.grid.wall_count()
    }

    /// Generate a bordered recursive-division maze.
    ///
    /// 1. Clear the grid and wall the outer ring.
    /// 2. Split the interior with a full-length wall leaving one random gap,
    ///    then recurse into both sides, choosing the orientation that cuts
    ///    the longer side (random on squares).
    ///
    /// Returns the number of walls placed.
    pub fn recursive_division(&mut self) -> usize {
        self.clear();
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        for p in self.grid.bounds() {
            if p.row == 0 || p.row == rows - 1 || p.col == 0 || p.col == cols - 1 {
                self.grid.set_wall(p, true);
            }
        }
        self.divide(1, 1, cols - 2, rows - 2, Orientation::Horizontal);
        self.grid.wall_count()
    }

    /// Divide the chamber with top-left corner `(y, x)` (row, col) and size
    /// `width` × `height`.
    fn divide(&mut self, x: i32, y: i32, width: i32, height: i32, orientation: Orientation) {
        if width < 2 || height < 2 {
            return;
        }
        let horizontal = orientation == Orientation::Horizontal;

        // Wall position.
        let wx = x + if horizontal { 0 } else { self.rng.random_range(0..width) };
        let wy = y + if horizontal { self.rng.random_range(0..height) } else { 0 };

        // Gap position.
        let px = wx + if horizontal { self.rng.random_range(0..width) } else { 0 };
        let py = wy + if horizontal { 0 } else { self.rng.random_range(0..height) };

        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };
        let length = if horizontal { width } else { height };

        for i in 0..length {
            let (cx, cy) = (wx + i * dx, wy + i * dy);
            if cx != px || cy != py {
                self.grid.set_wall(Point::new(cy, cx), true);
            }
        }

        // Near side.
        let (nw, nh) = if horizontal { (width, wy - y) } else { (wx - x, height) };
        let o = self.choose_orientation(nw, nh);
        self.divide(x, y, nw, nh, o);

        // Far side.
        let (nx, ny) = if horizontal { (x, wy + 1) } else { (wx + 1, y) };
        let (nw, nh) = if horizontal {
            (width, y + height - wy - 1)
        } else {
            (x + width - wx - 1, height)
        };
        let o = self.choose_orientation(nw, nh);
        self.divide(nx, ny, nw, nh, o);
    }

    fn choose_orientation(&mut self, width: i32, height: i32) -> Orientation {
        if width < height {
            Orientation::Horizontal
        } else if height < width {
            Orientation::Vertical
        } else if self.rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn style_round_trip() {
        for style in MazeStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            let back: MazeStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(style, back);
        }
    }
}
