use algoviz_core::{Cell, Grid, Point, UNREACHABLE};

use crate::algorithm::SearchAlgorithm;

/// Marker for "no predecessor" in [`Node::parent`].
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-run node table
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) distance: i32,
    pub(crate) heuristic: i32,
    pub(crate) f_score: i32,
    pub(crate) visited: bool,
    /// A* only: whether the node currently sits in the open list.
    pub(crate) open: bool,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            heuristic: 0,
            f_score: UNREACHABLE,
            visited: false,
            open: false,
            parent: NO_PARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Owner of the per-run search metadata for one grid.
///
/// The table is indexed by the grid's flat cell index and is reset at the
/// start of every run, so a `Search` can be reused across runs and grids
/// without reallocating when the size does not grow. The [`Grid`] itself is
/// only ever borrowed immutably.
#[derive(Debug, Default)]
pub struct Search {
    pub(crate) nodes: Vec<Node>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Search {
    /// Create a search table sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Reset every per-run field to its sentinel, resizing for `grid`.
    pub fn reset(&mut self, grid: &Grid) {
        self.nodes.clear();
        self.nodes.resize(grid.len(), Node::default());
    }

    /// Run `algorithm` over `grid` and return the visited order.
    pub fn run(&mut self, algorithm: SearchAlgorithm, grid: &Grid) -> Vec<Point> {
        let visited = match algorithm {
            SearchAlgorithm::Dijkstra => self.dijkstra(grid),
            SearchAlgorithm::Astar => self.astar(grid),
            SearchAlgorithm::Bfs => self.bfs(grid),
            SearchAlgorithm::Dfs => self.dfs(grid),
            SearchAlgorithm::Greedy => self.greedy(grid),
        };
        log::debug!(
            "{}: visited {} of {} cells, end {}",
            algorithm.name(),
            visited.len(),
            grid.len(),
            if self.reached(grid) { "reached" } else { "unreachable" }
        );
        visited
    }

    /// Whether the last run visited the end cell.
    pub fn reached(&self, grid: &Grid) -> bool {
        grid.index(grid.end())
            .and_then(|i| self.nodes.get(i))
            .is_some_and(|n| n.visited)
    }

    /// Reconstruct the path of the last run, ordered start → end.
    ///
    /// Follows predecessor links back from the end cell. Returns an empty
    /// vector when the chain does not lead back to the start, which is how
    /// an unreachable end is reported.
    pub fn path(&self, grid: &Grid) -> Vec<Point> {
        let (Some(start), Some(end)) = (grid.index(grid.start()), grid.index(grid.end())) else {
            return Vec::new();
        };
        if !self.reached(grid) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut ci = end;
        // A chain longer than the grid would mean a cycle.
        while path.len() < self.nodes.len() {
            path.push(grid.point(ci));
            if ci == start {
                path.reverse();
                return path;
            }
            ci = self.nodes[ci].parent;
            if ci == NO_PARENT {
                break;
            }
        }
        Vec::new()
    }

    /// Snapshot of `p`: grid flags plus the metadata of the last run.
    pub fn cell(&self, grid: &Grid, p: Point) -> Option<Cell> {
        let i = grid.index(p)?;
        let n = self.nodes.get(i)?;
        Some(Cell {
            pos: p,
            is_start: p == grid.start(),
            is_end: p == grid.end(),
            is_wall: grid.is_wall(p),
            distance: n.distance,
            heuristic: n.heuristic,
            f_score: n.f_score,
            visited: n.visited,
            predecessor: (n.parent != NO_PARENT).then(|| grid.point(n.parent)),
        })
    }

    // -----------------------------------------------------------------------
    // Helpers shared by the algorithms
    // -----------------------------------------------------------------------

    /// Flat indices of the endpoints. A valid grid always has both.
    pub(crate) fn endpoints(grid: &Grid) -> (usize, usize) {
        let start = grid.index(grid.start()).unwrap_or_default();
        let end = grid.index(grid.end()).unwrap_or_default();
        (start, end)
    }

    /// Depth of a node as one more than its parent's, 0 for a root.
    pub(crate) fn depth_from_parent(&self, idx: usize) -> i32 {
        match self.nodes[idx].parent {
            NO_PARENT => 0,
            p => self.nodes[p].distance.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap()
    }

    #[test]
    fn fresh_table_is_sentinel() {
        let g = grid();
        let s = Search::new(&g);
        let c = s.cell(&g, Point::new(1, 1)).unwrap();
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.f_score, UNREACHABLE);
        assert_eq!(c.heuristic, 0);
        assert!(!c.visited);
        assert_eq!(c.predecessor, None);
        assert!(s.path(&g).is_empty());
        assert!(!s.reached(&g));
    }

    #[test]
    fn reset_clears_previous_run_and_resizes() {
        let g = grid();
        let mut s = Search::new(&g);
        s.run(SearchAlgorithm::Bfs, &g);
        assert!(s.reached(&g));
        s.reset(&g);
        assert!(!s.reached(&g));
        assert!(s.nodes.iter().all(|n| !n.visited && n.parent == NO_PARENT));

        let big = Grid::new(6, 6, Point::new(0, 0), Point::new(5, 5)).unwrap();
        s.reset(&big);
        assert_eq!(s.nodes.len(), 36);
    }

    #[test]
    fn cell_view_combines_grid_and_run() {
        let mut g = grid();
        g.set_wall(Point::new(1, 1), true);
        let mut s = Search::new(&g);
        s.run(SearchAlgorithm::Bfs, &g);
        let start = s.cell(&g, g.start()).unwrap();
        assert!(start.is_start && start.visited);
        assert_eq!(start.distance, 0);
        let wall = s.cell(&g, Point::new(1, 1)).unwrap();
        assert!(wall.is_wall && !wall.visited);
        let end = s.cell(&g, g.end()).unwrap();
        assert!(end.is_end);
        assert_eq!(end.distance, 4);
        assert!(end.predecessor.is_some());
        assert!(s.cell(&g, Point::new(5, 5)).is_none());
    }

    #[test]
    fn search_never_touches_grid() {
        let mut g = grid();
        g.set_wall(Point::new(0, 1), true);
        let before = g.clone();
        let mut s = Search::new(&g);
        for alg in SearchAlgorithm::ALL {
            s.run(alg, &g);
        }
        assert_eq!(g, before);
    }
}
