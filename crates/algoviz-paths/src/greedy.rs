use algoviz_core::{Grid, Point};

use crate::Search;
use crate::distance::manhattan;

impl Search {
    /// Greedy best-first search on the Manhattan distance to the end.
    ///
    /// The open list is stable-sorted by heuristic alone before every pop,
    /// ignoring the distance travelled. Entries already visited when popped
    /// are skipped. The path found is not necessarily the shortest.
    pub fn greedy(&mut self, grid: &Grid) -> Vec<Point> {
        self.reset(grid);
        let (start, end) = Self::endpoints(grid);
        let goal = grid.end();
        self.nodes[start].heuristic = manhattan(grid.start(), goal);

        let mut open: Vec<usize> = vec![start];
        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while !open.is_empty() {
            open.sort_by_key(|&i| self.nodes[i].heuristic);
            let ci = open.remove(0);
            let cp = grid.point(ci);
            if self.nodes[ci].visited || grid.is_wall(cp) {
                continue;
            }
            self.nodes[ci].visited = true;
            self.nodes[ci].distance = self.depth_from_parent(ci);
            visited.push(cp);
            if ci == end {
                break;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if !grid.is_passable(np) || self.nodes[ni].visited {
                    continue;
                }
                let n = &mut self.nodes[ni];
                n.parent = ci;
                n.heuristic = manhattan(np, goal);
                open.push(ni);
            }
        }

        self.nbuf = nbuf;
        visited
    }
}
