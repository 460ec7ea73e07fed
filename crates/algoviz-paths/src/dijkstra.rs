use algoviz_core::{Grid, Point, UNREACHABLE};

use crate::Search;

impl Search {
    /// Dijkstra's algorithm with unit edge weights.
    ///
    /// Every iteration stable-sorts the unvisited list by distance and takes
    /// the front, so ties go to whichever cell sat earlier in the list (which
    /// starts out in row-major order). Every unvisited neighbour is relaxed
    /// unconditionally, so among equally short predecessors the last one
    /// selected wins. Stops once the end is selected or the closest
    /// remaining cell is unreachable. Returns the visited order.
    pub fn dijkstra(&mut self, grid: &Grid) -> Vec<Point> {
        self.reset(grid);
        let (start, end) = Self::endpoints(grid);
        self.nodes[start].distance = 0;

        let mut unvisited: Vec<usize> = (0..grid.len()).collect();
        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while !unvisited.is_empty() {
            unvisited.sort_by_key(|&i| self.nodes[i].distance);
            let ci = unvisited.remove(0);
            let cp = grid.point(ci);

            if grid.is_wall(cp) {
                continue;
            }
            let current_dist = self.nodes[ci].distance;
            if current_dist == UNREACHABLE {
                break;
            }

            self.nodes[ci].visited = true;
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
                if !grid.is_passable(np) {
                    continue;
                }
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                // Grids are bipartite, so an unvisited neighbour that was
                // already reached holds current + 1 too: only the parent
                // moves, to the last cell that touched it.
                n.distance = current_dist + 1;
                n.parent = ci;
            }
        }

        self.nbuf = nbuf;
        visited
    }
}
