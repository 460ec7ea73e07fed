use std::collections::VecDeque;

use algoviz_core::{Grid, Point};

use crate::Search;

impl Search {
    /// Breadth-first search from the grid's start cell.
    ///
    /// Cells are marked visited when enqueued, so each cell enters the queue
    /// at most once. The returned order is the dequeue order. Finds a path
    /// with the fewest steps.
    pub fn bfs(&mut self, grid: &Grid) -> Vec<Point> {
        self.reset(grid);
        let (start, end) = Self::endpoints(grid);
        self.nodes[start].distance = 0;
        self.nodes[start].visited = true;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start);
        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let cp = grid.point(ci);
            visited.push(cp);
            if ci == end {
                break;
            }

            let current_dist = self.nodes[ci].distance;
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
                n.visited = true;
                n.parent = ci;
                n.distance = current_dist + 1;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        visited
    }
}
