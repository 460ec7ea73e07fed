use algoviz_core::{Grid, Point};

use crate::Search;
use crate::distance::manhattan;

impl Search {
    /// A* with a Manhattan heuristic.
    ///
    /// The open list keeps insertion order and the next node is the first
    /// one with the smallest `f_score` in scan order, so equal scores are
    /// resolved by discovery order rather than by a secondary key. A
    /// neighbour's scores only change on a strictly shorter tentative
    /// distance. Returns the visited (closed) order.
    pub fn astar(&mut self, grid: &Grid) -> Vec<Point> {
        self.reset(grid);
        let (start, end) = Self::endpoints(grid);
        let goal = grid.end();

        {
            let node = &mut self.nodes[start];
            node.distance = 0;
            node.heuristic = manhattan(grid.start(), goal);
            node.f_score = node.heuristic;
            node.open = true;
        }

        let mut open: Vec<usize> = vec![start];
        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while !open.is_empty() {
            let mut best = 0;
            for k in 1..open.len() {
                if self.nodes[open[k]].f_score < self.nodes[open[best]].f_score {
                    best = k;
                }
            }
            let ci = open.remove(best);
            let cp = grid.point(ci);
            self.nodes[ci].open = false;
            self.nodes[ci].visited = true;
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
                let tentative = current_dist + 1;
                let n = &mut self.nodes[ni];
                if !n.open {
                    n.open = true;
                    open.push(ni);
                } else if tentative >= n.distance {
                    continue;
                }
                n.parent = ci;
                n.distance = tentative;
                n.heuristic = manhattan(np, goal);
                n.f_score = tentative + n.heuristic;
            }
        }

        self.nbuf = nbuf;
        visited
    }
}
