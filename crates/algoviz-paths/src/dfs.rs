use algoviz_core::{Grid, Point};

use crate::Search;

impl Search {
    /// Depth-first search from the grid's start cell.
    ///
    /// Cells are marked visited when popped, so a cell may sit on the stack
    /// several times but is processed once. Neighbours are pushed in
    /// up, down, left, right order, which makes "right" the first explored
    /// direction. The path found is generally not the shortest.
    pub fn dfs(&mut self, grid: &Grid) -> Vec<Point> {
        self.reset(grid);
        let (start, end) = Self::endpoints(grid);

        let mut stack: Vec<usize> = vec![start];
        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
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
                // Last pusher wins: the copy popped first is the newest one.
                self.nodes[ni].parent = ci;
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explores_right_first() {
        let g = Grid::new(5, 5, Point::new(2, 0), Point::new(2, 4)).unwrap();
        let mut s = Search::new(&g);
        let visited = s.dfs(&g);
        assert_eq!(
            visited,
            (0..5).map(|c| Point::new(2, c)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn longer_than_shortest_is_allowed() {
        // The end sits directly below the start, but DFS dives right first
        // and comes back along the bottom row.
        let g = Grid::new(2, 3, Point::new(0, 0), Point::new(1, 0)).unwrap();
        let mut s = Search::new(&g);
        let visited = s.dfs(&g);
        let expected = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(1, 1),
            Point::new(1, 0),
        ];
        assert_eq!(visited, expected);
        let path = s.path(&g);
        assert_eq!(path, expected);
        assert_eq!(path.len() - 1, 5);
        assert_eq!(s.cell(&g, g.end()).unwrap().distance, 5);
    }

    #[test]
    fn each_cell_processed_once() {
        let g = Grid::new(4, 4, Point::new(0, 0), Point::new(3, 3)).unwrap();
        let mut s = Search::new(&g);
        let visited = s.dfs(&g);
        let mut dedup = visited.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), visited.len());
    }
}
