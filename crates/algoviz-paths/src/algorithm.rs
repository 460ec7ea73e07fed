use std::fmt;

use algoviz_core::{Grid, Point};

use crate::Search;

/// The grid search algorithms the engine can trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithm {
    Dijkstra,
    Astar,
    Bfs,
    Dfs,
    Greedy,
}

impl SearchAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::Astar,
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Greedy,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::Astar => "A*",
            SearchAlgorithm::Bfs => "Breadth-First Search",
            SearchAlgorithm::Dfs => "Depth-First Search",
            SearchAlgorithm::Greedy => "Greedy Best-First",
        }
    }

    /// Textbook time complexity.
    pub fn complexity(self) -> &'static str {
        match self {
            SearchAlgorithm::Dijkstra => "O((V+E) log V)",
            SearchAlgorithm::Astar => "O(b^d)",
            SearchAlgorithm::Bfs | SearchAlgorithm::Dfs => "O(V+E)",
            SearchAlgorithm::Greedy => "O(b^m)",
        }
    }

    /// Whether the algorithm always returns a shortest path when one exists.
    pub fn is_optimal(self) -> bool {
        !matches!(self, SearchAlgorithm::Dfs | SearchAlgorithm::Greedy)
    }

    /// Run the search on a fresh table and collect both output sequences.
    pub fn run(self, grid: &Grid) -> SearchResult {
        let mut search = Search::new(grid);
        let visited = search.run(self, grid);
        let path = search.path(grid);
        SearchResult {
            algorithm: self,
            visited,
            path,
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visited order and path of one finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: SearchAlgorithm,
    /// Cells in the order the algorithm finalized them.
    pub visited: Vec<Point>,
    /// Start to end inclusive, empty when the end was not reached.
    pub path: Vec<Point>,
}

impl SearchResult {
    /// Whether a path to the end was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps along the path, `None` when unreachable.
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}
