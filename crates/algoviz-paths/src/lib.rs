//! Traced grid search algorithms.
//!
//! Every algorithm runs to completion over a [`Grid`](algoviz_core::Grid)
//! and reports the cells it visited, in order, so that a front-end can
//! replay the search step by step:
//!
//! - **Dijkstra** ([`Search::dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`Search::astar`])
//! - **BFS** ([`Search::bfs`])
//! - **DFS** ([`Search::dfs`])
//! - **Greedy best-first** ([`Search::greedy`])
//!
//! All per-run state lives in [`Search`], a table indexed by flat cell
//! index. The grid is only borrowed, so concurrent searches over the same
//! layout are fine as long as each has its own table.
//!
//! [`SearchAlgorithm::run`] bundles a run and [`Search::path`] into a
//! [`SearchResult`]; [`PathTrace`] turns a result into playback events.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod greedy;
mod search;
mod trace;

pub use algoviz_core::UNREACHABLE;
pub use algorithm::{SearchAlgorithm, SearchResult};
pub use distance::manhattan;
pub use search::Search;
pub use trace::{PathEvent, PathTrace};
