mod best_first;
mod bfs;
mod dfs;
mod search_engine;
mod termination_condition;

pub use best_first::{astar_evaluation, best_first_search_with, greedy_evaluation, AStar, GreedyBFS};
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use termination_condition::TerminationCondition;
