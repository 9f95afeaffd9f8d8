//! A generic state-space search engine. Domains implement [`Problem`]; the
//! engines in [`search_engines`] explore it and return a terminal [`Node`]
//! from which the plan is read back along parent links.

mod frontier;
mod goal;
mod node;
mod plan;
mod problem;
mod search_node;
mod search_space;
mod search_statistics;
pub mod search_engines;
mod validate;
mod verbosity;

pub use frontier::{PriorityFrontier, Queue, Stack};
pub use goal::Goal;
pub use node::{FailureReason, Node};
pub use plan::Plan;
pub use problem::{ActionList, HeuristicValue, Problem};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;

use search_engines::{best_first_search_with, SearchEngine, TerminationCondition, BFS, DFS};

/// Depth-first search without a budget.
pub fn depth_first_search<P: Problem>(problem: &P) -> Node<P::State, P::Action> {
    DFS::new()
        .search(problem, &mut TerminationCondition::unbounded())
        .0
}

/// Breadth-first graph search without a budget.
pub fn breadth_first_graph_search<P: Problem>(problem: &P) -> Node<P::State, P::Action> {
    BFS::graph()
        .search(problem, &mut TerminationCondition::unbounded())
        .0
}

/// Breadth-first tree search without a budget. Does not terminate on cyclic
/// state spaces without a reachable goal.
pub fn breadth_first_tree_search<P: Problem>(problem: &P) -> Node<P::State, P::Action> {
    BFS::tree()
        .search(problem, &mut TerminationCondition::unbounded())
        .0
}

/// Best-first graph search ordered by `evaluate`, without a budget.
pub fn best_first_search<P, F>(problem: &P, evaluate: F) -> Node<P::State, P::Action>
where
    P: Problem,
    F: Fn(&SearchNode<P::Action>) -> HeuristicValue,
{
    best_first_search_with(problem, evaluate, &mut TerminationCondition::unbounded()).0
}

pub fn greedy_best_first_search<P: Problem>(problem: &P) -> Node<P::State, P::Action> {
    best_first_search(problem, search_engines::greedy_evaluation)
}

pub fn astar_search<P: Problem>(problem: &P) -> Node<P::State, P::Action> {
    best_first_search(problem, search_engines::astar_evaluation)
}
