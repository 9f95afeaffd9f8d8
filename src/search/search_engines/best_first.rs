//! Best-first graph search, parameterised by the function that orders the
//! frontier. Greedy best-first search and A* are both instances of it.

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{SearchEngine, SearchResult, TerminationCondition},
    FailureReason, HeuristicValue, Node, Problem, SearchNode, SearchNodeStatus, SearchSpace,
    SearchStatistics,
};
use std::collections::HashMap;

/// Run a best-first graph search ordered by `evaluate`.
///
/// States are identified by hash. A child is admitted if its state has not
/// been seen, or if it reaches a seen state with a strictly lower path cost;
/// in the latter case the older node for that state is superseded and will be
/// skipped when popped. The goal test happens when a node is popped.
pub fn best_first_search_with<P, F>(
    problem: &P,
    evaluate: F,
    termination: &mut TerminationCondition,
) -> SearchResult<P>
where
    P: Problem,
    F: Fn(&SearchNode<P::Action>) -> HeuristicValue,
{
    let mut statistics = SearchStatistics::new();
    let mut search_space = SearchSpace::new(problem.initial_state().clone());
    let mut frontier = PriorityFrontier::new();
    let mut best_nodes = HashMap::new();

    let root_node = search_space.get_root_node_mut();
    root_node.set_h(problem.heuristic(problem.initial_state()));
    let f_value = evaluate(&*root_node);
    root_node.set_f(f_value);
    let root_id = root_node.get_node_id();
    best_nodes.insert(search_space.hash_state(problem.initial_state()), root_id);
    frontier.add(root_id, f_value);

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if node.get_status() != SearchNodeStatus::Open {
            statistics.increment_skipped_nodes();
            continue;
        }
        statistics.register_heuristic_value(node.get_h());

        let state = search_space.get_state(node_id).clone();
        if problem.goal_test(&state) {
            statistics.finalise_search();
            return (Node::reached(search_space, node_id), statistics);
        }

        if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
            statistics.finalise_search();
            return (Node::failed(reason), statistics);
        }

        let node = search_space.get_node_mut(node_id);
        node.close();
        let g_value = node.get_g();
        statistics.increment_expanded_nodes();

        let actions = problem.actions(&state);
        statistics.increment_generated_actions(actions.len());
        for action in actions {
            let successor = problem.result(&state, &action);
            let g = g_value + problem.cost(&state, &action, &successor);
            let state_hash = search_space.hash_state(&successor);

            // The heuristic only depends on the state, so a reopened state
            // keeps the value computed the first time around.
            let h = match best_nodes.get(&state_hash) {
                Some(&existing_id) => {
                    let existing = search_space.get_node_mut(existing_id);
                    if g >= existing.get_g() {
                        continue;
                    }
                    existing.supersede();
                    statistics.increment_reopened_nodes();
                    existing.get_h()
                }
                None => problem.heuristic(&successor),
            };

            let child_node = search_space.insert_node(successor, action, node_id, g);
            child_node.set_h(h);
            let f_value = evaluate(&*child_node);
            child_node.set_f(f_value);
            let child_id = child_node.get_node_id();
            best_nodes.insert(state_hash, child_id);
            statistics.increment_generated_nodes(1);
            frontier.add(child_id, f_value);
        }
    }

    statistics.finalise_search();
    (Node::failed(FailureReason::Exhausted), statistics)
}

/// Greedy best-first search orders nodes by their heuristic value alone.
pub fn greedy_evaluation<A>(node: &SearchNode<A>) -> HeuristicValue {
    node.get_h()
}

/// A* orders nodes by path cost plus heuristic value.
pub fn astar_evaluation<A>(node: &SearchNode<A>) -> HeuristicValue {
    node.get_g() + node.get_h()
}

/// Greedy best-first search
#[derive(Debug, Clone, Default)]
pub struct GreedyBFS {}

impl GreedyBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for GreedyBFS {
    fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        best_first_search_with(problem, greedy_evaluation, termination)
    }
}

/// A* search
#[derive(Debug, Clone, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        best_first_search_with(problem, astar_evaluation, termination)
    }
}
