//! Depth first search

use crate::search::{
    frontier::Stack,
    search_engines::{SearchEngine, SearchResult, TerminationCondition},
    FailureReason, Node, Problem, SearchSpace, SearchStatistics,
};
use std::collections::HashMap;
use tracing::debug;

/// Depth-first search. States are deduplicated by hash: a child is pushed only
/// if no node for an equal state has been generated before. The goal test
/// happens when a node is popped.
#[derive(Debug, Clone, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_id = search_space.root_id();

        let mut searched_states = HashMap::new();
        searched_states.insert(search_space.hash_state(problem.initial_state()), root_id);
        let mut stack = Stack::new();
        stack.add(root_id);

        while let Some(node_id) = stack.pop() {
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
                let state_hash = search_space.hash_state(&successor);
                if searched_states.contains_key(&state_hash) {
                    continue;
                }
                let g = g_value + problem.cost(&state, &action, &successor);
                let child_id = search_space
                    .insert_node(successor, action, node_id, g)
                    .get_node_id();
                searched_states.insert(state_hash, child_id);
                statistics.increment_generated_nodes(1);
                stack.add(child_id);
            }
        }

        debug!(generated_states = search_space.len(), "frontier exhausted");
        statistics.finalise_search();
        (Node::failed(FailureReason::Exhausted), statistics)
    }
}
