//! Breadth first search

use crate::search::{
    frontier::Queue,
    search_engines::{SearchEngine, SearchResult, TerminationCondition},
    FailureReason, Node, Problem, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;

/// Breadth-first search. The graph variant keeps an explored set and the set
/// of states currently on the frontier, both compared by state equality, and
/// tests children for the goal as soon as they are generated. The tree
/// variant does no duplicate detection and tests for the goal when a node is
/// popped; it may run forever on cyclic state spaces without a solution.
#[derive(Debug, Clone)]
pub struct BFS {
    graph_search: bool,
}

impl BFS {
    pub fn graph() -> Self {
        Self { graph_search: true }
    }

    pub fn tree() -> Self {
        Self {
            graph_search: false,
        }
    }

    fn graph_search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_id = search_space.root_id();

        if problem.goal_test(problem.initial_state()) {
            statistics.finalise_search();
            return (Node::reached(search_space, root_id), statistics);
        }

        let mut queue = Queue::new();
        let mut frontier_states = HashSet::new();
        let mut explored = HashSet::new();
        queue.add(root_id);
        frontier_states.insert(problem.initial_state().clone());

        while let Some(node_id) = queue.pop() {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                statistics.finalise_search();
                return (Node::failed(reason), statistics);
            }

            let state = search_space.get_state(node_id).clone();
            frontier_states.remove(&state);
            explored.insert(state.clone());
            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());
            for action in actions {
                let successor = problem.result(&state, &action);
                if explored.contains(&successor) || frontier_states.contains(&successor) {
                    continue;
                }
                let g = g_value + problem.cost(&state, &action, &successor);
                let is_goal = problem.goal_test(&successor);
                let child_id = search_space
                    .insert_node(successor.clone(), action, node_id, g)
                    .get_node_id();
                statistics.increment_generated_nodes(1);
                if is_goal {
                    statistics.finalise_search();
                    return (Node::reached(search_space, child_id), statistics);
                }
                frontier_states.insert(successor);
                queue.add(child_id);
            }
        }

        statistics.finalise_search();
        (Node::failed(FailureReason::Exhausted), statistics)
    }

    fn tree_search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let mut queue = Queue::new();
        queue.add(search_space.root_id());

        while let Some(node_id) = queue.pop() {
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
            statistics.increment_generated_nodes(actions.len());
            for action in actions {
                let successor = problem.result(&state, &action);
                let g = g_value + problem.cost(&state, &action, &successor);
                let child_id = search_space
                    .insert_node(successor, action, node_id, g)
                    .get_node_id();
                queue.add(child_id);
            }
        }

        statistics.finalise_search();
        (Node::failed(FailureReason::Exhausted), statistics)
    }
}

impl SearchEngine for BFS {
    fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        if self.graph_search {
            self.graph_search(problem, termination)
        } else {
            self.tree_search(problem, termination)
        }
    }
}
