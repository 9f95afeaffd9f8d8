//! The vacuum world as a search problem.

use crate::search::{ActionList, Goal, HeuristicValue, Problem};
use crate::vacuum::{Position, VacuumAction, VacuumState};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// How much each action costs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// `NoOp` costs 0, every other action costs 1.
    #[default]
    Uniform,
    /// As [`CostModel::Uniform`], plus `penalty` for sucking a cell that holds
    /// a jewel. Makes plans grab jewels before vacuuming.
    JewelPenalty { penalty: f64 },
}

/// The heuristic used by the informed searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicModel {
    /// Manhattan distance from the agent to the nearest remaining dirt or
    /// jewel, 0 when the world is clean.
    ///
    /// Admissible and consistent under both cost models: every remaining item
    /// has to be reached and removed with an action costing at least 1, and a
    /// single action changes the distance to the nearest item by at most 1.
    #[default]
    NearestItem,
    Zero,
}

#[derive(Debug, Clone)]
pub struct VacuumProblem {
    initial: VacuumState,
    goal: Goal<VacuumState>,
    cost_model: CostModel,
    heuristic_model: HeuristicModel,
    allow_noop: bool,
}

impl VacuumProblem {
    /// Clean the whole grid, with uniform costs and the nearest item
    /// heuristic.
    pub fn new(initial: VacuumState) -> Self {
        Self {
            initial,
            goal: Goal::predicate(VacuumState::is_clean),
            cost_model: CostModel::default(),
            heuristic_model: HeuristicModel::default(),
            allow_noop: false,
        }
    }

    pub fn with_goal(mut self, goal: Goal<VacuumState>) -> Self {
        self.goal = goal;
        self
    }

    /// Only clear the given cell of dirt and jewels.
    pub fn with_cell_goal(self, cell: Position) -> Self {
        self.with_goal(Goal::predicate(move |state: &VacuumState| {
            !state.has_item_at(cell)
        }))
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn with_heuristic_model(mut self, heuristic_model: HeuristicModel) -> Self {
        self.heuristic_model = heuristic_model;
        self
    }

    /// Also list `NoOp` among the legal actions.
    pub fn with_noop(mut self, allow_noop: bool) -> Self {
        self.allow_noop = allow_noop;
        self
    }
}

impl Problem for VacuumProblem {
    type State = VacuumState;
    type Action = VacuumAction;

    fn initial_state(&self) -> &VacuumState {
        &self.initial
    }

    /// `Grab` and `Suck` when there is something to pick up or vacuum, then
    /// the moves that stay on the grid, then `NoOp` if enabled.
    fn actions(&self, state: &VacuumState) -> ActionList<VacuumAction> {
        let here = state.agent();
        let mut actions = ActionList::new();
        if state.has_jewel_at(here) {
            actions.push(VacuumAction::Grab);
        }
        if state.has_dirt_at(here) {
            actions.push(VacuumAction::Suck);
        }
        actions.extend(
            VacuumAction::MOVES
                .into_iter()
                .filter(|action| state.move_target(*action).is_some()),
        );
        if self.allow_noop {
            actions.push(VacuumAction::NoOp);
        }
        actions
    }

    fn result(&self, state: &VacuumState, action: &VacuumAction) -> VacuumState {
        state.successor(*action)
    }

    fn goal_test(&self, state: &VacuumState) -> bool {
        self.goal.is_satisfied(state)
    }

    fn cost(
        &self,
        current: &VacuumState,
        action: &VacuumAction,
        _future: &VacuumState,
    ) -> HeuristicValue {
        let base = match action {
            VacuumAction::NoOp => 0.,
            _ => 1.,
        };
        let penalty = match (self.cost_model, action) {
            (CostModel::JewelPenalty { penalty }, VacuumAction::Suck)
                if current.has_jewel_at(current.agent()) =>
            {
                penalty
            }
            _ => 0.,
        };
        OrderedFloat(base + penalty)
    }

    fn heuristic(&self, state: &VacuumState) -> HeuristicValue {
        match self.heuristic_model {
            HeuristicModel::NearestItem => {
                let distance = state
                    .nearest_item()
                    .map_or(0, |item| item.manhattan_distance(&state.agent()));
                OrderedFloat(distance as f64)
            }
            HeuristicModel::Zero => OrderedFloat(0.),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        astar_search, breadth_first_graph_search, breadth_first_tree_search, depth_first_search,
        greedy_best_first_search, validate, Node,
    };
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn replay(problem: &VacuumProblem, node: &Node<VacuumState, VacuumAction>) -> Vec<VacuumState> {
        let mut state = problem.initial_state().clone();
        let mut states = vec![];
        for action in node.action_sequence() {
            state = problem.result(&state, &action);
            states.push(state.clone());
        }
        states
    }

    #[test]
    fn two_by_two_scenario() {
        let problem = vacuum_problem(two_by_two_world());
        let initial = problem.initial_state().clone();
        assert_eq!(
            problem.actions(&initial).as_slice(),
            &[VacuumAction::Right, VacuumAction::Down]
        );

        let state = problem.result(&initial, &VacuumAction::Right);
        let state = problem.result(&state, &VacuumAction::Down);
        assert_eq!(state.agent(), Position::new(1, 1));
        assert!(problem.actions(&state).contains(&VacuumAction::Suck));
        assert!(!problem.goal_test(&state));

        let state = problem.result(&state, &VacuumAction::Suck);
        assert!(problem.goal_test(&state));
    }

    #[test]
    fn result_does_not_mutate_its_input() {
        let problem = vacuum_problem(scattered_world());
        let state = problem.initial_state().clone();
        for action in problem.actions(&state) {
            let before = state.clone();
            problem.result(&state, &action);
            assert_eq!(state, before);
        }
        assert_eq!(problem.actions(&state), problem.actions(&state));
    }

    #[test]
    fn actions_never_list_invalid_moves() {
        let problem = vacuum_problem(scattered_world()).with_noop(true);
        let mut state = problem.initial_state().clone();
        for _ in 0..3 {
            for action in problem.actions(&state) {
                if action.offset().is_some() {
                    assert_ne!(problem.result(&state, &action).agent(), state.agent());
                }
            }
            state = problem.result(&state, &VacuumAction::Up);
        }
        assert_eq!(problem.actions(&state).last(), Some(&VacuumAction::NoOp));
    }

    #[test]
    fn grab_and_suck_only_where_something_lies() {
        let state = VacuumState::new(2, 1, Position::new(0, 0))
            .and_then(|s| s.with_jewel(Position::new(0, 0)))
            .unwrap();
        let problem = vacuum_problem(state.clone());
        assert_eq!(
            problem.actions(&state).as_slice(),
            &[VacuumAction::Grab, VacuumAction::Right]
        );
    }

    #[test]
    fn cost_models() {
        let state = VacuumState::new(1, 1, Position::new(0, 0))
            .and_then(|s| s.with_dirt(Position::new(0, 0)))
            .and_then(|s| s.with_jewel(Position::new(0, 0)))
            .unwrap();
        let uniform = vacuum_problem(state.clone());
        let next = uniform.result(&state, &VacuumAction::Suck);
        assert_approx_eq!(uniform.cost(&state, &VacuumAction::Suck, &next).into_inner(), 1.0);
        assert_approx_eq!(uniform.cost(&state, &VacuumAction::NoOp, &state).into_inner(), 0.0);

        let penalised = vacuum_problem(state.clone())
            .with_cost_model(CostModel::JewelPenalty { penalty: 10. });
        assert_approx_eq!(penalised.cost(&state, &VacuumAction::Suck, &next).into_inner(), 11.0);
        assert_approx_eq!(penalised.cost(&state, &VacuumAction::Grab, &next).into_inner(), 1.0);
    }

    #[test]
    fn heuristic_is_distance_to_nearest_item() {
        let problem = vacuum_problem(two_by_two_world());
        assert_approx_eq!(problem.heuristic(problem.initial_state()).into_inner(), 2.0);
        let clean = VacuumState::new(2, 2, Position::new(0, 0)).unwrap();
        assert_approx_eq!(problem.heuristic(&clean).into_inner(), 0.0);
        let zero = vacuum_problem(two_by_two_world()).with_heuristic_model(HeuristicModel::Zero);
        assert_approx_eq!(zero.heuristic(zero.initial_state()).into_inner(), 0.0);
    }

    #[test]
    fn heuristic_never_exceeds_optimal_cost() {
        let problem = vacuum_problem(scattered_world());
        let optimal = breadth_first_graph_search(&problem);
        assert!(problem.heuristic(problem.initial_state()) <= optimal.cost());
        // Every state on the optimal path must also be estimated optimistically
        let total = optimal.cost().into_inner();
        for (depth, state) in optimal.state_sequence().iter().enumerate() {
            let remaining = total - (depth + 1) as f64;
            assert!(problem.heuristic(state).into_inner() <= remaining);
        }
    }

    #[test]
    fn every_engine_solves_the_two_by_two_world() {
        let problem = vacuum_problem(two_by_two_world());
        let nodes = [
            depth_first_search(&problem),
            breadth_first_graph_search(&problem),
            breadth_first_tree_search(&problem),
            greedy_best_first_search(&problem),
            astar_search(&problem),
        ];
        for node in nodes {
            assert!(!node.is_failure());
            assert!(node.state().unwrap().is_clean());
            assert_eq!(validate(&problem, &node.action_sequence()), Ok(()));
            assert_eq!(replay(&problem, &node), node.state_sequence());
            assert_eq!(node.state_sequence().last(), node.state());
        }
    }

    #[test]
    fn replaying_any_plan_reproduces_the_final_state() {
        let problem = vacuum_problem(scattered_world());
        for node in [
            depth_first_search(&problem),
            breadth_first_graph_search(&problem),
            greedy_best_first_search(&problem),
            astar_search(&problem),
        ] {
            let states = replay(&problem, &node);
            assert_eq!(states.last(), node.state());
            assert_eq!(states, node.state_sequence());
        }
    }

    #[test]
    fn solved_world_needs_no_actions() {
        let state = VacuumState::new(3, 3, Position::new(1, 2)).unwrap();
        let problem = vacuum_problem(state.clone());
        for node in [
            depth_first_search(&problem),
            breadth_first_graph_search(&problem),
            breadth_first_tree_search(&problem),
            greedy_best_first_search(&problem),
            astar_search(&problem),
        ] {
            assert!(node.action_sequence().is_empty());
            assert_eq!(node.state(), Some(&state));
        }
    }

    #[test]
    fn astar_is_no_worse_than_bfs_or_greedy() {
        let problem = vacuum_problem(scattered_world());
        let astar = astar_search(&problem);
        let bfs = breadth_first_graph_search(&problem);
        let greedy = greedy_best_first_search(&problem);
        assert!(astar.cost() <= bfs.cost());
        assert!(astar.cost() <= greedy.cost());
        assert_approx_eq!(astar.cost().into_inner(), bfs.cost().into_inner());
    }

    #[test]
    fn jewel_penalty_makes_astar_grab_first() {
        let state = VacuumState::new(2, 1, Position::new(0, 0))
            .and_then(|s| s.with_dirt(Position::new(1, 0)))
            .and_then(|s| s.with_jewel(Position::new(1, 0)))
            .unwrap();

        let uniform = vacuum_problem(state.clone());
        let plan = astar_search(&uniform).action_sequence();
        assert_eq!(plan.steps(), &[VacuumAction::Right, VacuumAction::Suck]);

        let penalised = vacuum_problem(state)
            .with_cost_model(CostModel::JewelPenalty { penalty: 10. });
        let node = astar_search(&penalised);
        assert_eq!(
            node.action_sequence().steps(),
            &[VacuumAction::Right, VacuumAction::Grab, VacuumAction::Suck]
        );
        assert_approx_eq!(node.cost().into_inner(), 3.0);
    }

    #[test]
    fn cell_goal_only_clears_one_cell() {
        let problem = vacuum_problem(scattered_world()).with_cell_goal(Position::new(2, 2));
        let node = breadth_first_graph_search(&problem);
        let state = node.state().unwrap();
        assert!(!state.has_item_at(Position::new(2, 2)));
        assert!(!state.is_clean());
        assert_eq!(node.action_sequence().len(), 3);
    }
}
