//! Fixtures shared by the unit tests.

use crate::search::{ActionList, HeuristicValue, Problem};
use crate::vacuum::{Position, VacuumProblem, VacuumState};
use ordered_float::OrderedFloat;
use smallvec::smallvec;

pub const SCENARIO_TOML: &str = r#"
[world]
width = 3
height = 2
agent = [0, 0]
dirt = [[2, 1]]
jewels = [[1, 0]]

[problem]
cost-model = { jewel-penalty = { penalty = 10.0 } }
heuristic = "nearest-item"
allow-noop = true

[search]
engine = "greedy"
time-limit = "2s"
node-limit = 5000
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Back,
    Forward,
    Wait,
}

/// Walk along positions `0..length`; the goal is a single position.
#[derive(Debug)]
pub struct LineProblem {
    length: usize,
    start: usize,
    goal: usize,
    allow_wait: bool,
}

impl LineProblem {
    pub fn new(length: usize, goal: usize) -> Self {
        Self::starting_at(length, 0, goal)
    }

    pub fn starting_at(length: usize, start: usize, goal: usize) -> Self {
        Self {
            length,
            start,
            goal,
            allow_wait: false,
        }
    }

    /// Also offer a zero-cost `Wait` that stays in place.
    pub fn with_wait(mut self) -> Self {
        self.allow_wait = true;
        self
    }
}

impl Problem for LineProblem {
    type State = usize;
    type Action = Step;

    fn initial_state(&self) -> &usize {
        &self.start
    }

    fn actions(&self, state: &usize) -> ActionList<Step> {
        let mut actions = ActionList::new();
        if *state > 0 {
            actions.push(Step::Back);
        }
        if *state + 1 < self.length {
            actions.push(Step::Forward);
        }
        if self.allow_wait {
            actions.push(Step::Wait);
        }
        actions
    }

    fn result(&self, state: &usize, action: &Step) -> usize {
        match action {
            Step::Back => state - 1,
            Step::Forward => state + 1,
            Step::Wait => *state,
        }
    }

    fn goal_test(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn cost(&self, _current: &usize, action: &Step, _future: &usize) -> HeuristicValue {
        match action {
            Step::Wait => OrderedFloat(0.),
            _ => OrderedFloat(1.),
        }
    }
}

/// A problem with no applicable actions and an unreachable goal.
#[derive(Debug)]
pub struct DeadEndProblem;

impl Problem for DeadEndProblem {
    type State = u8;
    type Action = ();

    fn initial_state(&self) -> &u8 {
        &0
    }

    fn actions(&self, _state: &u8) -> ActionList<()> {
        smallvec![]
    }

    fn result(&self, state: &u8, _action: &()) -> u8 {
        *state
    }

    fn goal_test(&self, _state: &u8) -> bool {
        false
    }
}

/// A directed graph over named vertices. Actions name the target vertex.
#[derive(Debug)]
pub struct GraphProblem {
    start: char,
    goal: char,
    edges: Vec<(char, char, f64)>,
    heuristic: Vec<(char, f64)>,
}

impl Problem for GraphProblem {
    type State = char;
    type Action = char;

    fn initial_state(&self) -> &char {
        &self.start
    }

    fn actions(&self, state: &char) -> ActionList<char> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, _)| to)
            .collect()
    }

    fn result(&self, _state: &char, action: &char) -> char {
        *action
    }

    fn goal_test(&self, state: &char) -> bool {
        *state == self.goal
    }

    fn cost(&self, current: &char, action: &char, _future: &char) -> HeuristicValue {
        self.edges
            .iter()
            .find(|(from, to, _)| from == current && to == action)
            .map(|&(_, _, cost)| OrderedFloat(cost))
            .expect("action must follow an edge")
    }

    fn heuristic(&self, state: &char) -> HeuristicValue {
        self.heuristic
            .iter()
            .find(|(vertex, _)| vertex == state)
            .map(|&(_, h)| OrderedFloat(h))
            .unwrap_or(OrderedFloat(0.))
    }
}

/// `S -1-> A -1-> C -1-> G` next to a direct but expensive `S -4-> C`. With an
/// admissible heuristic the cheap route reaches `C` second.
pub fn detour_graph(with_goal_edge: bool) -> GraphProblem {
    let mut edges = vec![('S', 'A', 1.), ('S', 'C', 4.), ('A', 'C', 1.)];
    if with_goal_edge {
        edges.push(('C', 'G', 1.));
    }
    GraphProblem {
        start: 'S',
        goal: 'G',
        edges,
        heuristic: vec![('S', 2.), ('A', 2.), ('C', 1.), ('G', 0.)],
    }
}

/// The 2x2 world with the agent at (0,0) and one dirt at (1,1).
pub fn two_by_two_world() -> VacuumState {
    VacuumState::new(2, 2, Position::new(0, 0))
        .and_then(|state| state.with_dirt(Position::new(1, 1)))
        .expect("valid world")
}

/// A 4x4 world with dirt and jewels scattered around the agent.
pub fn scattered_world() -> VacuumState {
    VacuumState::new(4, 4, Position::new(1, 1))
        .and_then(|state| state.with_dirt(Position::new(3, 0)))
        .and_then(|state| state.with_dirt(Position::new(0, 3)))
        .and_then(|state| state.with_jewel(Position::new(3, 3)))
        .and_then(|state| state.with_jewel(Position::new(0, 0)))
        .and_then(|state| state.with_dirt(Position::new(2, 2)))
        .expect("valid world")
}

pub fn vacuum_problem(state: VacuumState) -> VacuumProblem {
    VacuumProblem::new(state)
}
