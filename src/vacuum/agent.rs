//! A problem-solving vacuum agent: it turns each percept into a plan with one
//! of the search engines and hands out the plan one action at a time.

use crate::search::{
    search_engines::{SearchEngineName, TerminationCondition},
    Problem,
};
use crate::vacuum::{
    CostModel, Environment, HeuristicModel, VacuumAction, VacuumProblem, VacuumState,
    WorldObserver,
};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, time::Duration};
use strum_macros::Display;
use tracing::{info, warn};

/// What the agent plans for each time it runs out of actions.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GoalFormulation {
    /// Clean the whole grid in one plan.
    #[default]
    AllClean,
    /// Clear the item cell nearest to the agent, then plan again.
    NearestItem,
}

/// Settings the agent builds each [`VacuumProblem`] with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProblemSettings {
    pub cost_model: CostModel,
    pub heuristic_model: HeuristicModel,
    pub allow_noop: bool,
}

/// Budget applied to every individual search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBudget {
    pub time_limit: Option<Duration>,
    pub node_limit: Option<usize>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchBudget {
    pub fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(self.time_limit, self.node_limit, self.memory_limit_mb)
    }
}

#[derive(Debug)]
pub struct VacuumAgent {
    state: Option<VacuumState>,
    plan: VecDeque<VacuumAction>,
    engine: SearchEngineName,
    goal_formulation: GoalFormulation,
    settings: ProblemSettings,
    budget: SearchBudget,
}

impl VacuumAgent {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            state: None,
            plan: VecDeque::new(),
            engine,
            goal_formulation: GoalFormulation::default(),
            settings: ProblemSettings::default(),
            budget: SearchBudget::default(),
        }
    }

    pub fn with_goal_formulation(mut self, goal_formulation: GoalFormulation) -> Self {
        self.goal_formulation = goal_formulation;
        self
    }

    pub fn with_settings(mut self, settings: ProblemSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// The actions still queued from the last plan.
    pub fn pending_actions(&self) -> impl Iterator<Item = &VacuumAction> {
        self.plan.iter()
    }

    fn formulate_problem(&self, state: VacuumState) -> VacuumProblem {
        let target = match self.goal_formulation {
            GoalFormulation::AllClean => None,
            GoalFormulation::NearestItem => state.nearest_item(),
        };
        let problem = VacuumProblem::new(state)
            .with_cost_model(self.settings.cost_model)
            .with_heuristic_model(self.settings.heuristic_model)
            .with_noop(self.settings.allow_noop);
        match target {
            Some(cell) => problem.with_cell_goal(cell),
            None => problem,
        }
    }

    fn search(&self, problem: &VacuumProblem) -> VecDeque<VacuumAction> {
        info!(engine = %self.engine, "searching for a solution");
        let (node, _statistics) = self
            .engine
            .search(problem, &mut self.budget.termination_condition());
        if let Some(reason) = node.failure_reason() {
            warn!(?reason, "no plan found");
            return VecDeque::new();
        }
        let plan = node.action_sequence();
        if !plan.is_empty() {
            info!(plan = %plan, cost = node.cost().into_inner(), "solution found");
        }
        plan.into_iter().collect()
    }

    /// Decide on the next action for `percept`. Plans again whenever the
    /// previous plan has been used up; returns `None` when there is nothing to
    /// do or no plan could be found.
    pub fn next_action(&mut self, percept: VacuumState) -> Option<VacuumAction> {
        if self.plan.is_empty() {
            let problem = self.formulate_problem(percept.clone());
            if problem.goal_test(problem.initial_state()) {
                self.state = Some(percept);
                return None;
            }
            self.plan = self.search(&problem);
        }
        self.state = Some(percept);
        self.plan.pop_front()
    }

    /// The most recent percept.
    pub fn state(&self) -> Option<&VacuumState> {
        self.state.as_ref()
    }

    /// Drive `environment` for at most `max_steps` actions, stopping early when
    /// the agent has nothing left to do. Returns the number of actions
    /// executed.
    pub fn run<O: WorldObserver>(
        &mut self,
        environment: &mut Environment<O>,
        max_steps: usize,
    ) -> usize {
        let mut steps = 0;
        while steps < max_steps {
            let Some(action) = self.next_action(environment.percept()) else {
                break;
            };
            environment.execute_action(action);
            steps += 1;
        }
        steps
    }
}
