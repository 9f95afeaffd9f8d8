//! The vacuum world: a grid with dirt, jewels and one cleaning agent.

mod action;
mod agent;
mod environment;
mod error;
mod position;
mod problem;
mod state;

pub use action::VacuumAction;
pub use agent::{GoalFormulation, ProblemSettings, SearchBudget, VacuumAgent};
pub use environment::{Environment, NullObserver, TracingObserver, WorldObserver};
pub use error::WorldError;
pub use position::Position;
pub use problem::{CostModel, HeuristicModel, VacuumProblem};
pub use state::{ActionEffect, Thing, VacuumState};
