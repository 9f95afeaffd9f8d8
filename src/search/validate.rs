use crate::search::{Plan, Problem};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach the goal, final state is: {state}")]
    GoalNotReached { state: String },
}

/// Replay `plan` from the initial state of `problem`. Every step must be one
/// of the actions the problem lists for the state it is applied in, and the
/// final state must satisfy the goal.
pub fn validate<P: Problem>(problem: &P, plan: &Plan<P::Action>) -> Result<(), ValidationError> {
    let mut cur_state = problem.initial_state().clone();
    for (step, action) in plan.steps().iter().enumerate() {
        if !problem.actions(&cur_state).contains(action) {
            return Err(ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            });
        }
        cur_state = problem.result(&cur_state, action);
    }

    if !problem.goal_test(&cur_state) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(())
}
