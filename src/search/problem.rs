//! The abstract search problem. A [`Problem`] couples an initial state with a
//! goal test and the operations needed to explore the state space: applicable
//! actions, the transition function, transition costs and a heuristic
//! estimate.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::{fmt::Debug, hash::Hash};

/// Scores, costs and heuristic estimates. [`OrderedFloat`] gives us a total
/// order, which is what the priority frontier needs.
pub type HeuristicValue = OrderedFloat<f64>;

const TYPICAL_NUM_ACTIONS: usize = 8;
pub type ActionList<A> = SmallVec<[A; TYPICAL_NUM_ACTIONS]>;

pub trait Problem {
    /// A complete snapshot of the world. States are never mutated by the
    /// search engines, so two independently built states describing the same
    /// configuration must compare and hash equal.
    type State: Clone + Eq + Hash + Debug;
    /// An opaque action token.
    type Action: Clone + Eq + Debug;

    fn initial_state(&self) -> &Self::State;

    /// The legal actions in `state`, in a deterministic order.
    fn actions(&self, state: &Self::State) -> ActionList<Self::Action>;

    /// The state reached by applying `action` to `state`. Must not alter
    /// `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of the transition `current --action--> future`. Defaults to unit
    /// cost.
    fn cost(
        &self,
        _current: &Self::State,
        _action: &Self::Action,
        _future: &Self::State,
    ) -> HeuristicValue {
        OrderedFloat(1.)
    }

    /// Estimated remaining cost from `state` to a goal. Defaults to zero.
    fn heuristic(&self, _state: &Self::State) -> HeuristicValue {
        OrderedFloat(0.)
    }
}
