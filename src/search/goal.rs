//! Goal descriptions for problems whose goal is not a fixed property of the
//! domain.

use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// Either an exact target state or a predicate over states. The goal is typed
/// by the state it is tested against, so comparing states of different shapes
/// cannot happen.
#[derive(Clone)]
pub enum Goal<S> {
    /// The goal is reached when the state equals this one.
    State(S),
    /// The goal is reached when the predicate holds.
    Predicate(Rc<dyn Fn(&S) -> bool>),
}

impl<S> Goal<S> {
    pub fn predicate(predicate: impl Fn(&S) -> bool + 'static) -> Self {
        Goal::Predicate(Rc::new(predicate))
    }
}

impl<S: PartialEq> Goal<S> {
    pub fn is_satisfied(&self, state: &S) -> bool {
        match self {
            Goal::State(target) => target == state,
            Goal::Predicate(predicate) => predicate(state),
        }
    }
}

impl<S: Debug> Debug for Goal<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Goal::State(state) => f.debug_tuple("State").field(state).finish(),
            Goal::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_state_goal() {
        let goal = Goal::State(3);
        assert!(goal.is_satisfied(&3));
        assert!(!goal.is_satisfied(&4));
    }

    #[test]
    fn predicate_goal() {
        let goal = Goal::predicate(|n: &i32| n % 2 == 0);
        assert!(goal.is_satisfied(&4));
        assert!(!goal.is_satisfied(&5));
        assert_eq!(format!("{:?}", goal), "Predicate(..)");
    }
}
