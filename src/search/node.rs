//! The value every search engine hands back to its caller.

use crate::search::{HeuristicValue, NodeId, Plan, SearchSpace};
use ordered_float::Float;
use std::{
    fmt::{self, Display, Formatter},
    hash::Hash,
    rc::Rc,
};

/// Why a search ended without reaching a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The frontier ran empty.
    Exhausted,
    TimeLimitExceeded,
    NodeLimitExceeded,
    MemoryLimitExceeded,
}

/// A terminal search node. A reached node shares the search space it was
/// found in, which keeps its whole parent chain alive; the failure sentinel
/// has no state and infinite cost.
#[derive(Debug)]
pub enum Node<S, A> {
    Reached {
        space: Rc<SearchSpace<S, A>>,
        id: NodeId,
    },
    Failed(FailureReason),
}

impl<S, A> Clone for Node<S, A> {
    fn clone(&self) -> Self {
        match self {
            Node::Reached { space, id } => Node::Reached {
                space: Rc::clone(space),
                id: *id,
            },
            Node::Failed(reason) => Node::Failed(*reason),
        }
    }
}

impl<S: Hash, A> Node<S, A> {
    pub fn reached(space: SearchSpace<S, A>, id: NodeId) -> Self {
        Node::Reached {
            space: Rc::new(space),
            id,
        }
    }

    pub fn failed(reason: FailureReason) -> Self {
        Node::Failed(reason)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Node::Failed(_))
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Node::Reached { .. } => None,
            Node::Failed(reason) => Some(*reason),
        }
    }

    pub fn state(&self) -> Option<&S> {
        match self {
            Node::Reached { space, id } => Some(space.get_state(*id)),
            Node::Failed(_) => None,
        }
    }

    /// The action that led here, `None` for a root or the failure sentinel.
    pub fn action(&self) -> Option<&A> {
        match self {
            Node::Reached { space, id } => space.get_node(*id).get_action(),
            Node::Failed(_) => None,
        }
    }

    /// Accumulated path cost, infinite for the failure sentinel.
    pub fn cost(&self) -> HeuristicValue {
        match self {
            Node::Reached { space, id } => space.get_node(*id).get_g(),
            Node::Failed(_) => HeuristicValue::infinity(),
        }
    }

    pub fn parent(&self) -> Option<Self> {
        match self {
            Node::Reached { space, id } => {
                space
                    .get_node(*id)
                    .get_parent_id()
                    .map(|parent_id| Node::Reached {
                        space: Rc::clone(space),
                        id: parent_id,
                    })
            }
            Node::Failed(_) => None,
        }
    }

    /// Number of actions between the root and this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Reached { space, id } => space.depth(*id),
            Node::Failed(_) => 0,
        }
    }
}

impl<S: Hash, A: Clone> Node<S, A> {
    /// The actions from the root to this node. Empty for the root and the
    /// failure sentinel.
    pub fn action_sequence(&self) -> Plan<A> {
        match self {
            Node::Reached { space, id } => space.extract_plan(*id),
            Node::Failed(_) => Plan::empty(),
        }
    }
}

impl<S: Hash + Clone, A> Node<S, A> {
    /// The states visited after the root, ending with this node's state.
    pub fn state_sequence(&self) -> Vec<S> {
        match self {
            Node::Reached { space, id } => space.extract_states(*id),
            Node::Failed(_) => vec![],
        }
    }
}

impl<S: Hash + Display, A> Display for Node<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.state() {
            Some(state) => write!(f, "{}", state),
            None => write!(f, "FAILED"),
        }
    }
}
