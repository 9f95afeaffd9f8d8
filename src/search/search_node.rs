use crate::search::HeuristicValue;
use ordered_float::{Float, OrderedFloat};

/// Index of a node in a [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
    /// A cheaper node for the same state was found after this one was opened.
    /// Superseded nodes are skipped when popped.
    Superseded,
}

/// A [`SearchNode`] is a node in the search tree. It stores the provenance of
/// its state (parent and action) along with the values the search engines
/// order the frontier by. The state itself lives next to the node in the
/// search space.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Parent node, `None` for the root
    parent_id: Option<NodeId>,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the accumulated path cost.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Uninformed searches leave this at zero.
    h: HeuristicValue,
    /// F-value of the node, different depending on the search algorithm.
    f: HeuristicValue,
}

impl<A> SearchNode<A> {
    /// Create the root node of a search. For all other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            parent_id: None,
            action: None,
            status: SearchNodeStatus::Open,
            g: OrderedFloat(0.),
            h: OrderedFloat(0.),
            f: HeuristicValue::infinity(),
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A, g: HeuristicValue) -> Self {
        debug_assert!(!g.into_inner().is_nan(), "path cost must not be NaN");
        Self {
            node_id,
            parent_id: Some(parent_id),
            action: Some(action),
            status: SearchNodeStatus::Open,
            g,
            h: OrderedFloat(0.),
            f: HeuristicValue::infinity(),
        }
    }

    pub fn set_h(&mut self, h: HeuristicValue) {
        self.h = h;
    }

    pub fn set_f(&mut self, f: HeuristicValue) {
        self.f = f;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn supersede(&mut self) {
        if self.status == SearchNodeStatus::Open {
            self.status = SearchNodeStatus::Superseded;
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
