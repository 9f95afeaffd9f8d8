use crate::search::{HeuristicValue, NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};
use std::{
    fmt::{self, Debug, Formatter},
    hash::{BuildHasher, Hash, RandomState},
};

/// A [`SearchSpace`] is an arena for the states and nodes generated during a
/// search. Node `i` and state `i` belong together. Nodes refer to their parent
/// by [`NodeId`], so a parent lives as long as the arena does and the same
/// state may appear under several nodes.
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    state_build_hasher: RandomState,
}

impl<S, A> Debug for SearchSpace<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl<S: Hash, A> SearchSpace<S, A> {
    /// Create a search space holding only the root node for `initial_state`.
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        nodes.push(SearchNode::new_without_parent(NodeId::new(0)));
        states.push(initial_state);

        Self {
            nodes,
            states,
            state_build_hasher: RandomState::new(),
        }
    }

    /// The hash used for duplicate detection. It is derived from the full
    /// state, so equal states always share a hash.
    #[inline(always)]
    pub fn hash_state(&self, state: &S) -> u64 {
        self.state_build_hasher.hash_one(state)
    }

    pub fn insert_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
        g: HeuristicValue,
    ) -> &mut SearchNode<A> {
        let node_id = NodeId::new(self.nodes.len());
        self.states.push(state);
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, action, g));
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_id())
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Ids of the path from the root to `node_id`, root excluded.
    fn path_to(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = vec![];
        let mut current_node = self.get_node(node_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            path.push(current_node.get_node_id());
            current_node = self.get_node(parent_id);
        }
        path.reverse();
        path
    }

    pub fn depth(&self, node_id: NodeId) -> usize {
        let mut depth = 0;
        let mut current_node = self.get_node(node_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            depth += 1;
            current_node = self.get_node(parent_id);
        }
        depth
    }
}

impl<S: Hash, A: Clone> SearchSpace<S, A> {
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let steps = self
            .path_to(goal_id)
            .into_iter()
            .filter_map(|id| self.get_node(id).get_action().cloned())
            .collect();
        Plan::new(steps)
    }
}

impl<S: Hash + Clone, A> SearchSpace<S, A> {
    pub fn extract_states(&self, goal_id: NodeId) -> Vec<S> {
        self.path_to(goal_id)
            .into_iter()
            .map(|id| self.get_state(id).clone())
            .collect()
    }
}
