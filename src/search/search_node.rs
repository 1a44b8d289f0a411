use crate::search::Cost;
use ordered_float::OrderedFloat;

/// Handle of a node inside a [`crate::search::SearchSpace`]. Handles are only
/// meaningful for the search space that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchNode`] records how a state was first reached: the parent node,
/// the action taken from it and the accumulated path cost from the root.
/// Nodes are created once by the search space and never modified afterwards.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Identifier of the node in its search space
    node_id: NodeId,
    /// The state this node reached
    state: S,
    /// Parent node, `None` only for the root
    parent_id: Option<NodeId>,
    /// Action that led to this node, `None` only for the root
    action: Option<A>,
    /// Sum of step costs from the root to this node
    path_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search. For all other nodes see
    /// [`SearchNode::new_with_parent`].
    pub(crate) fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent_id: None,
            action: None,
            path_cost: OrderedFloat(0.),
        }
    }

    pub(crate) fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent_id: NodeId,
        action: A,
        path_cost: Cost,
    ) -> Self {
        Self {
            node_id,
            state,
            parent_id: Some(parent_id),
            action: Some(action),
            path_cost,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
