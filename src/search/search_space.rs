use crate::search::{NodeId, Plan, SearchNode, Successor};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] is the arena holding every node created during one
/// search. Nodes refer to their parents by [`NodeId`], so the parent chain of
/// any node can be walked back to the root without borrowing across nodes.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    /// Create a search space containing only the root node for the given
    /// state.
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(NodeId::new(0), initial_state));
        Self { nodes }
    }

    /// Create a child of `parent_id` from one of its successors. The child's
    /// path cost is the parent's path cost plus the successor's step cost.
    pub fn insert_child(&mut self, parent_id: NodeId, successor: Successor<S, A>) -> NodeId {
        let path_cost = self.get_node(parent_id).get_path_cost() + successor.cost;
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_with_parent(
            node_id,
            successor.state,
            parent_id,
            successor.action,
            path_cost,
        ));
        node_id
    }

    #[inline(always)]
    pub fn root_node_id(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(self.root_node_id())
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a search space holds its root from creation on.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// Collect the actions on the path from the root to the given node, in
    /// the order they were taken.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use ordered_float::OrderedFloat;

    #[test]
    fn root_has_no_parent_and_zero_cost() {
        let space: SearchSpace<u32, &str> = SearchSpace::new(7);
        let root = space.get_root_node();
        assert!(root.is_root());
        assert_eq!(root.get_state(), &7);
        assert_eq!(root.get_action(), None);
        assert_eq!(root.get_path_cost(), OrderedFloat(0.));
        assert_eq!(space.len(), 1);
        assert!(!space.is_empty());
    }

    #[test]
    fn child_accumulates_path_cost() {
        let mut space = SearchSpace::new(0);
        let root = space.root_node_id();
        let a = space.insert_child(root, Successor::new(1, "a", OrderedFloat(1.5)));
        let b = space.insert_child(a, Successor::new(2, "b", OrderedFloat(2.25)));

        assert_approx_eq!(space.get_node(b).get_path_cost().into_inner(), 3.75);
        assert_eq!(space.get_node(b).get_parent_id(), Some(a));
        assert_eq!(space.get_node(a).get_parent_id(), Some(root));
    }

    #[test]
    fn extract_plan_orders_actions_from_root() {
        let mut space = SearchSpace::new(0);
        let root = space.root_node_id();
        let a = space.insert_child(root, Successor::unit(1, "first"));
        let _sibling = space.insert_child(root, Successor::unit(5, "sibling"));
        let b = space.insert_child(a, Successor::unit(2, "second"));
        let c = space.insert_child(b, Successor::unit(3, "third"));

        assert_eq!(
            space.extract_plan(c).steps(),
            &["first", "second", "third"]
        );
    }

    #[test]
    fn extract_plan_of_root_is_empty() {
        let space: SearchSpace<u32, &str> = SearchSpace::new(0);
        assert!(space.extract_plan(space.root_node_id()).is_empty());
    }
}
