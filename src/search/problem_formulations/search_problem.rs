//! The problem formulation consumed by every search engine. A problem owns the
//! state space: the engine only ever sees states through these traits.

use crate::search::SearchNode;
use ordered_float::OrderedFloat;
use std::hash::Hash;

/// Path costs, step costs and heuristic estimates. Costs are never negative.
pub type Cost = OrderedFloat<f64>;

/// A single transition out of a node, as produced by
/// [`SearchProblem::expand`]. The cost is the cost of this one step; the
/// engine adds it to the parent's path cost when it creates the child node.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }

    /// A successor reached with unit step cost.
    pub fn unit(state: S, action: A) -> Self {
        Self::new(state, action, OrderedFloat(1.))
    }
}

pub trait SearchProblem<S, A> {
    /// Canonical projection of a state used to detect revisits. Two states
    /// with equal keys are the same state as far as the search is concerned.
    type Key: Hash + Eq;

    fn initial_state(&self) -> S;

    fn is_goal(&self, state: &S) -> bool;

    /// All transitions out of the given node. The result must be finite and
    /// deterministic in content.
    fn expand(&self, node: &SearchNode<S, A>) -> Vec<Successor<S, A>>;

    fn hashable_state(&self, state: &S) -> Self::Key;

    /// Called by every engine once, before the initial state is requested.
    /// Problems holding per-search bookkeeping reset it here.
    fn begin_search(&self) {}

    /// Whether the problem cut the search short, e.g. by refusing to expand
    /// further nodes. Lets engines tell an exhausted frontier apart from a
    /// truncated one.
    fn bound_exceeded(&self) -> bool {
        false
    }
}

/// A problem that can also estimate the remaining cost to a goal. The engine
/// does not check admissibility or consistency of the estimate.
pub trait HeuristicSearchProblem<S, A>: SearchProblem<S, A> {
    fn estimated_cost(&self, state: &S) -> Cost;
}
