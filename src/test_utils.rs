use crate::problems::WeightedGraph;
use crate::search::{Cost, HeuristicSearchProblem, SearchNode, SearchProblem, Successor};
use ordered_float::OrderedFloat;
use std::cell::Cell;

/// A -> B -> D costs 2, A -> C -> D costs 6.
pub const SCENARIO_GRAPH_JSON: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "initial": "A",
    "goals": ["D"],
    "edges": [
        {"from": "A", "to": "B", "action": "ab", "cost": 1},
        {"from": "A", "to": "C", "action": "ac", "cost": 1},
        {"from": "B", "to": "D", "action": "bd", "cost": 1},
        {"from": "C", "to": "D", "action": "cd", "cost": 5}
    ],
    "heuristic": {"A": 2, "B": 1, "C": 1, "D": 0}
}"#;

/// B looks closer to the goal than C but is reached through an expensive
/// edge.
pub const GREEDY_TRAP_GRAPH_JSON: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "initial": "A",
    "goals": ["D"],
    "edges": [
        {"from": "A", "to": "B", "action": "ab", "cost": 10},
        {"from": "A", "to": "C", "action": "ac", "cost": 1},
        {"from": "B", "to": "D", "action": "bd", "cost": 1},
        {"from": "C", "to": "D", "action": "cd", "cost": 1}
    ],
    "heuristic": {"A": 2, "B": 0.5, "C": 1, "D": 0}
}"#;

/// The goal G is a direct child of A but its estimate is worse than that of
/// the detour through X and Y.
pub const LATE_GOAL_GRAPH_JSON: &str = r#"{
    "nodes": ["A", "G", "X", "Y"],
    "initial": "A",
    "goals": ["G"],
    "edges": [
        {"from": "A", "to": "G", "action": "ag"},
        {"from": "A", "to": "X", "action": "ax"},
        {"from": "X", "to": "Y", "action": "xy"},
        {"from": "Y", "to": "G", "action": "yg"}
    ],
    "heuristic": {"A": 1, "G": 3, "X": 0, "Y": 0}
}"#;

/// A and B form a cycle, the goal C cannot be reached.
pub const UNREACHABLE_GRAPH_JSON: &str = r#"{
    "nodes": ["A", "B", "C"],
    "initial": "A",
    "goals": ["C"],
    "edges": [
        {"from": "A", "to": "B", "action": "ab"},
        {"from": "B", "to": "A", "action": "ba"},
        {"from": "C", "to": "A", "action": "ca"}
    ]
}"#;

pub const INITIAL_GOAL_GRAPH_JSON: &str = r#"{
    "nodes": ["A", "B"],
    "initial": "A",
    "goals": ["A"],
    "edges": [{"from": "A", "to": "B", "action": "ab"}]
}"#;

/// Going through the rough tiles takes 3 moves costing 7, going around them
/// takes 5 moves costing 5.
pub const ROUGH_DETOUR_MAZE: &str = "....\nS~~G";

pub fn scenario_graph() -> WeightedGraph {
    WeightedGraph::from_json(SCENARIO_GRAPH_JSON).unwrap()
}

pub fn greedy_trap_graph() -> WeightedGraph {
    WeightedGraph::from_json(GREEDY_TRAP_GRAPH_JSON).unwrap()
}

pub fn late_goal_graph() -> WeightedGraph {
    WeightedGraph::from_json(LATE_GOAL_GRAPH_JSON).unwrap()
}

pub fn unreachable_graph() -> WeightedGraph {
    WeightedGraph::from_json(UNREACHABLE_GRAPH_JSON).unwrap()
}

pub fn initial_goal_graph() -> WeightedGraph {
    WeightedGraph::from_json(INITIAL_GOAL_GRAPH_JSON).unwrap()
}

/// Delegates to another problem, counting calls to `expand`.
#[derive(Debug)]
pub struct CountingProblem<P> {
    inner: P,
    expansions: Cell<usize>,
}

impl<P> CountingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expansions: Cell::new(0),
        }
    }

    pub fn expansions(&self) -> usize {
        self.expansions.get()
    }
}

impl<S, A, P: SearchProblem<S, A>> SearchProblem<S, A> for CountingProblem<P> {
    type Key = P::Key;

    fn initial_state(&self) -> S {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &S) -> bool {
        self.inner.is_goal(state)
    }

    fn expand(&self, node: &SearchNode<S, A>) -> Vec<Successor<S, A>> {
        self.expansions.set(self.expansions.get() + 1);
        self.inner.expand(node)
    }

    fn hashable_state(&self, state: &S) -> Self::Key {
        self.inner.hashable_state(state)
    }

    fn begin_search(&self) {
        self.inner.begin_search()
    }

    fn bound_exceeded(&self) -> bool {
        self.inner.bound_exceeded()
    }
}

impl<S, A, P: HeuristicSearchProblem<S, A>> HeuristicSearchProblem<S, A> for CountingProblem<P> {
    fn estimated_cost(&self, state: &S) -> Cost {
        self.inner.estimated_cost(state)
    }
}

/// The integers, where every number has the successors `n + 1` ("inc") and
/// `n - 1` ("dec"), in that order. Without a goal the search never ends on its
/// own.
#[derive(Debug, Clone)]
pub struct NumberLine {
    goal: Option<i64>,
}

impl NumberLine {
    pub fn with_goal(goal: i64) -> Self {
        Self { goal: Some(goal) }
    }

    pub fn without_goal() -> Self {
        Self { goal: None }
    }
}

impl SearchProblem<i64, &'static str> for NumberLine {
    type Key = i64;

    fn initial_state(&self) -> i64 {
        0
    }

    fn is_goal(&self, state: &i64) -> bool {
        self.goal == Some(*state)
    }

    fn expand(&self, node: &SearchNode<i64, &'static str>) -> Vec<Successor<i64, &'static str>> {
        let n = *node.get_state();
        vec![Successor::unit(n + 1, "inc"), Successor::unit(n - 1, "dec")]
    }

    fn hashable_state(&self, state: &i64) -> i64 {
        *state
    }
}

impl HeuristicSearchProblem<i64, &'static str> for NumberLine {
    fn estimated_cost(&self, state: &i64) -> Cost {
        match self.goal {
            Some(goal) => OrderedFloat(goal.abs_diff(*state) as f64),
            None => OrderedFloat(0.),
        }
    }
}
