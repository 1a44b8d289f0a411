//! An explicit directed graph with labelled, weighted edges and an optional
//! per-node heuristic. Graphs are described in JSON, for example
//!
//! ```json
//! {
//!   "nodes": ["A", "B"],
//!   "initial": "A",
//!   "goals": ["B"],
//!   "edges": [{ "from": "A", "to": "B", "action": "ab", "cost": 2.0 }],
//!   "heuristic": { "A": 1.0 }
//! }
//! ```
//!
//! Edge costs default to one and missing heuristic values to zero.

use crate::search::{Cost, HeuristicSearchProblem, SearchNode, SearchProblem, Successor};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub action: String,
    #[serde(default = "default_edge_cost")]
    pub cost: f64,
}

fn default_edge_cost() -> f64 {
    1.
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    pub initial: String,
    pub goals: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub heuristic: BTreeMap<String, f64>,
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0:?} is declared more than once")]
    DuplicateNode(String),
    #[error("node {0:?} is referenced but not declared")]
    UnknownNode(String),
    #[error("edge {from:?} -> {to:?} has invalid cost {cost}")]
    InvalidCost { from: String, to: String, cost: f64 },
    #[error("node {node:?} has invalid heuristic value {value}")]
    InvalidHeuristic { node: String, value: f64 },
    #[error("failed to parse graph: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    to: usize,
    action: String,
    cost: Cost,
}

/// States are node indices in declaration order, actions are edge labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    names: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
    heuristic: Vec<Cost>,
    is_goal: Vec<bool>,
    initial: usize,
}

impl WeightedGraph {
    pub fn from_spec(spec: &GraphSpec) -> Result<Self, GraphError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (node_index, name) in spec.nodes.iter().enumerate() {
            if index.insert(name.as_str(), node_index).is_some() {
                return Err(GraphError::DuplicateNode(name.clone()));
            }
        }
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
        };

        let initial = lookup(&spec.initial)?;

        let mut is_goal = vec![false; spec.nodes.len()];
        for goal in &spec.goals {
            is_goal[lookup(goal)?] = true;
        }

        let mut adjacency = vec![vec![]; spec.nodes.len()];
        for edge in &spec.edges {
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            if !edge.cost.is_finite() || edge.cost < 0. {
                return Err(GraphError::InvalidCost {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    cost: edge.cost,
                });
            }
            adjacency[from].push(Edge {
                to,
                action: edge.action.clone(),
                cost: OrderedFloat(edge.cost),
            });
        }

        let mut heuristic = vec![OrderedFloat(0.); spec.nodes.len()];
        for (node, &value) in &spec.heuristic {
            if !value.is_finite() || value < 0. {
                return Err(GraphError::InvalidHeuristic {
                    node: node.clone(),
                    value,
                });
            }
            heuristic[lookup(node)?] = OrderedFloat(value);
        }

        Ok(Self {
            names: spec.nodes.clone(),
            adjacency,
            heuristic,
            is_goal,
            initial,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        let spec: GraphSpec = serde_json::from_str(text)?;
        Self::from_spec(&spec)
    }

    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn node_name(&self, node: usize) -> &str {
        &self.names[node]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl SearchProblem<usize, String> for WeightedGraph {
    type Key = usize;

    fn initial_state(&self) -> usize {
        self.initial
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.is_goal[*state]
    }

    fn expand(&self, node: &SearchNode<usize, String>) -> Vec<Successor<usize, String>> {
        self.adjacency[*node.get_state()]
            .iter()
            .map(|edge| Successor::new(edge.to, edge.action.clone(), edge.cost))
            .collect()
    }

    fn hashable_state(&self, state: &usize) -> usize {
        *state
    }
}

impl HeuristicSearchProblem<usize, String> for WeightedGraph {
    fn estimated_cost(&self, state: &usize) -> Cost {
        self.heuristic[*state]
    }
}
