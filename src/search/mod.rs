pub mod frontier;
mod plan;
pub mod problem_formulations;
mod reached;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;

pub use plan::Plan;
pub use problem_formulations::{Cost, HeuristicSearchProblem, SearchProblem, Successor};
pub(crate) use reached::ReachedSet;
pub use search_engines::{
    a_star_search, breadth_first_search, depth_first_search, greedy_best_first_search,
};
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
