mod bounded_problem;
mod search_problem;

pub use bounded_problem::BoundedProblem;
pub use search_problem::{Cost, HeuristicSearchProblem, SearchProblem, Successor};
