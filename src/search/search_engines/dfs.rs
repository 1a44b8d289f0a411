//! Depth first search

use crate::search::{
    frontier::LifoFrontier,
    search_engines::{uninformed_search::uninformed_search, SearchEngine, SearchResult},
    SearchProblem, SearchStatistics,
};

/// Depth-first search. The most recently generated node is expanded next.
/// There is no guarantee on plan length or cost, and on an infinite state
/// space the search may never return unless the problem is bounded, see
/// [`crate::search::problem_formulations::BoundedProblem`].
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, A, P> SearchEngine<S, A, P> for DFS
where
    A: Clone,
    P: SearchProblem<S, A>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<A>, SearchStatistics) {
        uninformed_search(problem, LifoFrontier::new())
    }
}
