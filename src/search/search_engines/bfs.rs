//! Breadth first search

use crate::search::{
    frontier::FifoFrontier,
    search_engines::{uninformed_search::uninformed_search, SearchEngine, SearchResult},
    SearchProblem, SearchStatistics,
};

/// Breadth-first search. With unit step costs the returned plan has the fewest
/// actions of any plan; with other costs nothing is guaranteed about its cost.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, A, P> SearchEngine<S, A, P> for BFS
where
    A: Clone,
    P: SearchProblem<S, A>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<A>, SearchStatistics) {
        uninformed_search(problem, FifoFrontier::new())
    }
}
