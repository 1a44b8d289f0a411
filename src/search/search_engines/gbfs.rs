//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{
        best_first_search::{best_first_search, Evaluation},
        SearchEngine, SearchResult,
    },
    HeuristicSearchProblem, SearchStatistics,
};

/// Greedy best-first search: always expands the node whose state looks
/// closest to a goal according to the heuristic, ignoring the cost paid so
/// far. Neither complete on infinite spaces nor optimal.
#[derive(Debug, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, A, P> SearchEngine<S, A, P> for GBFS
where
    A: Clone,
    P: HeuristicSearchProblem<S, A>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<A>, SearchStatistics) {
        best_first_search(problem, Evaluation::Heuristic)
    }
}
