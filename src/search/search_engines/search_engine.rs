use crate::search::{
    search_engines::{AStar, BFS, DFS, GBFS},
    HeuristicSearchProblem, Plan, SearchProblem, SearchStatistics,
};
use clap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    ProvablyUnsolvable,
    /// The problem stopped the search early, so no conclusion can be drawn
    BoundExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The plan of a successful search, or the empty plan otherwise.
    pub fn into_plan(self) -> Plan<A> {
        match self {
            SearchResult::Success(plan) => plan,
            _ => Plan::empty(),
        }
    }
}

pub trait SearchEngine<S, A, P>
where
    P: SearchProblem<S, A>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<A>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfs", help = "Breadth-first search.")]
    BFS,
    #[clap(name = "dfs", help = "Depth-first search.")]
    DFS,
    #[clap(name = "gbfs", help = "Greedy best-first search.")]
    GBFS,
    #[clap(name = "astar", help = "A* search.")]
    AStar,
}

impl SearchEngineName {
    pub fn search<S, A, P>(&self, problem: &P) -> (SearchResult<A>, SearchStatistics)
    where
        A: Clone,
        P: HeuristicSearchProblem<S, A>,
    {
        match self {
            SearchEngineName::BFS => SearchEngine::<S, A, P>::search(&mut BFS::new(), problem),
            SearchEngineName::DFS => SearchEngine::<S, A, P>::search(&mut DFS::new(), problem),
            SearchEngineName::GBFS => SearchEngine::<S, A, P>::search(&mut GBFS::new(), problem),
            SearchEngineName::AStar => SearchEngine::<S, A, P>::search(&mut AStar::new(), problem),
        }
    }
}
