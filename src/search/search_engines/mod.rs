mod astar;
mod best_first_search;
mod bfs;
mod dfs;
mod gbfs;
mod search_engine;
mod uninformed_search;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};

use crate::search::{HeuristicSearchProblem, Plan, SearchProblem};

/// Run breadth-first search, returning the empty plan if no path exists.
pub fn breadth_first_search<S, A, P>(problem: &P) -> Plan<A>
where
    A: Clone,
    P: SearchProblem<S, A>,
{
    SearchEngine::<S, A, P>::search(&mut BFS::new(), problem)
        .0
        .into_plan()
}

/// Run depth-first search, returning the empty plan if no path exists.
pub fn depth_first_search<S, A, P>(problem: &P) -> Plan<A>
where
    A: Clone,
    P: SearchProblem<S, A>,
{
    SearchEngine::<S, A, P>::search(&mut DFS::new(), problem)
        .0
        .into_plan()
}

/// Run greedy best-first search, returning the empty plan if no path exists.
pub fn greedy_best_first_search<S, A, P>(problem: &P) -> Plan<A>
where
    A: Clone,
    P: HeuristicSearchProblem<S, A>,
{
    SearchEngine::<S, A, P>::search(&mut GBFS::new(), problem)
        .0
        .into_plan()
}

/// Run A* search, returning the empty plan if no path exists.
pub fn a_star_search<S, A, P>(problem: &P) -> Plan<A>
where
    A: Clone,
    P: HeuristicSearchProblem<S, A>,
{
    SearchEngine::<S, A, P>::search(&mut AStar::new(), problem)
        .0
        .into_plan()
}
