//! A* search

use crate::search::{
    search_engines::{
        best_first_search::{best_first_search, Evaluation},
        SearchEngine, SearchResult,
    },
    HeuristicSearchProblem, SearchStatistics,
};

/// A* search, ordering the frontier by path cost plus heuristic estimate.
///
/// States are never reopened: the first path found to a state is the one
/// kept, even if a cheaper one is generated later. With an admissible and
/// consistent heuristic whose cheapest paths are also the first generated this
/// gives optimal plans; in general the plan is optimal only among the paths
/// the first-reached policy retains.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, A, P> SearchEngine<S, A, P> for AStar
where
    A: Clone,
    P: HeuristicSearchProblem<S, A>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<A>, SearchStatistics) {
        best_first_search(problem, Evaluation::PathCostPlusHeuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{Direction, GridMaze, MazePreset};
    use crate::search::{search_engines::breadth_first_search, validate, Plan};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn astar<S, A: Clone, P: HeuristicSearchProblem<S, A>>(
        problem: &P,
    ) -> (SearchResult<A>, SearchStatistics) {
        SearchEngine::<S, A, P>::search(&mut AStar::new(), problem)
    }

    #[test]
    fn scenario_returns_cheapest_path() {
        let graph = scenario_graph();
        let plan = astar(&graph).0.into_plan();
        assert_eq!(plan.steps(), &["ab", "bd"]);
        assert_approx_eq!(validate(&plan, &graph).unwrap().into_inner(), 2.);
    }

    #[test]
    fn accounts_for_path_cost() {
        let graph = greedy_trap_graph();
        let plan = astar(&graph).0.into_plan();
        assert_eq!(plan.steps(), &["ac", "cd"]);
        assert_approx_eq!(validate(&plan, &graph).unwrap().into_inner(), 2.);
    }

    #[test]
    fn initial_goal_returns_empty_plan_without_expanding() {
        let problem = CountingProblem::new(initial_goal_graph());
        let (result, _) = astar(&problem);
        assert_eq!(result, SearchResult::Success(Plan::empty()));
        assert_eq!(problem.expansions(), 0);
    }

    #[test]
    fn unreachable_goal_is_provably_unsolvable() {
        let (result, _) = astar(&unreachable_graph());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn open_maze_plan_is_shortest() {
        let maze = GridMaze::preset(MazePreset::Open);
        let plan = astar(&maze).0.into_plan();
        assert_eq!(plan.len(), breadth_first_search(&maze).len());
        assert_eq!(plan.len(), 8);
    }

    #[test]
    fn maze_plans_replay_to_goal() {
        for preset in MazePreset::iter() {
            let maze = GridMaze::preset(preset);
            let plan = astar(&maze).0.into_plan();
            assert!(!plan.is_empty(), "{:?}", preset);
            assert!(validate(&plan, &maze).is_ok(), "{:?}", preset);
        }
    }

    #[test]
    fn never_costlier_than_breadth_first() {
        let maze = GridMaze::from_text(ROUGH_DETOUR_MAZE).unwrap();
        let astar_cost = validate(&astar(&maze).0.into_plan(), &maze).unwrap();
        let bfs_cost = validate(&breadth_first_search(&maze), &maze).unwrap();
        assert!(astar_cost <= bfs_cost);
        assert_approx_eq!(astar_cost.into_inner(), 5.);
        assert_approx_eq!(bfs_cost.into_inner(), 7.);
    }

    #[test]
    fn keeps_first_reached_path() {
        // The rough tile at (0, 1) is generated before the open tile below
        // the start, so (1, 1) is first reached through it and never
        // reopened. The cheaper detour along the bottom row is lost.
        let maze = GridMaze::from_text(
            "S~~G\n\
             ....",
        )
        .unwrap();
        let plan = astar(&maze).0.into_plan();
        assert_eq!(plan.steps(), &[Direction::East; 3]);
        assert_approx_eq!(validate(&plan, &maze).unwrap().into_inner(), 7.);
    }

    #[test]
    fn repeated_searches_agree() {
        let graph = scenario_graph();
        assert_eq!(astar(&graph).0, astar(&graph).0);
    }
}
