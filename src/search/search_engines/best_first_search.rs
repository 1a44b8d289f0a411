//! The search loop shared by greedy best-first search and A*. Both pop the
//! node with the lowest evaluation, ties going to the earliest inserted node.

use crate::search::{
    frontier::PriorityFrontier, search_engines::SearchResult, Cost, HeuristicSearchProblem, Plan,
    ReachedSet, SearchNode, SearchSpace, SearchStatistics,
};
use tracing::{debug, info, trace};

/// How a node is ranked in the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Evaluation {
    /// h(n), ignoring the cost accumulated so far
    Heuristic,
    /// g(n) + h(n)
    PathCostPlusHeuristic,
}

impl Evaluation {
    fn evaluate<S, A, P>(
        &self,
        problem: &P,
        node: &SearchNode<S, A>,
        statistics: &mut SearchStatistics,
    ) -> Cost
    where
        P: HeuristicSearchProblem<S, A>,
    {
        let h = problem.estimated_cost(node.get_state());
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(h);
        match self {
            Evaluation::Heuristic => h,
            Evaluation::PathCostPlusHeuristic => node.get_path_cost() + h,
        }
    }
}

/// Goals are detected when popped from the frontier, not when generated. A
/// state is marked as reached when first generated and is never reopened, even
/// if a cheaper path to it turns up later.
pub(super) fn best_first_search<S, A, P>(
    problem: &P,
    evaluation: Evaluation,
) -> (SearchResult<A>, SearchStatistics)
where
    A: Clone,
    P: HeuristicSearchProblem<S, A>,
{
    problem.begin_search();
    let mut statistics = SearchStatistics::new();
    let mut search_space = SearchSpace::new(problem.initial_state());
    let root_id = search_space.root_node_id();

    if problem.is_goal(search_space.get_root_node().get_state()) {
        info!("initial state is a goal");
        statistics.finalise_search();
        return (SearchResult::Success(Plan::empty()), statistics);
    }

    let mut reached = ReachedSet::new();
    let mut frontier = PriorityFrontier::new();
    reached.insert(problem.hashable_state(search_space.get_root_node().get_state()));
    let root_priority = evaluation.evaluate(problem, search_space.get_root_node(), &mut statistics);
    frontier.push(root_id, root_priority);

    while let Some((node_id, priority)) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if problem.is_goal(node.get_state()) {
            debug!(
                path_cost = node.get_path_cost().into_inner(),
                "goal popped from frontier"
            );
            statistics.finalise_search();
            return (
                SearchResult::Success(search_space.extract_plan(node_id)),
                statistics,
            );
        }

        let successors = problem.expand(node);
        if problem.bound_exceeded() {
            break;
        }
        statistics.increment_expanded_nodes();
        trace!(
            node_id = node_id.id(),
            priority = priority.into_inner(),
            successors = successors.len(),
            "expanded"
        );
        statistics.increment_generated_nodes(successors.len());

        for successor in successors {
            if !reached.insert(problem.hashable_state(&successor.state)) {
                statistics.increment_duplicate_nodes();
                continue;
            }
            let child_id = search_space.insert_child(node_id, successor);
            let child_priority =
                evaluation.evaluate(problem, search_space.get_node(child_id), &mut statistics);
            frontier.push(child_id, child_priority);
        }
    }

    statistics.finalise_search();
    if problem.bound_exceeded() {
        info!("search stopped by problem bound");
        (SearchResult::BoundExceeded, statistics)
    } else {
        info!(reached_states = reached.len(), "frontier exhausted");
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
