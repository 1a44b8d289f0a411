//! The search loop shared by breadth-first and depth-first search. The two
//! only differ in the order their frontier returns nodes.

use crate::search::{
    frontier::Frontier, search_engines::SearchResult, Plan, ReachedSet, SearchProblem,
    SearchSpace, SearchStatistics,
};
use tracing::{debug, info, trace};

/// Goals are detected as soon as they are generated, before they would enter
/// the frontier. States are marked as reached when generated, so each state
/// is enqueued at most once.
pub(super) fn uninformed_search<S, A, P, F>(
    problem: &P,
    mut frontier: F,
) -> (SearchResult<A>, SearchStatistics)
where
    A: Clone,
    P: SearchProblem<S, A>,
    F: Frontier,
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
    reached.insert(problem.hashable_state(search_space.get_root_node().get_state()));
    frontier.push(root_id);

    while let Some(node_id) = frontier.pop() {
        let successors = problem.expand(search_space.get_node(node_id));
        if problem.bound_exceeded() {
            break;
        }
        statistics.increment_expanded_nodes();
        trace!(node_id = node_id.id(), successors = successors.len(), "expanded");
        statistics.increment_generated_nodes(successors.len());

        for successor in successors {
            if problem.is_goal(&successor.state) {
                let goal_id = search_space.insert_child(node_id, successor);
                debug!(
                    path_cost = search_space.get_node(goal_id).get_path_cost().into_inner(),
                    "goal generated"
                );
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(goal_id)),
                    statistics,
                );
            }

            if reached.insert(problem.hashable_state(&successor.state)) {
                let child_id = search_space.insert_child(node_id, successor);
                frontier.push(child_id);
            } else {
                statistics.increment_duplicate_nodes();
            }
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
