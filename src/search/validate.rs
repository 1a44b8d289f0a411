use crate::search::{Cost, Plan, SearchProblem, SearchSpace};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("action {action} at step {step} is not applicable")]
    NotApplicable { step: usize, action: String },
    #[error("plan does not reach a goal state after {steps} steps")]
    GoalNotReached { steps: usize },
}

/// Replay a plan from the initial state of the problem. Each step must match
/// the action of one of the successors of the current state; the first match
/// is taken. Returns the total cost of the plan if it ends in a goal state.
pub fn validate<S, A, P>(plan: &Plan<A>, problem: &P) -> Result<Cost, ValidationError>
where
    A: PartialEq + Debug,
    P: SearchProblem<S, A>,
{
    let mut search_space = SearchSpace::new(problem.initial_state());
    let mut current_id = search_space.root_node_id();

    for (step, action) in plan.iter().enumerate() {
        let successor = problem
            .expand(search_space.get_node(current_id))
            .into_iter()
            .find(|successor| &successor.action == action)
            .ok_or_else(|| ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
            })?;
        current_id = search_space.insert_child(current_id, successor);
    }

    let final_node = search_space.get_node(current_id);
    if !problem.is_goal(final_node.get_state()) {
        return Err(ValidationError::GoalNotReached { steps: plan.len() });
    }

    Ok(final_node.get_path_cost())
}
