use crate::search::{Cost, HeuristicSearchProblem, SearchNode, SearchProblem, Successor};
use std::cell::Cell;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Wraps a problem and stops producing successors once a number of
/// expansions or an amount of wall-clock time has been used. The engines have
/// no limits of their own, so this is how a caller bounds a search over a
/// large or infinite state space. Both budgets are per search: they start
/// over whenever an engine begins a new search on the wrapper.
#[derive(Debug)]
pub struct BoundedProblem<P> {
    inner: P,
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    start_time: Cell<Instant>,
    expansions: Cell<usize>,
    limit_reached: Cell<bool>,
}

impl<P> BoundedProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            max_expansions: None,
            time_limit: None,
            start_time: Cell::new(Instant::now()),
            expansions: Cell::new(0),
            limit_reached: Cell::new(false),
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of expansions passed through to the wrapped problem during the
    /// current search.
    pub fn expansions(&self) -> usize {
        self.expansions.get()
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_reached.get()
    }

    fn check_limits(&self) -> bool {
        if self.limit_reached.get() {
            return true;
        }
        if let Some(max_expansions) = self.max_expansions {
            if self.expansions.get() >= max_expansions {
                warn!(max_expansions, "expansion limit reached");
                self.limit_reached.set(true);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.get().elapsed() >= time_limit {
                warn!(
                    time_limit = time_limit.as_secs_f64(),
                    "time limit reached"
                );
                self.limit_reached.set(true);
            }
        }
        if self.limit_reached.get() {
            info!(expansions = self.expansions.get(), "refusing further expansions");
        }
        self.limit_reached.get()
    }
}

impl<S, A, P> SearchProblem<S, A> for BoundedProblem<P>
where
    P: SearchProblem<S, A>,
{
    type Key = P::Key;

    fn initial_state(&self) -> S {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &S) -> bool {
        self.inner.is_goal(state)
    }

    fn expand(&self, node: &SearchNode<S, A>) -> Vec<Successor<S, A>> {
        if self.check_limits() {
            return vec![];
        }
        self.expansions.set(self.expansions.get() + 1);
        self.inner.expand(node)
    }

    fn hashable_state(&self, state: &S) -> Self::Key {
        self.inner.hashable_state(state)
    }

    fn begin_search(&self) {
        self.start_time.set(Instant::now());
        self.expansions.set(0);
        self.limit_reached.set(false);
        self.inner.begin_search();
    }

    fn bound_exceeded(&self) -> bool {
        self.limit_reached.get() || self.inner.bound_exceeded()
    }
}

impl<S, A, P> HeuristicSearchProblem<S, A> for BoundedProblem<P>
where
    P: HeuristicSearchProblem<S, A>,
{
    fn estimated_cost(&self, state: &S) -> Cost {
        self.inner.estimated_cost(state)
    }
}
