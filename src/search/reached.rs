use std::collections::HashSet;
use std::hash::Hash;

/// The set of state keys discovered so far in one search. Engines insert a
/// key when the state is generated, so a state is enqueued at most once.
#[derive(Debug)]
pub(crate) struct ReachedSet<K: Hash + Eq> {
    keys: HashSet<K>,
}

impl<K: Hash + Eq> ReachedSet<K> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Record a key, returning whether it was seen for the first time.
    pub fn insert(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
