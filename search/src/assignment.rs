//! Shared partial assignment with scope-guarded undo.
//!
//! Backtracking explores one path at a time over a single mutable
//! assignment. Every [`Assignment::commit`] returns a [`CommitGuard`]; dropping
//! the guard removes exactly the entry it added. Because the guard holds the
//! only mutable borrow of the assignment, nested commits must be made through
//! it and are therefore released in reverse order on every exit path,
//! including early returns.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// Partial assignment of values to variables.
#[derive(Debug, Clone)]
pub struct Assignment<V, X> {
    values: HashMap<V, X>,
    /// Variables in commit order; the top is the next to be undone.
    undo: Vec<V>,
}

impl<V: Copy + Eq + Hash, X: Copy> Assignment<V, X> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            undo: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, var: V) -> Option<X> {
        self.values.get(&var).copied()
    }

    #[must_use]
    pub fn contains(&self, var: V) -> bool {
        self.values.contains_key(&var)
    }

    /// Number of committed entries (equals the undo depth).
    #[must_use]
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Commit `var = value` until the returned guard is dropped.
    ///
    /// `var` must not already be assigned; the previous value would be lost
    /// on undo.
    pub fn commit(&mut self, var: V, value: X) -> CommitGuard<'_, V, X> {
        let previous = self.values.insert(var, value);
        debug_assert!(previous.is_none(), "variable committed twice");
        self.undo.push(var);
        CommitGuard {
            assignment: self,
            var,
        }
    }

    /// Copy of the assignment in `order`, skipping unassigned variables.
    #[must_use]
    pub fn snapshot(&self, order: &[V]) -> Vec<(V, X)> {
        order
            .iter()
            .filter_map(|&var| self.get(var).map(|value| (var, value)))
            .collect()
    }

    fn release(&mut self, var: V) {
        let top = self.undo.pop();
        debug_assert!(top == Some(var), "undo out of commit order");
        self.values.remove(&var);
    }
}

impl<V: Copy + Eq + Hash, X: Copy> Default for Assignment<V, X> {
    fn default() -> Self {
        Self::new()
    }
}

/// Live commitment of one variable. Dropping it undoes the commit.
#[derive(Debug)]
pub struct CommitGuard<'a, V: Copy + Eq + Hash, X: Copy> {
    assignment: &'a mut Assignment<V, X>,
    var: V,
}

impl<V: Copy + Eq + Hash, X: Copy> CommitGuard<'_, V, X> {
    /// The variable this guard will release.
    #[must_use]
    pub fn var(&self) -> V {
        self.var
    }
}

impl<V: Copy + Eq + Hash, X: Copy> Deref for CommitGuard<'_, V, X> {
    type Target = Assignment<V, X>;

    fn deref(&self) -> &Self::Target {
        self.assignment
    }
}

impl<V: Copy + Eq + Hash, X: Copy> DerefMut for CommitGuard<'_, V, X> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.assignment
    }
}

impl<V: Copy + Eq + Hash, X: Copy> Drop for CommitGuard<'_, V, X> {
    fn drop(&mut self) {
        self.assignment.release(self.var);
    }
}
