//! Problem adapter contracts, one per search discipline.
//!
//! Adapters are pure: every method is a function of its arguments and the
//! adapter's immutable instance data. Successor generation cannot fail; an
//! adapter that cannot produce a valid child simply does not produce it.

use std::hash::Hash;

use serde::Serialize;

use crate::assignment::Assignment;
use crate::bound::Bound;

/// The two children of a 0/1 decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Include,
    Exclude,
}

impl Branch {
    /// Expansion order: include first, then exclude.
    pub const ORDER: [Branch; 2] = [Branch::Include, Branch::Exclude];

    /// Edge label used in tree exports (`"1"` include, `"0"` exclude).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Include => "1",
            Self::Exclude => "0",
        }
    }
}

/// A maximization problem solved by least-cost branch-and-bound over a
/// sequence of 0/1 decisions.
///
/// # Contract
///
/// - A node at level `decision_count()` is a complete assignment.
/// - `bound(level, state)` must never be better (smaller) than
///   `Bound::from_value(v)` for the best objective `v` reachable from `state`
///   with decisions `level..` still open. An inadmissible bound makes pruning
///   unsound.
/// - `branch` returns `None` for an infeasible child; such children are never
///   created, so no bound is ever computed on an infeasible state.
pub trait BranchAndBoundProblem {
    type State: Clone;

    /// Number of decisions. Levels run `0..=decision_count()`.
    fn decision_count(&self) -> u32;

    fn root_state(&self) -> Self::State;

    /// The child produced by taking `branch` for decision `level`.
    fn branch(&self, level: u32, state: &Self::State, branch: Branch) -> Option<Self::State>;

    /// Negated optimistic objective with decisions `level..` still open.
    fn bound(&self, level: u32, state: &Self::State) -> Bound;

    /// Objective value already committed in `state`.
    fn objective(&self, state: &Self::State) -> u64;
}

/// A unit-cost shortest-path problem solved by A*.
///
/// # Contract
///
/// - `heuristic` must be admissible (never overestimate the remaining number
///   of moves) for the returned path to be optimal.
/// - `State` equality is state identity: the closed set and open-set
///   membership are keyed by it.
/// - `successors` is deterministic and ordered.
pub trait InformedProblem {
    type State: Clone + Eq + Hash;
    type Move: Copy;

    fn successors(&self, state: &Self::State) -> Vec<(Self::Move, Self::State)>;

    fn heuristic(&self, state: &Self::State) -> u32;

    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A finite-domain constraint problem enumerated by backtracking.
///
/// # Contract
///
/// - `variables` is the fixed visitation order.
/// - `domain` lists candidate values in the order they are tried.
/// - `is_consistent` only inspects variables already present in
///   `assignment`.
pub trait ConstraintProblem {
    type Var: Copy + Eq + Hash;
    type Value: Copy + Eq;

    fn variables(&self) -> &[Self::Var];

    fn domain(&self, var: Self::Var) -> Vec<Self::Value>;

    fn is_consistent(
        &self,
        var: Self::Var,
        value: Self::Value,
        assignment: &Assignment<Self::Var, Self::Value>,
    ) -> bool;
}
