//! Arbor Search: the three search drivers and their shared machinery.
//!
//! Depends only on `arbor_kernel`; problem domains live in `arbor_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! arbor_kernel  ←  arbor_search  ←  arbor_harness
//! (node arena,     (frontiers,       (knapsack, puzzle,
//!  digests)         drivers)          coloring, runner)
//! ```
//!
//! # Drivers
//!
//! - [`branch_and_bound`](branch_and_bound::branch_and_bound) -- least-cost
//!   branch-and-bound over a [`BranchAndBoundProblem`](contract::BranchAndBoundProblem)
//! - [`best_first`](best_first::best_first) -- A* over an
//!   [`InformedProblem`](contract::InformedProblem)
//! - [`backtrack`](backtrack::backtrack) -- exhaustive enumeration over a
//!   [`ConstraintProblem`](contract::ConstraintProblem)
//!
//! Every driver returns its full audit trail (node store or solution list,
//! ordered trace, counters) regardless of how the run ended.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assignment;
pub mod backtrack;
pub mod best_first;
pub mod bound;
pub mod branch_and_bound;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod incumbent;
pub mod policy;
pub mod trace;
