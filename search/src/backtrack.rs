//! Backtracking enumeration over a single shared assignment.
//!
//! Variables are visited in the adapter's fixed order. For each variable
//! every domain value is tried in order; a consistent value is committed
//! through a [`CommitGuard`](crate::assignment::CommitGuard), the search
//! recurses, and the guard is released before the next value is tried. A
//! full assignment is copied into the solution list. When a solution limit
//! is set the recursion unwinds with [`ControlFlow::Break`] as soon as the
//! limit is hit, releasing every live guard on the way out.

use std::ops::ControlFlow;

use serde::Serialize;

use crate::assignment::Assignment;
use crate::contract::ConstraintProblem;
use crate::error::SearchError;
use crate::policy::BacktrackPolicy;
use crate::trace::{TraceEvent, TraceRecorder};

/// Backtracking step events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BacktrackEvent<V, X> {
    Trying { var: V, value: X, depth: u32 },
    /// The value is consistent and has been committed.
    Success { var: V, value: X },
    /// The value conflicts with the current assignment.
    Backtrack { var: V, value: X },
    /// The committed value was removed again.
    Undone { var: V, value: X },
    SolutionRecorded { index: u64 },
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BacktrackStats {
    pub attempts: u64,
    pub conflicts: u64,
    pub commits: u64,
    pub undos: u64,
    pub solutions: u64,
}

/// Everything a backtracking run produced.
#[derive(Debug, Clone)]
pub struct BacktrackOutcome<V, X> {
    /// Complete assignments in discovery order, each listed in variable order.
    pub solutions: Vec<Vec<(V, X)>>,
    pub trace: Vec<TraceEvent<BacktrackEvent<V, X>>>,
    pub stats: BacktrackStats,
    /// `true` if the solution limit stopped the run early.
    pub truncated: bool,
    /// Entries left in the shared assignment after the run. Always 0.
    pub residual_assignment: usize,
}

/// Enumerate all consistent complete assignments.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn backtrack<P: ConstraintProblem>(
    problem: &P,
    policy: &BacktrackPolicy,
) -> Result<BacktrackOutcome<P::Var, P::Value>, SearchError> {
    policy.validate()?;
    let _span = tracing::info_span!(
        "backtrack",
        variables = problem.variables().len(),
        solution_limit = ?policy.solution_limit
    )
    .entered();

    let mut run = Enumeration {
        problem,
        limit: policy.solution_limit,
        trace: TraceRecorder::new(),
        solutions: Vec::new(),
        stats: BacktrackStats::default(),
    };
    let mut assignment = Assignment::new();
    let truncated = run.descend(&mut assignment, 0).is_break();

    tracing::debug!(
        solutions = run.stats.solutions,
        attempts = run.stats.attempts,
        truncated,
        "enumeration finished"
    );

    Ok(BacktrackOutcome {
        solutions: run.solutions,
        trace: run.trace.into_events(),
        stats: run.stats,
        truncated,
        residual_assignment: assignment.len(),
    })
}

struct Enumeration<'p, P: ConstraintProblem> {
    problem: &'p P,
    limit: Option<u64>,
    trace: TraceRecorder<BacktrackEvent<P::Var, P::Value>>,
    solutions: Vec<Vec<(P::Var, P::Value)>>,
    stats: BacktrackStats,
}

impl<P: ConstraintProblem> Enumeration<'_, P> {
    fn descend(
        &mut self,
        assignment: &mut Assignment<P::Var, P::Value>,
        depth: u32,
    ) -> ControlFlow<()> {
        let problem = self.problem;
        let Some(&var) = problem.variables().get(depth as usize) else {
            return self.record_solution(assignment);
        };

        for value in problem.domain(var) {
            self.stats.attempts += 1;
            tracing::trace!(depth, "trying value");
            self.trace.record(BacktrackEvent::Trying { var, value, depth });

            if !problem.is_consistent(var, value, assignment) {
                self.stats.conflicts += 1;
                self.trace.record(BacktrackEvent::Backtrack { var, value });
                continue;
            }

            self.stats.commits += 1;
            self.trace.record(BacktrackEvent::Success { var, value });
            let flow = {
                let mut guard = assignment.commit(var, value);
                self.descend(&mut guard, depth + 1)
            };
            self.stats.undos += 1;
            self.trace.record(BacktrackEvent::Undone { var, value });

            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }

    fn record_solution(&mut self, assignment: &Assignment<P::Var, P::Value>) -> ControlFlow<()> {
        let index = self.solutions.len() as u64;
        self.solutions
            .push(assignment.snapshot(self.problem.variables()));
        self.stats.solutions += 1;
        self.trace.record(BacktrackEvent::SolutionRecorded { index });
        tracing::debug!(index, "solution recorded");

        match self.limit {
            Some(limit) if self.stats.solutions >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
