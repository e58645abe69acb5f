//! Best-first (A*) driver for unit-cost problems.
//!
//! Pops the open entry with the smallest `f = g + h` (ties: earliest
//! queued). A popped goal ends the run. Expanded states enter the closed set
//! and are never queued again. A successor whose state is already queued is
//! kept only if it is strictly cheaper, in which case it replaces the queued
//! node. The loop is capped by [`AStarPolicy::max_iterations`] pops; running
//! out of budget is reported as its own termination, never as an empty path.

use std::collections::HashSet;

use serde::Serialize;

use arbor_kernel::store::{NodeId, NodeStatus, NodeStore};

use crate::contract::InformedProblem;
use crate::error::SearchError;
use crate::frontier::OpenSet;
use crate::policy::AStarPolicy;
use crate::trace::{TraceEvent, TraceRecorder};

/// Node payload: the state and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S, M> {
    pub state: S,
    /// `None` for the start node.
    pub via: Option<M>,
}

/// Why a generated successor was not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// The state was already expanded.
    Closed,
    /// The state is queued with an `f` no worse than the candidate's.
    Dominated,
}

/// A* step events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AStarEvent {
    Expanded {
        node: NodeId,
        g: u32,
        h: u32,
        f: u64,
    },
    Queued {
        node: NodeId,
        parent: NodeId,
        g: u32,
        h: u32,
        f: u64,
        /// Worse node for the same state that this one displaced.
        replaced: Option<NodeId>,
    },
    Discarded {
        parent: NodeId,
        reason: DiscardReason,
    },
    GoalReached {
        node: NodeId,
        g: u32,
    },
}

/// How an A* run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    GoalReached { node: NodeId },
    /// Every reachable state was expanded without meeting the goal.
    FrontierExhausted,
    IterationBudgetExhausted { max_iterations: u64 },
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AStarStats {
    /// Frontier pops.
    pub iterations: u64,
    pub nodes_created: u64,
    pub discarded_closed: u64,
    pub discarded_dominated: u64,
    pub replaced: u64,
    pub closed_states: u64,
    pub frontier_high_water: u64,
}

/// Everything an A* run produced.
#[derive(Debug, Clone)]
pub struct AStarOutcome<S, M> {
    /// Every node created; the estimate is `h`. Nodes on the solution path
    /// are [`NodeStatus::Accepted`], displaced nodes [`NodeStatus::Pruned`].
    pub store: NodeStore<Step<S, M>, u32>,
    pub termination: Termination,
    pub trace: Vec<TraceEvent<AStarEvent>>,
    pub stats: AStarStats,
}

impl<S, M> AStarOutcome<S, M> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    #[must_use]
    pub fn goal(&self) -> Option<NodeId> {
        match self.termination {
            Termination::GoalReached { node } => Some(node),
            _ => None,
        }
    }

    /// Start-to-goal node ids; empty unless solved.
    #[must_use]
    pub fn solution_path(&self) -> Vec<NodeId> {
        self.goal()
            .map(|goal| self.store.path_from_root(goal))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.stats.iterations
    }
}

/// Run A* from `start`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn best_first<P: InformedProblem>(
    problem: &P,
    start: P::State,
    policy: &AStarPolicy,
) -> Result<AStarOutcome<P::State, P::Move>, SearchError> {
    policy.validate()?;
    let _span = tracing::info_span!("best_first", max_iterations = policy.max_iterations).entered();

    let h0 = problem.heuristic(&start);
    let start_is_goal = problem.is_goal(&start);
    let (mut store, root) = NodeStore::with_root(
        Step {
            state: start.clone(),
            via: None,
        },
        0,
        h0,
    );
    let mut trace = TraceRecorder::new();
    let mut stats = AStarStats {
        nodes_created: 1,
        ..AStarStats::default()
    };

    if start_is_goal {
        tracing::debug!("start state is the goal");
        trace.record(AStarEvent::GoalReached { node: root, g: 0 });
        store.accept_path(root);
        return Ok(AStarOutcome {
            store,
            termination: Termination::GoalReached { node: root },
            trace: trace.into_events(),
            stats,
        });
    }

    let mut open = OpenSet::new();
    let mut closed: HashSet<P::State> = HashSet::new();
    open.insert(start, root, u64::from(h0));

    let termination = loop {
        if open.is_empty() {
            break Termination::FrontierExhausted;
        }
        if stats.iterations >= policy.max_iterations {
            break Termination::IterationBudgetExhausted {
                max_iterations: policy.max_iterations,
            };
        }
        let Some((state, id)) = open.pop() else {
            break Termination::FrontierExhausted;
        };
        stats.iterations += 1;

        let node = store.node(id);
        let g = node.depth();
        let h = *node.estimate();

        if problem.is_goal(&state) {
            tracing::debug!(node = %id, g, iterations = stats.iterations, "goal reached");
            trace.record(AStarEvent::GoalReached { node: id, g });
            break Termination::GoalReached { node: id };
        }

        tracing::trace!(node = %id, g, h, "expand");
        trace.record(AStarEvent::Expanded {
            node: id,
            g,
            h,
            f: u64::from(g) + u64::from(h),
        });

        let successors = problem.successors(&state);
        closed.insert(state);

        let child_g = g + 1;
        for (mv, next) in successors {
            if closed.contains(&next) {
                stats.discarded_closed += 1;
                trace.record(AStarEvent::Discarded {
                    parent: id,
                    reason: DiscardReason::Closed,
                });
                continue;
            }
            let child_h = problem.heuristic(&next);
            let f = u64::from(child_g) + u64::from(child_h);
            if open.queued(&next).is_some_and(|(_, queued_f)| queued_f <= f) {
                stats.discarded_dominated += 1;
                trace.record(AStarEvent::Discarded {
                    parent: id,
                    reason: DiscardReason::Dominated,
                });
                continue;
            }

            let child = store.insert_child(
                id,
                Step {
                    state: next.clone(),
                    via: Some(mv),
                },
                i64::from(child_g),
                child_h,
            );
            stats.nodes_created += 1;
            let replaced = open.insert(next, child, f);
            if let Some(old) = replaced {
                stats.replaced += 1;
                store.set_status(old, NodeStatus::Pruned);
            }
            trace.record(AStarEvent::Queued {
                node: child,
                parent: id,
                g: child_g,
                h: child_h,
                f,
                replaced,
            });
        }
    };

    stats.closed_states = closed.len() as u64;
    stats.frontier_high_water = open.high_water() as u64;
    if let Termination::GoalReached { node } = termination {
        store.accept_path(node);
    } else {
        tracing::debug!(?termination, iterations = stats.iterations, "search ended without goal");
    }

    Ok(AStarOutcome {
        store,
        termination,
        trace: trace.into_events(),
        stats,
    })
}
