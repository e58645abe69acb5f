//! Least-cost branch-and-bound driver.
//!
//! Each pending node carries the adapter's bound, the negated optimistic
//! objective of its subtree. A node is expanded only while its bound is
//! strictly better than `-incumbent`; the same test gates every child at
//! enqueue time. Complete leaves update the incumbent when they are popped.
//! The run ends when the frontier is empty, at which point the incumbent is
//! optimal.

use serde::Serialize;

use arbor_kernel::store::{NodeId, NodeStatus, NodeStore};

use crate::bound::Bound;
use crate::contract::{Branch, BranchAndBoundProblem};
use crate::frontier::bound_frontier;
use crate::incumbent::Incumbent;
use crate::policy::BnbPolicy;
use crate::trace::{TraceEvent, TraceRecorder};

/// Where a node was ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneStage {
    /// Popped from the frontier after the incumbent overtook its bound.
    AtPop,
    /// Created but never queued.
    AtEnqueue,
}

/// Branch-and-bound step events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BnbEvent {
    Expanded {
        node: NodeId,
        level: u32,
        bound: Bound,
    },
    ChildCreated {
        parent: NodeId,
        child: NodeId,
        branch: Branch,
        bound: Bound,
    },
    /// The adapter refused the child (e.g. over capacity); no node exists.
    BranchInfeasible { parent: NodeId, branch: Branch },
    Pruned {
        node: NodeId,
        bound: Bound,
        incumbent_value: u64,
        stage: PruneStage,
    },
    IncumbentImproved {
        node: NodeId,
        value: u64,
        previous: u64,
    },
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BnbStats {
    pub nodes_created: u64,
    pub nodes_expanded: u64,
    pub pruned_at_pop: u64,
    pub pruned_at_enqueue: u64,
    pub infeasible_branches: u64,
    pub incumbent_updates: u64,
    pub frontier_high_water: u64,
}

/// Everything a branch-and-bound run produced.
#[derive(Debug, Clone)]
pub struct BnbOutcome<S> {
    /// Every node created, with its bound as the estimate. Nodes on the
    /// incumbent's path are [`NodeStatus::Accepted`].
    pub store: NodeStore<S, Bound>,
    /// The optimal complete leaf, or `None` if no leaf beat value 0.
    pub incumbent: Option<NodeId>,
    pub best_value: u64,
    pub trace: Vec<TraceEvent<BnbEvent>>,
    pub stats: BnbStats,
    arrivals: Vec<Option<Branch>>,
}

impl<S> BnbOutcome<S> {
    /// Root-to-incumbent node ids; empty when there is no incumbent.
    #[must_use]
    pub fn solution_path(&self) -> Vec<NodeId> {
        self.incumbent
            .map(|leaf| self.store.path_from_root(leaf))
            .unwrap_or_default()
    }

    /// The branch that created `node` (`None` for the root).
    #[must_use]
    pub fn arrival(&self, node: NodeId) -> Option<Branch> {
        self.arrivals.get(node.index()).copied().flatten()
    }
}

/// Run least-cost branch-and-bound to completion.
///
/// Never fails: the frontier can only shrink once the incumbent stops
/// improving, and the tree depth is bounded by `decision_count()`.
#[must_use]
pub fn branch_and_bound<P: BranchAndBoundProblem>(
    problem: &P,
    policy: &BnbPolicy,
) -> BnbOutcome<P::State> {
    let decisions = problem.decision_count();
    let _span = tracing::info_span!(
        "branch_and_bound",
        decisions,
        frontier = ?policy.frontier
    )
    .entered();

    let root_state = problem.root_state();
    let root_bound = problem.bound(0, &root_state);
    let root_cost = saturating_i64(problem.objective(&root_state));
    let (mut store, root) = NodeStore::with_root(root_state, root_cost, root_bound);
    let mut arrivals = vec![None];
    let mut frontier = bound_frontier(policy.frontier);
    let mut incumbent = Incumbent::new();
    let mut trace = TraceRecorder::new();
    let mut stats = BnbStats {
        nodes_created: 1,
        ..BnbStats::default()
    };

    frontier.push(root, root_bound);

    while let Some(id) = frontier.pop() {
        let node = store.node(id);
        let level = node.depth();
        let bound = *node.estimate();

        if !incumbent.admits(bound) {
            tracing::trace!(node = %id, %bound, incumbent = incumbent.value(), "pruned at pop");
            store.set_status(id, NodeStatus::Pruned);
            stats.pruned_at_pop += 1;
            trace.record(BnbEvent::Pruned {
                node: id,
                bound,
                incumbent_value: incumbent.value(),
                stage: PruneStage::AtPop,
            });
            continue;
        }

        if level >= decisions {
            let value = problem.objective(node.state());
            if let Some(previous) = incumbent.try_install(id, value) {
                tracing::debug!(node = %id, value, previous, "incumbent improved");
                stats.incumbent_updates += 1;
                trace.record(BnbEvent::IncumbentImproved {
                    node: id,
                    value,
                    previous,
                });
            }
            continue;
        }

        tracing::trace!(node = %id, level, %bound, "expand");
        stats.nodes_expanded += 1;
        trace.record(BnbEvent::Expanded {
            node: id,
            level,
            bound,
        });

        let parent_state = node.state().clone();
        for branch in Branch::ORDER {
            let Some(child_state) = problem.branch(level, &parent_state, branch) else {
                stats.infeasible_branches += 1;
                trace.record(BnbEvent::BranchInfeasible { parent: id, branch });
                continue;
            };
            let child_bound = problem.bound(level + 1, &child_state);
            let cost = saturating_i64(problem.objective(&child_state));
            let child = store.insert_child(id, child_state, cost, child_bound);
            arrivals.push(Some(branch));
            stats.nodes_created += 1;
            trace.record(BnbEvent::ChildCreated {
                parent: id,
                child,
                branch,
                bound: child_bound,
            });

            if incumbent.admits(child_bound) {
                frontier.push(child, child_bound);
            } else {
                store.set_status(child, NodeStatus::Pruned);
                stats.pruned_at_enqueue += 1;
                trace.record(BnbEvent::Pruned {
                    node: child,
                    bound: child_bound,
                    incumbent_value: incumbent.value(),
                    stage: PruneStage::AtEnqueue,
                });
            }
        }
    }

    stats.frontier_high_water = frontier.high_water() as u64;
    if let Some(leaf) = incumbent.node() {
        store.accept_path(leaf);
    }
    tracing::debug!(
        best_value = incumbent.value(),
        nodes = stats.nodes_created,
        expanded = stats.nodes_expanded,
        "frontier exhausted"
    );

    BnbOutcome {
        store,
        incumbent: incumbent.node(),
        best_value: incumbent.value(),
        trace: trace.into_events(),
        stats,
        arrivals,
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
