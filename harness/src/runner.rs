//! Harness runner: validate input, run one driver, project the outcome to a
//! report.
//!
//! # Pipeline
//!
//! ```text
//! raw input → world constructor (validation) → policy.validate()
//!   → driver → outcome → report
//! ```
//!
//! Validation failures are returned before any search starts. Every other
//! outcome, including "no solution", is a report.

use arbor_kernel::store::NodeStatus;
use arbor_search::backtrack::backtrack;
use arbor_search::best_first::best_first;
use arbor_search::branch_and_bound::branch_and_bound;
use arbor_search::contract::Branch;
use arbor_search::error::SearchError;
use arbor_search::policy::{AStarPolicy, BacktrackPolicy, BnbPolicy};

use crate::report::{
    ColoringReport, KnapsackReport, PathStep, PuzzleReport, TreeEdge, TreeNode, VertexColor,
};
use crate::worlds::coloring::ColoringInstance;
use crate::worlds::knapsack::KnapsackInstance;
use crate::worlds::puzzle::{Board, FifteenPuzzle};
use crate::worlds::ValidationError;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The input was rejected by its world.
    Validation(ValidationError),
    /// The policy was rejected by the driver.
    Search(SearchError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid input: {e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<ValidationError> for RunError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Solve a knapsack given as `(value, weight)` pairs. Items are reported as
/// `"1"`, `"2"`, ... in input order.
///
/// # Errors
///
/// Returns [`RunError::Validation`] if an item is rejected.
pub fn solve_knapsack_bnb(
    items: &[(u32, u32)],
    capacity: u64,
    policy: &BnbPolicy,
) -> Result<KnapsackReport, RunError> {
    let instance = KnapsackInstance::from_pairs(items, capacity)?;
    Ok(run_knapsack(&instance, policy))
}

/// Solve a validated knapsack instance.
#[must_use]
pub fn run_knapsack(instance: &KnapsackInstance, policy: &BnbPolicy) -> KnapsackReport {
    let outcome = branch_and_bound(instance, policy);

    let mut selected: Vec<usize> = outcome
        .solution_path()
        .into_iter()
        .filter(|&id| outcome.arrival(id) == Some(Branch::Include))
        .filter_map(|id| {
            let level = outcome.store.node(id).depth().checked_sub(1)?;
            instance.decision_order().get(level as usize).copied()
        })
        .collect();
    selected.sort_unstable();
    let selected_ids = selected
        .iter()
        .map(|&index| instance.items()[index].id.clone())
        .collect();

    let (total_value, total_weight) = outcome
        .incumbent
        .map(|leaf| {
            let state = outcome.store.node(leaf).state();
            (state.value, state.weight)
        })
        .unwrap_or_default();

    let mut tree_nodes = Vec::with_capacity(outcome.store.len());
    let mut tree_edges = Vec::with_capacity(outcome.store.len().saturating_sub(1));
    for node in outcome.store.iter() {
        let arrival = outcome.arrival(node.id());
        let item = node
            .depth()
            .checked_sub(1)
            .and_then(|level| instance.item_at_level(level))
            .map(|item| item.id.clone());
        tree_nodes.push(TreeNode {
            id: node.id(),
            parent: node.parent(),
            level: node.depth(),
            item,
            weight: node.state().weight,
            value: node.state().value,
            bound: *node.estimate(),
            included: arrival.map(|b| b == Branch::Include),
            pruned: node.status() == NodeStatus::Pruned,
            optimal: node.status() == NodeStatus::Accepted,
        });
        if let (Some(parent), Some(branch)) = (node.parent(), arrival) {
            tree_edges.push(TreeEdge {
                from: parent,
                to: node.id(),
                label: branch.label(),
            });
        }
    }

    tracing::debug!(
        items = instance.items().len(),
        total_value,
        total_weight,
        "knapsack report built"
    );
    KnapsackReport {
        selected_ids,
        total_value,
        total_weight,
        trace_events: outcome.trace,
        tree_nodes,
        tree_edges,
        stats: outcome.stats,
    }
}

/// Solve a 15-puzzle given as 16 numbers in row-major order, `0` the blank.
///
/// # Errors
///
/// Returns [`RunError::Validation`] for a malformed board and
/// [`RunError::Search`] for an invalid policy.
pub fn solve_puzzle_astar(start: &[u32], policy: &AStarPolicy) -> Result<PuzzleReport, RunError> {
    let board = Board::from_slice(start)?;
    Ok(run_puzzle(board, policy)?)
}

/// Solve from a validated board.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for an invalid policy.
pub fn run_puzzle(board: Board, policy: &AStarPolicy) -> Result<PuzzleReport, SearchError> {
    let outcome = best_first(&FifteenPuzzle, board, policy)?;
    let path = outcome
        .solution_path()
        .into_iter()
        .map(|id| {
            let node = outcome.store.node(id);
            let g = node.depth();
            let h = *node.estimate();
            PathStep {
                state: node.state().state,
                move_taken: node.state().via,
                g,
                h,
                f: u64::from(g) + u64::from(h),
            }
        })
        .collect();

    tracing::debug!(
        solved = outcome.is_solved(),
        iterations = outcome.iterations(),
        "puzzle report built"
    );
    Ok(PuzzleReport {
        solved: outcome.is_solved(),
        path,
        iterations_used: outcome.iterations(),
        termination: outcome.termination,
        trace_events: outcome.trace,
        stats: outcome.stats,
    })
}

/// Enumerate proper colorings of a graph with colors `1..=max_colors`.
///
/// # Errors
///
/// Returns [`RunError::Validation`] for a malformed graph and
/// [`RunError::Search`] for an invalid policy.
pub fn enumerate_colorings<S: AsRef<str>>(
    vertices: &[S],
    edges: &[(S, S)],
    max_colors: u32,
    policy: &BacktrackPolicy,
) -> Result<ColoringReport, RunError> {
    let instance = ColoringInstance::new(vertices, edges, max_colors)?;
    Ok(run_coloring(&instance, policy)?)
}

/// Enumerate colorings of a validated instance.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for an invalid policy.
pub fn run_coloring(
    instance: &ColoringInstance,
    policy: &BacktrackPolicy,
) -> Result<ColoringReport, SearchError> {
    let outcome = backtrack(instance, policy)?;
    debug_assert_eq!(outcome.residual_assignment, 0);

    let solutions = outcome
        .solutions
        .iter()
        .map(|solution| {
            solution
                .iter()
                .map(|&(vertex, color)| VertexColor {
                    vertex: instance.name(vertex).unwrap_or_default().to_string(),
                    color,
                })
                .collect()
        })
        .collect();

    tracing::debug!(
        vertices = instance.vertex_count(),
        colors = instance.colors(),
        solutions = outcome.stats.solutions,
        "coloring report built"
    );
    Ok(ColoringReport {
        solutions,
        trace_events: outcome.trace,
        truncated: outcome.truncated,
        stats: outcome.stats,
    })
}
