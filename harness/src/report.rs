//! Report types returned by the runner, and their determinism digests.
//!
//! Reports are plain data: everything a renderer needs (trees, paths,
//! assignments, ordered trace events) with no display strings. Each report
//! projects to integer-only canonical JSON, so two runs with the same input
//! and policy produce byte-identical bytes and equal digests.

use serde::Serialize;

use arbor_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use arbor_kernel::proof::hash::{canonical_hash, ContentHash};
use arbor_kernel::proof::hash_domain::HashDomain;
use arbor_kernel::store::NodeId;
use arbor_search::backtrack::{BacktrackEvent, BacktrackStats};
use arbor_search::best_first::{AStarEvent, AStarStats, Termination};
use arbor_search::bound::Bound;
use arbor_search::branch_and_bound::{BnbEvent, BnbStats};
use arbor_search::trace::TraceEvent;

use crate::worlds::puzzle::{Board, Direction};

/// One node of the branch-and-bound tree, as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub level: u32,
    /// Id of the item decided on the edge into this node.
    pub item: Option<String>,
    /// Total weight packed so far.
    pub weight: u64,
    /// Total value packed so far.
    pub value: u64,
    pub bound: Bound,
    /// `Some(true)` if the edge into this node includes its item.
    pub included: Option<bool>,
    pub pruned: bool,
    /// On the path to the optimal leaf.
    pub optimal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// `"1"` include, `"0"` exclude.
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnapsackReport {
    /// Ids of the packed items, in input order.
    pub selected_ids: Vec<String>,
    pub total_value: u64,
    pub total_weight: u64,
    pub trace_events: Vec<TraceEvent<BnbEvent>>,
    pub tree_nodes: Vec<TreeNode>,
    pub tree_edges: Vec<TreeEdge>,
    pub stats: BnbStats,
}

/// One board on the solution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub state: Board,
    /// `None` for the start board.
    pub move_taken: Option<Direction>,
    pub g: u32,
    pub h: u32,
    pub f: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleReport {
    pub solved: bool,
    /// Start to goal inclusive; empty unless solved.
    pub path: Vec<PathStep>,
    pub iterations_used: u64,
    pub termination: Termination,
    pub trace_events: Vec<TraceEvent<AStarEvent>>,
    pub stats: AStarStats,
}

impl PuzzleReport {
    /// Number of moves on the path (0 when the start is the goal or when
    /// unsolved).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexColor {
    pub vertex: String,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoringReport {
    /// Every proper coloring found, each in vertex order.
    pub solutions: Vec<Vec<VertexColor>>,
    /// Vertices are referenced by input index.
    pub trace_events: Vec<TraceEvent<BacktrackEvent<usize, u32>>>,
    pub truncated: bool,
    pub stats: BacktrackStats,
}

/// Error producing report bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    Canon(CanonError),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canon(e) => write!(f, "report is not canonical: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<CanonError> for ReportError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Canonical JSON bytes of any report.
///
/// # Errors
///
/// Returns [`ReportError::Canon`] if the report does not project to
/// integer-only JSON.
pub fn report_bytes<T: Serialize>(report: &T) -> Result<Vec<u8>, ReportError> {
    Ok(to_canonical_json_bytes(report)?)
}

/// Digest of a report under [`HashDomain::RunReport`].
///
/// # Errors
///
/// As [`report_bytes`].
pub fn report_digest<T: Serialize>(report: &T) -> Result<ContentHash, ReportError> {
    let bytes = report_bytes(report)?;
    Ok(canonical_hash(HashDomain::RunReport, &bytes))
}

/// Digest of a knapsack tree (nodes and edges only) under
/// [`HashDomain::SearchTree`].
///
/// # Errors
///
/// As [`report_bytes`].
pub fn tree_digest(report: &KnapsackReport) -> Result<ContentHash, ReportError> {
    let bytes = to_canonical_json_bytes(&(&report.tree_nodes, &report.tree_edges))?;
    Ok(canonical_hash(HashDomain::SearchTree, &bytes))
}
