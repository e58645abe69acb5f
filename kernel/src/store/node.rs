//! Node identity, lifecycle status, and the immutable node record.

use serde::Serialize;

/// Arena handle for a node.
///
/// Stable for the lifetime of one search run. Ids are dense and assigned in
/// creation order, so `NodeId(n)` is the `n`-th node ever created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of a node.
///
/// This is the only field of a node that changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Created and not (yet) ruled out.
    #[default]
    Active,
    /// Ruled out by a bound or dominance check; never expanded afterwards.
    Pruned,
    /// Lies on the path of the reported solution.
    Accepted,
}

/// A node in the search tree.
///
/// `state`, `cost_g` and `estimate` are fixed at creation. Transitions are
/// modelled by creating children, never by editing a node in place.
#[derive(Debug, Clone)]
pub struct SearchNode<S, E> {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: u32,
    pub(crate) state: S,
    pub(crate) cost_g: i64,
    pub(crate) estimate: E,
    pub(crate) status: NodeStatus,
}

impl<S, E> SearchNode<S, E> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Back-reference used only for path reconstruction (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Tree depth (root = 0). Always `parent.depth + 1` for children.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accumulated real cost from the root.
    #[must_use]
    pub fn cost_g(&self) -> i64 {
        self.cost_g
    }

    /// Bound or heuristic estimate recorded at creation.
    #[must_use]
    pub fn estimate(&self) -> &E {
        &self.estimate
    }

    #[must_use]
    pub fn status(&self) -> NodeStatus {
        self.status
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
