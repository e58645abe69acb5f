//! `NodeStore`: flat arena holding every node created during one run.
//!
//! Parent references are plain indices into the arena, never owning
//! pointers. Nodes are never removed before the run ends, so every id handed
//! out stays valid and path reconstruction is a walk over indices.

use crate::store::node::{NodeId, NodeStatus, SearchNode};

/// Arena of search nodes for a single run.
///
/// The store is created together with its root, so a store always contains
/// exactly one tree.
#[derive(Debug, Clone)]
pub struct NodeStore<S, E> {
    nodes: Vec<SearchNode<S, E>>,
}

impl<S, E> NodeStore<S, E> {
    /// Create a store whose only node is the root (depth 0, no parent).
    #[must_use]
    pub fn with_root(state: S, cost_g: i64, estimate: E) -> (Self, NodeId) {
        let root = NodeId::from_index(0);
        let store = Self {
            nodes: vec![SearchNode {
                id: root,
                parent: None,
                depth: 0,
                state,
                cost_g,
                estimate,
                status: NodeStatus::Active,
            }],
        };
        (store, root)
    }

    /// Create a child of `parent`. Its depth is `parent.depth + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this store.
    pub fn insert_child(&mut self, parent: NodeId, state: S, cost_g: i64, estimate: E) -> NodeId {
        let depth = self.nodes[parent.index()].depth + 1;
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            depth,
            state,
            cost_g,
            estimate,
            status: NodeStatus::Active,
        });
        id
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::from_index(0)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, E>> {
        self.nodes.get(id.index())
    }

    /// Node lookup for ids issued by this store.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode<S, E> {
        &self.nodes[id.index()]
    }

    /// Set the status of a node, returning the previous status.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    pub fn set_status(&mut self, id: NodeId, status: NodeStatus) -> NodeStatus {
        std::mem::replace(&mut self.nodes[id.index()].status, status)
    }

    /// Ids from the root down to `id`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    #[must_use]
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.node(id).depth as usize + 1);
        let mut current = Some(id);
        while let Some(cursor) = current {
            path.push(cursor);
            current = self.nodes[cursor.index()].parent;
        }
        path.reverse();
        path
    }

    /// Mark every node from the root down to `id` as [`NodeStatus::Accepted`].
    pub fn accept_path(&mut self, id: NodeId) {
        for node_id in self.path_from_root(id) {
            self.set_status(node_id, NodeStatus::Accepted);
        }
    }

    /// Number of nodes created so far (including the root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a store is created with its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, E>> {
        self.nodes.iter()
    }

    /// Number of nodes currently carrying `status`.
    #[must_use]
    pub fn count_status(&self, status: NodeStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }
}
