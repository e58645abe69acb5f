//! Best complete solution found so far during branch-and-bound.

use arbor_kernel::store::NodeId;

use crate::bound::Bound;

/// The incumbent: the best complete leaf seen so far and its value.
///
/// Starts at value 0 with no node. Replacement is strict, so among leaves
/// of equal value the first one found is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Incumbent {
    node: Option<NodeId>,
    value: u64,
}

impl Incumbent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Install `node` if `value` is strictly better than the current value,
    /// or if no leaf has been installed yet. Returns the previous value when
    /// the incumbent changed.
    pub fn try_install(&mut self, node: NodeId, value: u64) -> Option<u64> {
        if self.node.is_some() && value <= self.value {
            return None;
        }
        let previous = self.value;
        self.node = Some(node);
        self.value = value;
        Some(previous)
    }

    /// `true` if a node bounded by `bound` might still beat the incumbent.
    #[must_use]
    pub fn admits(&self, bound: Bound) -> bool {
        bound.improves_on(self.value)
    }
}
