//! Frontier disciplines over pending nodes.
//!
//! - [`FifoFrontier`]: plain queue, visitation in creation order.
//! - [`LeastCostFrontier`]: min-heap on `(bound, node id)`.
//! - [`OpenSet`]: A* open list keyed by state, min-heap on `(f, insertion
//!   order)`, with replace-by-identity when a cheaper path to a queued state
//!   is found.
//!
//! Backtracking has no explicit frontier; its pending choices live on the
//! call stack.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

use arbor_kernel::store::NodeId;

use crate::bound::Bound;
use crate::policy::FrontierDiscipline;

/// Pending-node container for branch-and-bound.
pub trait BoundFrontier {
    fn push(&mut self, node: NodeId, bound: Bound);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    /// Largest size ever reached.
    fn high_water(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the frontier for a discipline.
#[must_use]
pub fn bound_frontier(discipline: FrontierDiscipline) -> Box<dyn BoundFrontier> {
    match discipline {
        FrontierDiscipline::LeastCost => Box::new(LeastCostFrontier::new()),
        FrontierDiscipline::Fifo => Box::new(FifoFrontier::new()),
    }
}

/// First-in first-out queue. Ignores bounds.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: usize,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoundFrontier for FifoFrontier {
    fn push(&mut self, node: NodeId, _bound: Bound) {
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Lowest bound first. Equal bounds pop in creation order, since node ids
/// are dense in creation order.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug, Default)]
pub struct LeastCostFrontier {
    heap: BinaryHeap<Reverse<(Bound, NodeId)>>,
    high_water: usize,
}

impl LeastCostFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoundFrontier for LeastCostFrontier {
    fn push(&mut self, node: NodeId, bound: Bound) {
        self.heap.push(Reverse((bound, node)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: u64,
    order: u64,
    node: NodeId,
}

#[derive(Debug, Clone, Copy)]
struct Member {
    node: NodeId,
    f: u64,
}

/// A* open list.
///
/// At most one live node per state key. Replacing a member leaves its heap
/// entry behind; stale entries are recognized on pop (their node no longer
/// matches the member) and skipped. `len` counts live members only.
#[derive(Debug)]
pub struct OpenSet<K> {
    heap: BinaryHeap<Reverse<(OpenEntry, KeySlot<K>)>>,
    members: HashMap<K, Member>,
    next_order: u64,
    high_water: usize,
}

/// Heap payload. Excluded from ordering so keys need not be `Ord`.
#[derive(Debug)]
struct KeySlot<K>(K);

impl<K> PartialEq for KeySlot<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K> Eq for KeySlot<K> {}

impl<K> PartialOrd for KeySlot<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for KeySlot<K> {
    fn cmp(&self, _other: &Self) -> std::cmp::Ordering {
        std::cmp::Ordering::Equal
    }
}

impl<K: Clone + Eq + Hash> OpenSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: HashMap::new(),
            next_order: 0,
            high_water: 0,
        }
    }

    /// The live node queued for `key` and its `f`, if any.
    #[must_use]
    pub fn queued(&self, key: &K) -> Option<(NodeId, u64)> {
        self.members.get(key).map(|m| (m.node, m.f))
    }

    /// Queue `node` for `key`, replacing any live member for the same key.
    ///
    /// Returns the replaced node. Callers decide beforehand (via
    /// [`OpenSet::queued`]) whether the replacement is an improvement.
    pub fn insert(&mut self, key: K, node: NodeId, f: u64) -> Option<NodeId> {
        let order = self.next_order;
        self.next_order += 1;
        let replaced = match self.members.entry(key.clone()) {
            Entry::Occupied(mut slot) => Some(std::mem::replace(slot.get_mut(), Member { node, f }).node),
            Entry::Vacant(slot) => {
                slot.insert(Member { node, f });
                None
            }
        };
        self.heap
            .push(Reverse((OpenEntry { f, order, node }, KeySlot(key))));
        self.high_water = self.high_water.max(self.members.len());
        replaced
    }

    /// Remove and return the live member with the smallest `f`. Among equal
    /// `f`, the earliest inserted wins.
    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        while let Some(Reverse((entry, KeySlot(key)))) = self.heap.pop() {
            let live = self
                .members
                .get(&key)
                .is_some_and(|member| member.node == entry.node);
            if live {
                self.members.remove(&key);
                return Some((key, entry.node));
            }
        }
        None
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.members.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<K: Clone + Eq + Hash> Default for OpenSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
