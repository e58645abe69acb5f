//! 0/1 knapsack as a least-cost branch-and-bound problem.
//!
//! Decisions are made in descending value/weight ratio order (stable, so
//! equal ratios keep input order). The bound at a node is the negated
//! fractional relaxation: greedily take remaining items while they fit, then
//! a fraction of the first item that does not, provided some capacity is
//! left. Ratios are compared by exact cross-multiplication.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use arbor_search::bound::Bound;
use arbor_search::contract::{Branch, BranchAndBoundProblem};

use super::ValidationError;

/// One item. `id` is how the item is reported in a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub value: u32,
    pub weight: u32,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, value: u32, weight: u32) -> Self {
        Self {
            id: id.into(),
            value,
            weight,
        }
    }

    /// Higher value per unit weight sorts first.
    fn ratio_cmp(&self, other: &Self) -> Ordering {
        let lhs = u64::from(other.value) * u64::from(self.weight);
        let rhs = u64::from(self.value) * u64::from(other.weight);
        lhs.cmp(&rhs)
    }
}

/// A validated knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    /// `order[level]` is the index (into `items`) decided at `level`.
    order: Vec<usize>,
    capacity: u64,
}

/// Partial packing: totals of the items included so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KnapsackState {
    pub weight: u64,
    pub value: u64,
}

impl KnapsackInstance {
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty or repeated id, or a zero
    /// weight or value. An empty item list and zero capacity are accepted.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(ValidationError::EmptyItemId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::DuplicateItemId {
                    id: item.id.clone(),
                });
            }
            if item.weight == 0 {
                return Err(ValidationError::ZeroItemWeight {
                    id: item.id.clone(),
                });
            }
            if item.value == 0 {
                return Err(ValidationError::ZeroItemValue {
                    id: item.id.clone(),
                });
            }
        }

        let mut order: Vec<usize> = (0..items.len()).collect();
        // `sort_by` is stable.
        order.sort_by(|&a, &b| items[a].ratio_cmp(&items[b]));

        Ok(Self {
            items,
            order,
            capacity,
        })
    }

    /// Items given as `(value, weight)` pairs, numbered `"1"`, `"2"`, ...
    ///
    /// # Errors
    ///
    /// As [`KnapsackInstance::new`].
    pub fn from_pairs(pairs: &[(u32, u32)], capacity: u64) -> Result<Self, ValidationError> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(value, weight))| Item::new((i + 1).to_string(), value, weight))
            .collect();
        Self::new(items, capacity)
    }

    /// Items in input order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Input indices in decision order.
    #[must_use]
    pub fn decision_order(&self) -> &[usize] {
        &self.order
    }

    /// The item decided at `level`, if `level` is a decision level.
    #[must_use]
    pub fn item_at_level(&self, level: u32) -> Option<&Item> {
        self.order
            .get(level as usize)
            .map(|&index| &self.items[index])
    }
}

impl BranchAndBoundProblem for KnapsackInstance {
    type State = KnapsackState;

    fn decision_count(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }

    fn root_state(&self) -> KnapsackState {
        KnapsackState::default()
    }

    fn branch(&self, level: u32, state: &KnapsackState, branch: Branch) -> Option<KnapsackState> {
        let item = self.item_at_level(level)?;
        match branch {
            Branch::Exclude => Some(*state),
            Branch::Include => {
                let weight = state.weight + u64::from(item.weight);
                (weight <= self.capacity).then(|| KnapsackState {
                    weight,
                    value: state.value + u64::from(item.value),
                })
            }
        }
    }

    fn bound(&self, level: u32, state: &KnapsackState) -> Bound {
        if state.weight > self.capacity {
            return Bound::Infeasible;
        }
        let mut weight = state.weight;
        let mut value = i128::from(state.value);
        for &index in self.order.iter().skip(level as usize) {
            let item = &self.items[index];
            let item_weight = u64::from(item.weight);
            if weight + item_weight <= self.capacity {
                weight += item_weight;
                value += i128::from(item.value);
                continue;
            }
            if weight < self.capacity {
                // value + (capacity - weight) * item.value / item.weight
                let room = i128::from(self.capacity - weight);
                let numer = value * i128::from(item.weight) + room * i128::from(item.value);
                return Bound::ratio(-numer, item_weight);
            }
            break;
        }
        Bound::ratio(-value, 1)
    }

    fn objective(&self, state: &KnapsackState) -> u64 {
        state.value
    }
}
