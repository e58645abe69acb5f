//! Search policy types.
//!
//! Every field has a default, so a policy deserialized from a partial JSON
//! object is always complete.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Order in which branch-and-bound pops pending nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierDiscipline {
    /// Lowest bound first; ties broken by creation order.
    #[default]
    LeastCost,
    /// Plain queue. Same optimum, more nodes expanded.
    Fifo,
}

/// Branch-and-bound configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BnbPolicy {
    pub frontier: FrontierDiscipline,
}

/// Best-first (A*) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarPolicy {
    /// Hard cap on frontier pops.
    pub max_iterations: u64,
}

impl AStarPolicy {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for AStarPolicy {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Backtracking enumeration configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktrackPolicy {
    /// Stop after this many solutions. `None` enumerates exhaustively.
    pub solution_limit: Option<u64>,
}

impl BacktrackPolicy {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `solution_limit` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.solution_limit == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "solution_limit must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}
