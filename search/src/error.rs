//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (budget exhaustion, an exhausted frontier, an empty enumeration) are
//! legitimate answers and are expressed in each driver's outcome type.

/// Typed failure for pre-flight validation.
///
/// Returned before any node is created, so no partial outcome exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy field holds a value the driver cannot run with.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
