//! Run configuration: one policy per driver, loadable from JSON.
//!
//! Every field is optional in the JSON form and missing fields take the
//! driver defaults. Unknown fields are ignored. A loaded configuration is
//! validated before it is returned, so a `RunConfig` in hand is runnable.

use serde::{Deserialize, Serialize};

use arbor_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use arbor_kernel::proof::hash::{canonical_hash, ContentHash};
use arbor_kernel::proof::hash_domain::HashDomain;
use arbor_search::error::SearchError;
use arbor_search::policy::{AStarPolicy, BacktrackPolicy, BnbPolicy};

/// Policies for all three drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub knapsack: BnbPolicy,
    pub puzzle: AStarPolicy,
    pub coloring: BacktrackPolicy,
}

/// Error loading a [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Not valid JSON, or not the expected shape.
    Parse { detail: String },
    /// Well-formed but rejected by a driver.
    Invalid(SearchError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { detail } => write!(f, "run config does not parse: {detail}"),
            Self::Invalid(e) => write!(f, "run config rejected: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    /// Parse and validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields,
    /// and [`ConfigError::Invalid`] if a policy fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first [`SearchError`] among the contained policies.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.puzzle.validate()?;
        self.coloring.validate()
    }

    /// Digest of the configuration under [`HashDomain::RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if projection fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = to_canonical_json_bytes(self)?;
        Ok(canonical_hash(HashDomain::RunConfig, &bytes))
    }
}
