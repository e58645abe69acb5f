//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers. Floats are rejected so digests never depend on
//!    float formatting.
//!
//! `serde_json::Map` is ordered by key (the `preserve_order` feature is not
//! enabled anywhere in this workspace), so sorting falls out of the map type
//! and the work here is the integer check.

use serde::Serialize;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { path: String, raw: String },
    /// The value could not be projected to JSON at all.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number at {path} in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON projection failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    check_integers(value, &mut String::from("$"))?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Project any `Serialize` value to canonical JSON bytes.
///
/// # Errors
///
/// Returns [`CanonError::Serialize`] if projection fails, or
/// [`CanonError::NonIntegerNumber`] as for [`canonical_json_bytes`].
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonError> {
    let projected = serde_json::to_value(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })?;
    canonical_json_bytes(&projected)
}

fn check_integers(value: &serde_json::Value, path: &mut String) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if n.as_i64().is_none() && n.as_u64().is_none() => {
            Err(CanonError::NonIntegerNumber {
                path: path.clone(),
                raw: n.to_string(),
            })
        }
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                check_integers(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        serde_json::Value::Object(map) => {
            for (key, item) in map {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                check_integers(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
