//! Proof module: canonical JSON and domain-separated hashing for
//! determinism digests.
//!
//! Depends on nothing internal. `store` does not depend on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
