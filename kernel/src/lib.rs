//! Arbor Kernel: shared plumbing for the state-space search core.
//!
//! # Modules
//!
//! - [`store`] -- arena of immutable search nodes with parent links, status
//!   tracking, and root-first path reconstruction
//! - [`proof`] -- canonical JSON bytes and domain-separated SHA-256 digests
//!
//! The two modules are independent of each other.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
pub mod store;
