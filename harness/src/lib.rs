//! Arbor Harness: concrete problem worlds and the runner around the drivers.
//!
//! Worlds validate raw input and adapt it to a search contract. The runner
//! picks the driver, runs it, and projects the outcome into a report. The
//! harness implements no search logic itself; it delegates to
//! `arbor_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod report;
pub mod runner;
pub mod worlds;
