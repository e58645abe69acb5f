//! Trace recorder: ordered, structured step events for external rendering.
//!
//! Drivers only ever append. The recorder does not format display strings;
//! that is the consumer's concern.

use serde::Serialize;

use arbor_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use arbor_kernel::proof::hash::{canonical_hash, ContentHash};
use arbor_kernel::proof::hash_domain::HashDomain;

/// One recorded step.
///
/// `seq` is the total order of recording within one run, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent<E> {
    pub seq: u64,
    #[serde(flatten)]
    pub event: E,
}

/// Append-only event log owned by one search run.
#[derive(Debug, Clone)]
pub struct TraceRecorder<E> {
    events: Vec<TraceEvent<E>>,
}

impl<E> TraceRecorder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event, returning its sequence number.
    pub fn record(&mut self, event: E) -> u64 {
        let seq = self.events.len() as u64;
        self.events.push(TraceEvent { seq, event });
        seq
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent<E>> {
        self.events
    }
}

impl<E> Default for TraceRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest of an event log under [`HashDomain::SearchTrace`].
///
/// # Errors
///
/// Returns [`CanonError`] if an event does not project to integer-only JSON.
pub fn trace_digest<E: Serialize>(events: &[TraceEvent<E>]) -> Result<ContentHash, CanonError> {
    let bytes = to_canonical_json_bytes(&events)?;
    Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
}
