//! Itinerary resolution.
//!
//! This module reconstructs the overall origin and destination implied by an
//! unordered set of flight segments, in two passes:
//!
//! 1. [`find_endpoints`] balances departures against arrivals per airport to
//!    pick a candidate source and destination (cheap, O(n)).
//! 2. [`verify_connectivity`] walks the segments breadth-first from the
//!    candidate source to confirm they form one connected chain.

mod balance;
mod connectivity;


pub use balance::{degree_balances, find_endpoints};
pub use connectivity::{Traversal, traverse, verify_connectivity};

use tracing::debug;

use crate::domain::{Itinerary, SegmentSet};

/// Error from itinerary resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Degree balancing found no unique start and end
    #[error("failed to find flight path")]
    NoFlightPath,

    /// Endpoints exist but the segments do not form one connected chain
    #[error("disconnected flights")]
    DisconnectedPath,
}

/// Resolve a set of segments into the itinerary they imply.
///
/// Pure and deterministic: the same set always yields the same itinerary or
/// the same error, whatever order the segments were supplied in.
///
/// # Examples
///
/// ```
/// use itinerary_server::resolver::resolve;
/// use itinerary_server::validator::validate;
///
/// let segments = validate([("ATL", "EWR"), ("SFO", "ATL")]).unwrap();
/// let itinerary = resolve(&segments).unwrap();
/// assert_eq!(itinerary.to_string(), "SFO -> EWR");
/// ```
pub fn resolve(segments: &SegmentSet) -> Result<Itinerary, ResolveError> {
    let candidate = find_endpoints(segments)?;
    verify_connectivity(&candidate, segments)?;

    debug!(itinerary = %candidate, segments = segments.len(), "resolved itinerary");
    Ok(candidate)
}
