//! Connectivity verification.
//!
//! Confirms that a candidate itinerary from degree balancing is backed by one
//! connected chain of segments rather than several disjoint pieces that
//! happen to balance out.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{AirportCode, Itinerary, SegmentId, SegmentSet};

use super::ResolveError;

/// Outcome of a breadth-first walk over the segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Airports reached from the start, including the start itself.
    pub visited: HashSet<AirportCode>,

    /// Number of segments followed: those departing a visited airport.
    pub traversed_segments: usize,
}

impl Traversal {
    /// Whether `airport` was reached.
    pub fn reached(&self, airport: AirportCode) -> bool {
        self.visited.contains(&airport)
    }
}

/// Breadth-first traversal from `start` along directed segments.
///
/// Each airport is expanded at most once, and each expansion scans the full
/// segment list, so this is O(V·E). Inputs are expected to hold dozens of
/// segments, not thousands.
pub fn traverse(start: AirportCode, segments: &SegmentSet) -> Traversal {
    let mut visited = HashSet::new();
    let mut traversed_segments = 0;
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        for segment in segments {
            if segment.source() != current {
                continue;
            }
            traversed_segments += 1;
            if !visited.contains(&segment.destination()) {
                frontier.push_back(segment.destination());
            }
        }

        trace!(airport = %current, queued = frontier.len(), "expanded airport");
    }

    Traversal {
        visited,
        traversed_segments,
    }
}

/// Verify that every segment lies on one path from the candidate's source to
/// its destination.
///
/// Fails with [`ResolveError::DisconnectedPath`] when:
/// - a lone segment does not link the candidate endpoints;
/// - the destination is unreachable from the source;
/// - the endpoints are joined by a direct segment while other segments were
///   supplied too;
/// - some segment was never followed during traversal.
pub fn verify_connectivity(
    candidate: &Itinerary,
    segments: &SegmentSet,
) -> Result<(), ResolveError> {
    let (source, destination) = (candidate.source, candidate.destination);

    if segments.len() == 1 {
        return if segments.first().links(source, destination) {
            Ok(())
        } else {
            debug!(%candidate, "single segment does not match candidate");
            Err(ResolveError::DisconnectedPath)
        };
    }

    let traversal = traverse(source, segments);

    if !traversal.reached(destination) {
        debug!(%candidate, visited = traversal.visited.len(), "destination unreachable");
        return Err(ResolveError::DisconnectedPath);
    }

    if has_direct_segment(candidate, segments) {
        debug!(%candidate, segments = segments.len(), "direct segment hides extra segments");
        return Err(ResolveError::DisconnectedPath);
    }

    if traversal.traversed_segments != segments.len() {
        debug!(
            %candidate,
            traversed = traversal.traversed_segments,
            segments = segments.len(),
            "segments left untraversed"
        );
        return Err(ResolveError::DisconnectedPath);
    }

    Ok(())
}

/// Whether a single segment already goes straight from the candidate source
/// to its destination. With more than one segment supplied, the others
/// cannot all sit on the path.
fn has_direct_segment(candidate: &Itinerary, segments: &SegmentSet) -> bool {
    segments.contains(SegmentId::new(candidate.source, candidate.destination))
}
