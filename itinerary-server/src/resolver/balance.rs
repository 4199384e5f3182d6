//! Candidate endpoint detection by degree balancing.
//!
//! In a single directed chain the true origin departs once more than it
//! arrives, the true terminus arrives once more than it departs, and every
//! interior airport cancels out. Balancing alone cannot tell one chain from
//! several disjoint ones, so the candidate found here still has to pass
//! connectivity verification.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{AirportCode, Itinerary, SegmentSet};

use super::ResolveError;

/// Outbound minus inbound segment count for each airport, in code order.
pub fn degree_balances(segments: &SegmentSet) -> BTreeMap<AirportCode, i32> {
    let mut balances = BTreeMap::new();
    for segment in segments {
        *balances.entry(segment.source()).or_insert(0) += 1;
        *balances.entry(segment.destination()).or_insert(0) -= 1;
    }
    balances
}

/// Pick the candidate overall source and destination.
///
/// The source is the first airport with a positive balance and the
/// destination the first with a negative one. Balances are scanned in
/// airport code order, so ties resolve to the lexicographically smallest
/// code and the result never depends on input order.
///
/// Fails with [`ResolveError::NoFlightPath`] if either role stays unfilled,
/// which happens when the segments only form closed loops.
pub fn find_endpoints(segments: &SegmentSet) -> Result<Itinerary, ResolveError> {
    let balances = degree_balances(segments);

    let source = balances
        .iter()
        .find(|(_, balance)| **balance > 0)
        .map(|(airport, _)| *airport);
    let destination = balances
        .iter()
        .find(|(_, balance)| **balance < 0)
        .map(|(airport, _)| *airport);

    match (source, destination) {
        (Some(source), Some(destination)) => {
            debug!(%source, %destination, airports = balances.len(), "found candidate endpoints");
            Ok(Itinerary::new(source, destination))
        }
        _ => {
            debug!(airports = balances.len(), "no airport with net departures or arrivals");
            Err(ResolveError::NoFlightPath)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn set(pairs: &[(&str, &str)]) -> SegmentSet {
        SegmentSet::new(
            pairs
                .iter()
                .map(|(a, b)| Segment::new(code(a), code(b)).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn balances_cancel_for_interior_airports() {
        let balances = degree_balances(&set(&[("SFO", "ATL"), ("ATL", "EWR")]));
        assert_eq!(balances[&code("SFO")], 1);
        assert_eq!(balances[&code("ATL")], 0);
        assert_eq!(balances[&code("EWR")], -1);
        assert_eq!(balances.len(), 3);
    }

    #[test]
    fn balances_accumulate_branching() {
        let balances = degree_balances(&set(&[("SFO", "ATL"), ("SFO", "EWR")]));
        assert_eq!(balances[&code("SFO")], 2);
        assert_eq!(balances[&code("ATL")], -1);
        assert_eq!(balances[&code("EWR")], -1);
    }

    #[test]
    fn endpoints_of_chain() {
        let itinerary = find_endpoints(&set(&[("ATL", "EWR"), ("SFO", "ATL")])).unwrap();
        assert_eq!(itinerary, Itinerary::new(code("SFO"), code("EWR")));
    }

    #[test]
    fn cycle_has_no_endpoints() {
        let err = find_endpoints(&set(&[("SFO", "ATL"), ("ATL", "EWR"), ("EWR", "SFO")]))
            .unwrap_err();
        assert_eq!(err, ResolveError::NoFlightPath);
    }

    #[test]
    fn round_trip_has_no_endpoints() {
        let err = find_endpoints(&set(&[("SFO", "ATL"), ("ATL", "SFO")])).unwrap_err();
        assert_eq!(err, ResolveError::NoFlightPath);
    }

    #[test]
    fn ties_pick_smallest_code() {
        // Two disjoint chains: both SFO and EWR depart, both ATL and JFK arrive
        let itinerary = find_endpoints(&set(&[("SFO", "ATL"), ("EWR", "JFK")])).unwrap();
        assert_eq!(itinerary, Itinerary::new(code("EWR"), code("ATL")));
    }
}
