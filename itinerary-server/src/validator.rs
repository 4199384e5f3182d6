//! Segment validation.
//!
//! Turns raw `(source, destination)` string pairs into a [`SegmentSet`].
//! Checks run per pair in a fixed order and the first failure aborts the
//! whole operation:
//!
//! 1. both strings are non-empty ([`ValidationError::MalformedSegment`])
//! 2. both strings are valid airport codes ([`ValidationError::InvalidAirportCode`])
//! 3. source and destination differ ([`ValidationError::SameSourceAndDestination`])
//! 4. the ordered pair has not been seen before ([`ValidationError::DuplicateSegment`])

use tracing::debug;

use crate::domain::{
    AirportCode, DomainError, Segment, SegmentSet, SegmentSetBuilder, ValidationError,
};

/// Validate raw input pairs into a `SegmentSet`, preserving input order.
///
/// # Examples
///
/// ```
/// use itinerary_server::validator::validate;
///
/// let set = validate([("AUS", "LAX"), ("LAX", "JFK")]).unwrap();
/// assert_eq!(set.len(), 2);
///
/// assert!(validate([("AUS", "aus")]).is_err());
/// ```
pub fn validate<I, S>(raw_pairs: I) -> Result<SegmentSet, ValidationError>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut builder = SegmentSetBuilder::default();

    for (index, (source, destination)) in raw_pairs.into_iter().enumerate() {
        let segment = parse_segment(index, source.as_ref(), destination.as_ref())?;
        builder.push(index, segment)?;
    }

    let set = builder.finish()?;
    debug!(segments = set.len(), "validated flight segments");
    Ok(set)
}

/// Run the per-segment checks on one raw pair.
fn parse_segment(index: usize, source: &str, destination: &str) -> Result<Segment, ValidationError> {
    if source.is_empty() || destination.is_empty() {
        return Err(ValidationError::MalformedSegment { index });
    }

    let source = parse_code(index, source)?;
    let destination = parse_code(index, destination)?;

    Segment::new(source, destination).map_err(|e| match e {
        DomainError::SameSourceAndDestination(airport) => {
            ValidationError::SameSourceAndDestination { index, airport }
        }
    })
}

fn parse_code(index: usize, raw: &str) -> Result<AirportCode, ValidationError> {
    AirportCode::parse(raw).map_err(|_| ValidationError::InvalidAirportCode {
        index,
        code: raw.to_string(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Strategy for lists of distinct, valid, non-reflexive pairs.
    fn unique_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[A-Z0-9]{3}", "[A-Z0-9]{3}"), 1..20).prop_map(|pairs| {
            let mut seen = HashSet::new();
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .filter(|pair| seen.insert(pair.clone()))
                .collect()
        })
    }

    proptest! {
        /// Valid unique input always validates, preserving count and order
        #[test]
        fn preserves_count_and_order(pairs in unique_pairs()) {
            prop_assume!(!pairs.is_empty());
            let set = validate(pairs.iter().map(|(a, b)| (a.as_str(), b.as_str()))).unwrap();
            prop_assert_eq!(set.len(), pairs.len());
            for (segment, (a, b)) in set.iter().zip(&pairs) {
                let (source, destination) = (segment.source(), segment.destination());
                prop_assert_eq!(source.as_str(), a.as_str());
                prop_assert_eq!(destination.as_str(), b.as_str());
            }
        }

        /// Repeating any pair is reported as a duplicate at the repeat's index
        #[test]
        fn repeated_pair_is_duplicate(pairs in unique_pairs(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!pairs.is_empty());
            let repeated = pairs[pick.index(pairs.len())].clone();
            let mut input = pairs.clone();
            input.push(repeated);

            let result = validate(input.iter().map(|(a, b)| (a.as_str(), b.as_str())));
            let is_duplicate_at_end = matches!(
                result,
                Err(ValidationError::DuplicateSegment { index, .. }) if index == pairs.len()
            );
            prop_assert!(is_duplicate_at_end);
        }
    }
}
