//! Flight segment types.
//!
//! A `Segment` is one directed flight leg. A `SegmentSet` is the validated,
//! duplicate-free collection of segments that a single request supplies.

use std::collections::HashSet;
use std::fmt;

use super::{AirportCode, DomainError, ValidationError};

/// Order-sensitive identity of a segment.
///
/// Displays as the concatenation of source and destination codes, so
/// `SFO->ATL` and `ATL->SFO` have the distinct ids `SFOATL` and `ATLSFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId {
    source: AirportCode,
    destination: AirportCode,
}

impl SegmentId {
    /// Build the identity key for a source/destination pair.
    pub fn new(source: AirportCode, destination: AirportCode) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)
    }
}

/// A single directed flight from one airport to another.
///
/// Source and destination are always different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    source: AirportCode,
    destination: AirportCode,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// Returns an error if `source` and `destination` are the same airport.
    pub fn new(source: AirportCode, destination: AirportCode) -> Result<Self, DomainError> {
        if source == destination {
            return Err(DomainError::SameSourceAndDestination(source));
        }
        Ok(Self {
            source,
            destination,
        })
    }

    /// The departure airport.
    pub fn source(&self) -> AirportCode {
        self.source
    }

    /// The arrival airport.
    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    /// The order-sensitive identity of this segment.
    pub fn id(&self) -> SegmentId {
        SegmentId::new(self.source, self.destination)
    }

    /// Whether this segment connects `a` and `b` in either direction.
    pub fn links(&self, a: AirportCode, b: AirportCode) -> bool {
        (self.source == a && self.destination == b) || (self.source == b && self.destination == a)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// A non-empty, duplicate-free, ordered collection of segments.
///
/// Input order is preserved. It does not affect resolution but keeps
/// error reports and debugging output aligned with what the caller sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    /// Build a set from already-typed segments.
    ///
    /// Fails with `NoSegmentsProvided` on empty input and with
    /// `DuplicateSegment` on the first repeated identity key.
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Result<Self, ValidationError> {
        let mut builder = SegmentSetBuilder::default();
        for (index, segment) in segments.into_iter().enumerate() {
            builder.push(index, segment)?;
        }
        builder.finish()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a `SegmentSet` holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The first segment supplied.
    pub fn first(&self) -> &Segment {
        // Non-empty by construction
        &self.segments[0]
    }

    /// Whether a segment with the given identity is present.
    pub fn contains(&self, id: SegmentId) -> bool {
        self.segments.iter().any(|s| s.id() == id)
    }
}

impl<'a> IntoIterator for &'a SegmentSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Accumulates segments one at a time, rejecting repeated identity keys.
#[derive(Debug, Default)]
pub(crate) struct SegmentSetBuilder {
    segments: Vec<Segment>,
    seen: HashSet<SegmentId>,
}

impl SegmentSetBuilder {
    /// Append a segment; `index` is its position in the caller's input.
    pub(crate) fn push(&mut self, index: usize, segment: Segment) -> Result<(), ValidationError> {
        let id = segment.id();
        if !self.seen.insert(id) {
            return Err(ValidationError::DuplicateSegment { index, id });
        }
        self.segments.push(segment);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<SegmentSet, ValidationError> {
        if self.segments.is_empty() {
            return Err(ValidationError::NoSegmentsProvided);
        }
        Ok(SegmentSet {
            segments: self.segments,
        })
    }
}
