//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from resolution failures (see `resolver::ResolveError`) and from
//! transport errors.

use super::{AirportCode, SegmentId};

/// Errors raised while constructing individual domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A segment would depart from and arrive at the same airport
    #[error("source and destination airports must be different: {0}")]
    SameSourceAndDestination(AirportCode),
}

/// Errors raised while turning raw input pairs into a `SegmentSet`.
///
/// Each variant is a distinct, stable kind; `index` is the zero-based
/// position of the offending pair in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The input contained no segments at all
    #[error("at least one flight segment is required")]
    NoSegmentsProvided,

    /// A pair is missing its source or destination
    #[error("segment {index}: flight should have source and destination")]
    MalformedSegment { index: usize },

    /// A code is not 3 uppercase letters or digits
    #[error("segment {index}: invalid airport code {code:?}")]
    InvalidAirportCode { index: usize, code: String },

    /// Source and destination are the same airport
    #[error("segment {index}: source and destination airports must be different ({airport})")]
    SameSourceAndDestination { index: usize, airport: AirportCode },

    /// The same ordered pair appeared earlier in the input
    #[error("segment {index}: duplicate flight segment {id}")]
    DuplicateSegment { index: usize, id: SegmentId },
}

impl ValidationError {
    /// Index of the offending input pair, if the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::NoSegmentsProvided => None,
            ValidationError::MalformedSegment { index }
            | ValidationError::InvalidAirportCode { index, .. }
            | ValidationError::SameSourceAndDestination { index, .. }
            | ValidationError::DuplicateSegment { index, .. } => Some(*index),
        }
    }
}
