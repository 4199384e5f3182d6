//! Domain types for the itinerary resolver.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod error;
mod itinerary;
mod segment;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::{DomainError, ValidationError};
pub use itinerary::Itinerary;
pub use segment::{Segment, SegmentId, SegmentSet};

pub(crate) use segment::SegmentSetBuilder;
