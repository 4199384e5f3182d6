//! Resolved itinerary type.

use std::fmt;

use serde::Serialize;

use super::AirportCode;

/// The overall origin and final destination implied by a set of segments.
///
/// This need not be one of the input segments: for `SFO->ATL, ATL->EWR`
/// the itinerary is `SFO->EWR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Itinerary {
    /// Where the trip starts
    pub source: AirportCode,
    /// Where the trip ends
    pub destination: AirportCode,
}

impl Itinerary {
    /// Creates a new itinerary.
    pub fn new(source: AirportCode, destination: AirportCode) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// The itinerary as a two-element path, origin first.
    pub fn path(&self) -> [AirportCode; 2] {
        [self.source, self.destination]
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_display() {
        let sfo = AirportCode::parse("SFO").unwrap();
        let ewr = AirportCode::parse("EWR").unwrap();
        let itinerary = Itinerary::new(sfo, ewr);

        assert_eq!(itinerary.path(), [sfo, ewr]);
        assert_eq!(itinerary.to_string(), "SFO -> EWR");
        assert_eq!(
            serde_json::to_string(&itinerary).unwrap(),
            r#"{"source":"SFO","destination":"EWR"}"#
        );
    }
}
