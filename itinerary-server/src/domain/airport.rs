//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-character IATA-style airport code.
///
/// Airport codes are always 3 characters drawn from uppercase ASCII letters
/// and digits. No lookup against real-world airports is performed. This
/// type guarantees that any `AirportCode` value is well-formed by
/// construction.
///
/// Codes order lexicographically, which the resolver relies on for
/// deterministic endpoint selection.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::AirportCode;
///
/// let sfo = AirportCode::parse("SFO").unwrap();
/// assert_eq!(sfo.as_str(), "SFO");
///
/// // Digits are allowed
/// assert!(AirportCode::parse("A1B").is_ok());
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("sfo").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("SF").is_err());
/// assert!(AirportCode::parse("SFOO").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 characters, each an uppercase ASCII
    /// letter (A-Z) or digit (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z or digits 0-9",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,2}|[A-Z0-9]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Ordering agrees with string ordering
        #[test]
        fn ordering_matches_str(a in "[A-Z0-9]{3}", b in "[A-Z0-9]{3}") {
            let ca = AirportCode::parse(&a).unwrap();
            let cb = AirportCode::parse(&b).unwrap();
            prop_assert_eq!(ca.cmp(&cb), a.cmp(&b));
        }
    }
}
