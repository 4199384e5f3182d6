//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;

/// One flight as sent by the client: `["SFO", "ATL"]`.
///
/// Decoded as a plain list so that short entries and `null` elements reach
/// validation and are reported as malformed rather than as undecodable JSON.
/// Elements past the second are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawSegment(pub Vec<Option<String>>);

impl RawSegment {
    /// A well-formed two-element entry.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self(vec![Some(source.into()), Some(destination.into())])
    }

    /// Source and destination strings; missing or `null` entries read as empty.
    pub fn pair(&self) -> (&str, &str) {
        let source = self.0.first().and_then(Option::as_deref).unwrap_or("");
        let destination = self.0.get(1).and_then(Option::as_deref).unwrap_or("");
        (source, destination)
    }
}

/// Request body for `POST /calculate`: an unordered list of flights.
///
/// A `null` body decodes as an empty list and a `null` entry as an empty
/// flight, so both are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<Vec<Option<RawSegment>>>")]
pub struct CalculateRequest {
    pub segments: Vec<RawSegment>,
}

impl CalculateRequest {
    /// Number of flights in the request.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the request lists no flights.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the flights in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, RawSegment> {
        self.segments.iter()
    }
}

impl From<Option<Vec<Option<RawSegment>>>> for CalculateRequest {
    fn from(raw: Option<Vec<Option<RawSegment>>>) -> Self {
        Self {
            segments: raw
                .unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
        }
    }
}

impl FromIterator<RawSegment> for CalculateRequest {
    fn from_iter<I: IntoIterator<Item = RawSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

/// Outcome marker in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response body for `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Whether the request succeeded
    pub status: ResponseStatus,

    /// Overall origin and destination, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,

    /// What went wrong, on error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CalculateResponse {
    /// A successful response carrying the itinerary as a two-stop path.
    pub fn success(itinerary: &Itinerary) -> Self {
        Self {
            status: ResponseStatus::Success,
            path: Some(
                itinerary
                    .path()
                    .iter()
                    .map(|code| code.as_str().to_string())
                    .collect(),
            ),
            message: None,
        }
    }

    /// An error response with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            path: None,
            message: Some(message.into()),
        }
    }
}
