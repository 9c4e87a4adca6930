//! Error types for the geography crate.

use thiserror::Error;

/// Result type for route operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors that can occur while building routes or reading places.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route needs at least two points.
    #[error("a route needs at least two points, got {0}")]
    TooShort(usize),

    /// An encoded polyline could not be decoded.
    #[error("bad polyline: {reason}")]
    BadPolyline {
        /// What went wrong during decoding.
        reason: String,
    },

    /// A places file line did not match `NAME/LAT, LON`.
    #[error("line {line}: cannot parse place {text:?}")]
    BadPlace {
        /// 1-based line number in the places file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// No place survived the destination filters.
    #[error("no reachable destination")]
    NoDestination,
}
