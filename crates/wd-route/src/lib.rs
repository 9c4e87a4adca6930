//! Geography for Waddle: points, routes, the polyline codec, and places.
//!
//! This crate is independent of the scenario engine; it only knows about
//! positions on the Earth and distances between them. A [`Route`] is the
//! ordered sequence of points the duck walks; it serializes as a Google
//! encoded polyline so snapshots stay compact.

/// Error types used throughout the crate.
pub mod error;
/// The `NAME/LAT, LON` places file and destination picking.
pub mod places;
/// A WGS84 coordinate pair and haversine distance.
pub mod point;
/// Google encoded-polyline codec.
pub mod polyline;
/// An ordered, immutable sequence of points with cumulative lengths.
pub mod route;

/// Re-export error types.
pub use error::{RouteError, RouteResult};
/// Re-export place types.
pub use places::{Place, parse_places, random_destination};
/// Re-export the coordinate type.
pub use point::GeoPoint;
/// Re-export the route type.
pub use route::Route;
