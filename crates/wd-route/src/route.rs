//! The route the duck walks.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RouteError, RouteResult};
use crate::point::GeoPoint;
use crate::polyline;

/// An ordered, immutable sequence of at least two points.
///
/// Cumulative leg lengths are computed once at construction so progress
/// lookups are a prefix walk, not repeated haversine sums. Serializes as its
/// encoded polyline string.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<GeoPoint>,
    cumulative_km: Vec<f64>,
}

impl Route {
    /// Build a route from points. Fails with [`RouteError::TooShort`] on
    /// fewer than two points.
    pub fn from_points(points: Vec<GeoPoint>) -> RouteResult<Self> {
        if points.len() < 2 {
            return Err(RouteError::TooShort(points.len()));
        }

        let mut cumulative_km = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative_km.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance_km(pair[1]);
            cumulative_km.push(total);
        }

        Ok(Self {
            points,
            cumulative_km,
        })
    }

    /// Build a route from an encoded polyline string.
    pub fn from_polyline(encoded: &str) -> RouteResult<Self> {
        Self::from_points(polyline::decode(encoded)?)
    }

    /// A two-point leg between `from` and `to`.
    pub fn straight(from: GeoPoint, to: GeoPoint) -> RouteResult<Self> {
        Self::from_points(vec![from, to])
    }

    /// The route's points, in walking order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Total route length in kilometres.
    pub fn total_km(&self) -> f64 {
        // cumulative_km is never empty: construction requires >= 2 points.
        self.cumulative_km[self.cumulative_km.len() - 1]
    }

    /// Cumulative length of the prefix `points[0..=index]` in kilometres.
    pub fn prefix_km(&self, index: usize) -> f64 {
        self.cumulative_km[index.min(self.cumulative_km.len() - 1)]
    }

    /// The walked prefix at `progress_km`: the longest prefix whose
    /// cumulative length does not exceed the progress. Always contains at
    /// least the first point; at or beyond the total it is the whole route.
    pub fn travelled(&self, progress_km: f64) -> &[GeoPoint] {
        let mut end = 0;
        for (i, &km) in self.cumulative_km.iter().enumerate() {
            if km <= progress_km {
                end = i;
            } else {
                break;
            }
        }
        &self.points[..=end]
    }

    /// The current position at `progress_km`: the last point of the walked
    /// prefix.
    pub fn position(&self, progress_km: f64) -> GeoPoint {
        // travelled() is never empty.
        *self
            .travelled(progress_km)
            .last()
            .unwrap_or(&self.points[0])
    }

    /// The route's encoded polyline string.
    pub fn to_polyline(&self) -> String {
        polyline::encode(&self.points)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_polyline())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Route::from_polyline(&encoded).map_err(D::Error::custom)
    }
}
