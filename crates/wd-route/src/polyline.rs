//! Google encoded-polyline codec, precision 1e-5.
//!
//! Coordinates are scaled to integers, delta-encoded against the previous
//! point, zigzag-signed, and packed five bits per printable character.

use crate::error::{RouteError, RouteResult};
use crate::point::GeoPoint;

const PRECISION: f64 = 1e5;

/// Encode a sequence of points as a polyline string.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for p in points {
        let lat = (p.lat * PRECISION).round() as i64;
        let lon = (p.lon * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

/// Decode a polyline string into points.
pub fn decode(encoded: &str) -> RouteResult<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut pos = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut points = Vec::new();

    while pos < bytes.len() {
        lat += decode_value(bytes, &mut pos)?;
        if pos >= bytes.len() {
            return Err(RouteError::BadPolyline {
                reason: "latitude without a longitude".into(),
            });
        }
        lon += decode_value(bytes, &mut pos)?;
        points.push(GeoPoint::new(lat as f64 / PRECISION, lon as f64 / PRECISION));
    }

    Ok(points)
}

fn encode_value(value: i64, out: &mut String) {
    // Zigzag: sign lands in the low bit so small magnitudes stay short.
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };
    while v >= 0x20 {
        out.push((((0x20 | (v & 0x1f)) + 63) as u8) as char);
        v >>= 5;
    }
    out.push(((v + 63) as u8) as char);
}

fn decode_value(bytes: &[u8], pos: &mut usize) -> RouteResult<i64> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&b) = bytes.get(*pos) else {
            return Err(RouteError::BadPolyline {
                reason: "truncated value".into(),
            });
        };
        if !(63..=126).contains(&b) {
            return Err(RouteError::BadPolyline {
                reason: format!("invalid byte {b:#04x} at offset {pos}"),
            });
        }
        *pos += 1;

        let chunk = i64::from(b - 63);
        result |= (chunk & 0x1f) << shift;
        if chunk & 0x20 == 0 {
            break;
        }
        shift += 5;
        if shift > 60 {
            return Err(RouteError::BadPolyline {
                reason: "value overflow".into(),
            });
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // The worked example from Google's polyline algorithm documentation.
    const GOOGLE_EXAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn google_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(38.5, -120.2),
            GeoPoint::new(40.7, -120.95),
            GeoPoint::new(43.252, -126.453),
        ]
    }

    #[test]
    fn encodes_canonical_vector() {
        assert_eq!(encode(&google_points()), GOOGLE_EXAMPLE);
    }

    #[test]
    fn decodes_canonical_vector() {
        let points = decode(GOOGLE_EXAMPLE).unwrap();
        assert_eq!(points, google_points());
    }

    #[test]
    fn empty_string_is_empty_route() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn truncated_input_is_rejected() {
        // Drop the final byte mid-value.
        let cut = &GOOGLE_EXAMPLE[..GOOGLE_EXAMPLE.len() - 1];
        assert!(matches!(
            decode(cut),
            Err(RouteError::BadPolyline { .. })
        ));
    }

    #[test]
    fn lone_latitude_is_rejected() {
        assert!(matches!(
            decode("_p~iF"),
            Err(RouteError::BadPolyline { .. })
        ));
    }

    #[test]
    fn bytes_outside_range_are_rejected() {
        assert!(matches!(
            decode("_p~iF\x07ps|U"),
            Err(RouteError::BadPolyline { .. })
        ));
    }

    #[test]
    fn round_trips_negative_coordinates() {
        let points = vec![GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(-37.8136, 144.9631)];
        assert_eq!(decode(&encode(&points)).unwrap(), points);
    }
}
