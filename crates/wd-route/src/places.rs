//! Named places and destination picking.
//!
//! Places come from a plain text file, one per line as `NAME/LAT, LON`.
//! Lines starting with `==` are section headers and skipped, as are blanks.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{RouteError, RouteResult};
use crate::point::GeoPoint;

/// Two places closer than this are treated as the same spot.
const MIN_SEPARATION_KM: f64 = 0.2;

/// How many nearby candidates a duck with zero experience will consider.
const BASE_CANDIDATES: usize = 3;

/// A named point from the places file.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Human-readable place name.
    pub name: String,
    /// Where it is.
    pub point: GeoPoint,
}

/// Parse a places file. A malformed line is a hard error naming the line.
pub fn parse_places(text: &str) -> RouteResult<Vec<Place>> {
    let mut places = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("==") {
            continue;
        }
        places.push(parse_place(line).ok_or_else(|| RouteError::BadPlace {
            line: idx + 1,
            text: line.to_string(),
        })?);
    }

    Ok(places)
}

fn parse_place(line: &str) -> Option<Place> {
    let (name, coords) = line.split_once('/')?;
    let (lat, lon) = coords.split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Place {
        name: name.to_string(),
        point: GeoPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?),
    })
}

/// Pick a destination near `origin`.
///
/// Places are ranked by distance from the origin; anything closer than
/// 0.2 km to the origin or to an excluded point is skipped, and only the
/// `experience + 3` nearest survivors are considered, so low experience keeps
/// journeys short. The pick among the survivors is uniform.
pub fn random_destination(
    rng: &mut StdRng,
    places: &[Place],
    origin: GeoPoint,
    experience: i32,
    exclude: &[GeoPoint],
) -> RouteResult<Place> {
    let mut ranked: Vec<(&Place, f64)> = places
        .iter()
        .map(|p| (p, origin.distance_km(p.point)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let limit = experience.max(0) as usize + BASE_CANDIDATES;
    let mut options = Vec::new();

    for (place, distance) in ranked {
        if options.len() >= limit {
            break;
        }
        if distance < MIN_SEPARATION_KM {
            continue;
        }
        if exclude
            .iter()
            .any(|x| x.distance_km(place.point) < MIN_SEPARATION_KM)
        {
            continue;
        }
        options.push(place);
    }

    if options.is_empty() {
        return Err(RouteError::NoDestination);
    }
    Ok(options[rng.random_range(0..options.len())].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const PLACES: &str = "\
== Around the pond ==
The Pond/51.5000, -0.1000
The Bakery/51.5010, -0.1000
The Park/51.5100, -0.1000

== Further afield ==
The Hill/51.6000, -0.1000
The Sea/52.5000, -0.1000
";

    #[test]
    fn parses_places_and_skips_headers() {
        let places = parse_places(PLACES).unwrap();
        assert_eq!(places.len(), 5);
        assert_eq!(places[0].name, "The Pond");
        assert_eq!(places[0].point, GeoPoint::new(51.5, -0.1));
    }

    #[test]
    fn malformed_line_names_the_line() {
        let err = parse_places("The Pond/51.5, -0.1\nnot a place\n").unwrap_err();
        match err {
            RouteError::BadPlace { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not a place");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn skips_the_origin_itself() {
        let places = parse_places(PLACES).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let origin = GeoPoint::new(51.5, -0.1);

        for _ in 0..50 {
            let dest = random_destination(&mut rng, &places, origin, 0, &[]).unwrap();
            assert_ne!(dest.name, "The Pond");
        }
    }

    #[test]
    fn low_experience_stays_close() {
        let places = parse_places(PLACES).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let origin = GeoPoint::new(51.5, -0.1);

        // With zero experience only the three nearest candidates qualify, so
        // The Sea (about 111 km away) is never picked.
        for _ in 0..50 {
            let dest = random_destination(&mut rng, &places, origin, 0, &[]).unwrap();
            assert_ne!(dest.name, "The Sea");
        }
    }

    #[test]
    fn excluded_points_are_skipped() {
        let places = parse_places(PLACES).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let origin = GeoPoint::new(51.5, -0.1);
        let exclude = [GeoPoint::new(51.501, -0.1)];

        for _ in 0..50 {
            let dest = random_destination(&mut rng, &places, origin, 0, &exclude).unwrap();
            assert_ne!(dest.name, "The Bakery");
        }
    }

    #[test]
    fn no_candidates_is_an_error() {
        let places = parse_places("Here/51.5, -0.1\n").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let origin = GeoPoint::new(51.5, -0.1);
        assert!(matches!(
            random_destination(&mut rng, &places, origin, 0, &[]),
            Err(RouteError::NoDestination)
        ));
    }
}
