pub mod advance;
pub mod check;
pub mod hatch;
pub mod init;
pub mod run;
pub mod scenarios;
pub mod status;

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wd_journey::{Duck, DuckStore};
use wd_route::{GeoPoint, Route, parse_places, random_destination};
use wd_scenario::Catalog;

/// Open (creating if needed) the snapshot store.
fn open_store(dir: &Path) -> Result<DuckStore, String> {
    DuckStore::open(dir).map_err(|e| e.to_string())
}

/// Load the catalog, insisting on at least one scenario file.
fn load_catalog(dir: &Path) -> Result<Catalog, String> {
    let catalog = Catalog::from_dir(dir)
        .map_err(|e| format!("cannot load scenarios from {}: {e}", dir.display()))?;
    if catalog.is_empty() {
        return Err(format!("no scenario files in {}", dir.display()));
    }
    Ok(catalog)
}

/// The latest snapshot, or a hint to run `init`.
fn latest_duck(store: &DuckStore) -> Result<(String, Duck), String> {
    store
        .latest()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "no duck yet; run `waddle init` first".to_string())
}

/// A route from either an explicit route file or a places file.
///
/// With a places file, the origin is the given point (a successor continues
/// from where the last duck stopped) or a random place for a fresh duck,
/// and the destination is picked near it, weighted by experience. Returns
/// the route and the destination name when one was picked.
fn build_route(
    route_file: Option<&Path>,
    places_file: Option<&Path>,
    seed: u64,
    origin: Option<GeoPoint>,
    experience: i32,
) -> Result<(Route, Option<String>), String> {
    match (route_file, places_file) {
        (Some(path), _) => Ok((read_route(path)?, None)),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let places =
                parse_places(&text).map_err(|e| format!("{}: {e}", path.display()))?;
            if places.is_empty() {
                return Err(format!("{} holds no places", path.display()));
            }

            let mut rng = StdRng::seed_from_u64(seed);
            let origin = match origin {
                Some(point) => point,
                None => places[rng.random_range(0..places.len())].point,
            };
            let destination = random_destination(&mut rng, &places, origin, experience, &[])
                .map_err(|e| e.to_string())?;
            let route = Route::straight(origin, destination.point).map_err(|e| e.to_string())?;
            Ok((route, Some(destination.name)))
        }
        (None, None) => Err("pass --route <file> or --places <file>".into()),
    }
}

/// Read a route file: `lat,lon` lines, or a single encoded polyline.
fn read_route(path: &Path) -> Result<Route, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let trimmed = text.trim();

    if trimmed.contains(',') {
        let mut points = Vec::new();
        for (idx, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let point = line
                .split_once(',')
                .and_then(|(lat, lon)| {
                    Some(GeoPoint::new(
                        lat.trim().parse().ok()?,
                        lon.trim().parse().ok()?,
                    ))
                })
                .ok_or_else(|| {
                    format!("{}:{}: expected `lat,lon`", path.display(), idx + 1)
                })?;
            points.push(point);
        }
        Route::from_points(points).map_err(|e| e.to_string())
    } else {
        Route::from_polyline(trimmed).map_err(|e| e.to_string())
    }
}

/// `3h 25m` / `12m 40s` / `55s`, clamped at zero.
fn human_duration(d: chrono::Duration) -> String {
    let secs = d.num_seconds().max(0);
    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}
