use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use wd_journey::{Duck, DuckStore, JourneyConfig};

pub fn run(
    store_dir: &Path,
    route_file: Option<&Path>,
    places_file: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = super::open_store(store_dir)?;
    let seed = seed.unwrap_or_else(rand::random);

    let (route, destination) = super::build_route(route_file, places_file, seed, None, 0)?;

    let now = Utc::now();
    let duck = Duck::new(route, &JourneyConfig::default(), now);
    let path = store
        .save(&duck, &DuckStore::filename_for(now))
        .map_err(|e| e.to_string())?;

    println!("Hatched a duck at {}.", duck.position());
    if let Some(name) = destination {
        println!("  heading for: {name}");
    }
    println!("  route: {:.1} km", duck.route.total_km());
    println!("  snapshot: {}", path.display());
    println!();
    println!("  {}", "waddle advance   # see what the duck runs into".dimmed());

    Ok(())
}
