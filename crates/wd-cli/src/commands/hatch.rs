use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use wd_journey::{DuckStore, JourneyConfig};

pub fn run(
    store_dir: &Path,
    route_file: Option<&Path>,
    places_file: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = super::open_store(store_dir)?;
    let (_, duck) = super::latest_duck(&store)?;

    if !duck.is_finished() {
        return Err("the current duck is still travelling; advance it instead".into());
    }

    let seed = seed.unwrap_or_else(rand::random);

    // The successor sets off from wherever the last journey ended, with the
    // earned experience opening up longer legs.
    let origin = duck.position();
    let (route, destination) =
        super::build_route(route_file, places_file, seed, Some(origin), duck.experience)?;

    let now = Utc::now();
    let successor = duck
        .successor(route, &JourneyConfig::default(), now)
        .map_err(|e| e.to_string())?;
    let path = store
        .save(&successor, &DuckStore::filename_for(now))
        .map_err(|e| e.to_string())?;

    println!(
        "A new duck hatches at {} with {} experience.",
        successor.position(),
        successor.experience
    );
    if let Some(name) = destination {
        println!("  heading for: {name}");
    }
    println!("  route: {:.1} km", successor.route.total_km());
    println!("  snapshot: {}", path.display());
    println!();
    println!("  {}", "waddle advance   # off we go again".dimmed());

    Ok(())
}
