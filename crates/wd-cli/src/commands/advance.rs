use std::path::Path;

use colored::Colorize;

use wd_journey::{Journey, JourneyConfig, SystemClock};

pub fn run(
    store_dir: &Path,
    scenarios_dir: &Path,
    response: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = super::open_store(store_dir)?;
    let (filename, duck) = super::latest_duck(&store)?;

    if duck.is_finished() {
        println!("This duck's journey is over: {}", duck.progress_summary());
        println!("Hatch a successor with {}.", "waddle hatch".bold());
        return Ok(());
    }

    let catalog = super::load_catalog(scenarios_dir)?;
    let config = JourneyConfig::default().with_seed(seed.unwrap_or_else(rand::random));
    let mut journey = Journey::new(duck, catalog, Box::new(SystemClock), config);

    match journey.advance(response).map_err(|e| e.to_string())? {
        Some(lines) => {
            for line in &lines {
                println!("{line}");
            }
            println!();
            println!("  {}", journey.duck().progress_summary().dimmed());
        }
        None if journey.duck().scenario.is_some() => {
            if response.is_some() {
                println!("{}", "That matches none of the answers.".yellow());
                for answer in journey.acceptable_answers() {
                    println!("> {answer}");
                }
            } else {
                println!(
                    "Voting is open for another {}.",
                    super::human_duration(journey.time_remaining())
                );
            }
        }
        None => {
            println!(
                "The duck is walking. Next scenario in {}.",
                super::human_duration(journey.time_remaining())
            );
        }
    }

    let duck = journey.into_duck();
    store.save(&duck, &filename).map_err(|e| e.to_string())?;

    Ok(())
}
