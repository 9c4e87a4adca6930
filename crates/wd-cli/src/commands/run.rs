use std::path::Path;

use colored::Colorize;

use wd_journey::{FixedClock, Journey, JourneyConfig};

pub fn run(
    store_dir: &Path,
    scenarios_dir: &Path,
    ticks: u64,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = super::open_store(store_dir)?;
    let (filename, duck) = super::latest_duck(&store)?;

    if duck.is_finished() {
        return Err("this duck's journey is already over; hatch a successor first".into());
    }

    let catalog = super::load_catalog(scenarios_dir)?;
    let seed = seed.unwrap_or_else(rand::random);
    let config = JourneyConfig::default().with_seed(seed);

    // The clock jumps straight to each eligibility instant, so every tick
    // performs an action: initiate, then auto-play, alternating.
    let clock = FixedClock::new(duck.next_action_at);
    let mut journey = Journey::new(duck, catalog, Box::new(clock.clone()), config);

    println!(
        "  {} {}",
        "Fast-forward".bold(),
        format!("({ticks} ticks, seed={seed})").dimmed()
    );
    println!();

    for _ in 0..ticks {
        if journey.duck().is_finished() {
            break;
        }
        clock.set(journey.duck().next_action_at);
        if let Some(lines) = journey.advance(None).map_err(|e| e.to_string())? {
            for line in lines {
                println!("  {line}");
            }
        }
    }

    println!();
    println!("  {}", journey.duck().progress_summary());

    let duck = journey.into_duck();
    store.save(&duck, &filename).map_err(|e| e.to_string())?;

    Ok(())
}
