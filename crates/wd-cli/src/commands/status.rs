use std::path::Path;

use chrono::Utc;
use comfy_table::{ContentArrangement, Table};

use wd_journey::Phase;

pub fn run(store_dir: &Path) -> Result<(), String> {
    let store = super::open_store(store_dir)?;
    let (filename, duck) = super::latest_duck(&store)?;

    let now = Utc::now();
    let phase = duck.phase(now);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec!["Phase".to_string(), phase.to_string()]);
    table.add_row(vec![
        "Progress".to_string(),
        format!(
            "{:.1} / {:.1} km",
            duck.progress.min(duck.route.total_km()),
            duck.route.total_km()
        ),
    ]);
    table.add_row(vec!["Speed".to_string(), format!("{:.1} km/h", duck.speed)]);
    table.add_row(vec!["Motivation".to_string(), duck.motivation.to_string()]);
    table.add_row(vec!["Experience".to_string(), duck.experience.to_string()]);
    table.add_row(vec!["Position".to_string(), duck.position().to_string()]);

    match phase {
        Phase::Deciding => {
            if let Some(scenario) = &duck.scenario {
                table.add_row(vec!["Deciding".to_string(), scenario.prompt.clone()]);
            }
        }
        Phase::Waiting => {
            table.add_row(vec![
                "Next action".to_string(),
                format!("in {}", super::human_duration(duck.next_action_at - now)),
            ]);
        }
        _ => {}
    }

    println!("{table}");
    println!();
    println!("  snapshot: {}", store.dir().join(filename).display());

    Ok(())
}
