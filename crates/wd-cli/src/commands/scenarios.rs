use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(scenarios_dir: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(scenarios_dir)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scenario", "Prompt", "Answers", "Outcomes"]);

    for name in catalog.names() {
        match catalog.parse(name) {
            Ok(scenario) => {
                let outcomes: usize = scenario.answers.iter().map(|a| a.outcomes.len()).sum();
                table.add_row(vec![
                    name.to_string(),
                    scenario.prompt.clone(),
                    scenario.answers.len().to_string(),
                    outcomes.to_string(),
                ]);
            }
            Err(_) => {
                table.add_row(vec![
                    name.to_string(),
                    "(parse error; run `waddle check`)".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
        }
    }

    println!("{table}");
    println!();
    println!("  {} scenarios", catalog.len());

    Ok(())
}
