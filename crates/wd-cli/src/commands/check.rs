use std::path::Path;

use wd_scenario::diagnostics::render_parse_error;

pub fn run(scenarios_dir: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(scenarios_dir)?;

    let mut failures = 0;
    for name in catalog.names() {
        if let Err(err) = catalog.parse(name) {
            failures += 1;
            let text = catalog.source_text(name).unwrap_or_default();
            eprint!("{}", render_parse_error(text, &format!("{name}.txt"), &err));
        }
    }

    if failures > 0 {
        Err(format!(
            "{failures} of {} scenarios failed to parse",
            catalog.len()
        ))
    } else {
        println!("  All {} scenarios parse.", catalog.len());
        Ok(())
    }
}
