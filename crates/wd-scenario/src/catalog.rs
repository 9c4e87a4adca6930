//! Named scenario sources and random selection.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{ScenarioError, ScenarioResult};
use crate::parser::parse_scenario;
use crate::scenario::Scenario;

/// A set of named scenario sources.
///
/// Sources are kept as raw text and parsed freshly on selection, so a broken
/// file only fails when (or before, via `check`) it is drawn.
#[derive(Debug, Clone)]
pub struct Catalog {
    sources: Vec<(String, String)>,
}

impl Catalog {
    /// Load every `*.txt` file in a directory, skipping dot-files. Entries
    /// are sorted by name so selection order is deterministic under a seed.
    pub fn from_dir(dir: &Path) -> ScenarioResult<Self> {
        let mut sources = Vec::new();

        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.path());

        for entry in entries {
            let path = entry.path();
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if name.starts_with('.') || path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            sources.push((name.to_string(), fs::read_to_string(&path)?));
        }

        Ok(Self { sources })
    }

    /// Build a catalog from in-memory `(name, text)` pairs.
    pub fn from_sources(sources: Vec<(String, String)>) -> Self {
        Self { sources }
    }

    /// Names of the available sources, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(name, _)| name.as_str())
    }

    /// Number of available sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalog holds no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The raw text of a named source.
    pub fn source_text(&self, name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }

    /// Parse a named source.
    pub fn parse(&self, name: &str) -> ScenarioResult<Scenario> {
        let text = self
            .source_text(name)
            .ok_or_else(|| ScenarioError::UnknownSource(name.to_string()))?;
        parse_scenario(name, text)
    }

    /// Pick a source name uniformly at random.
    ///
    /// Exclusion of `avoid` is guaranteed whenever at least one other source
    /// exists; with a single source the avoid is ignored.
    pub fn pick(&self, rng: &mut StdRng, avoid: Option<&str>) -> ScenarioResult<&str> {
        let candidates: Vec<&str> = match avoid {
            Some(avoid) if self.len() > 1 => {
                self.names().filter(|name| *name != avoid).collect()
            }
            _ => self.names().collect(),
        };

        if candidates.is_empty() {
            return Err(ScenarioError::NoScenarios);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Pick and parse a random scenario, avoiding the named source if
    /// another exists.
    pub fn get_random(&self, rng: &mut StdRng, avoid: Option<&str>) -> ScenarioResult<Scenario> {
        let name = self.pick(rng, avoid)?.to_string();
        self.parse(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::fs;

    fn source(name: &str) -> (String, String) {
        (
            name.to_string(),
            format!("A prompt for {name}\n<yes>\n1 Fine\n"),
        )
    }

    #[test]
    fn picks_uniformly_from_all_sources() {
        let catalog = Catalog::from_sources(vec![source("a"), source("b"), source("c")]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(catalog.pick(&mut rng, None).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn avoid_is_guaranteed_with_multiple_sources() {
        let catalog = Catalog::from_sources(vec![source("a"), source("b")]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(catalog.pick(&mut rng, Some("a")).unwrap(), "b");
        }
    }

    #[test]
    fn avoid_is_dropped_with_a_single_source() {
        let catalog = Catalog::from_sources(vec![source("only")]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(catalog.pick(&mut rng, Some("only")).unwrap(), "only");
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog = Catalog::from_sources(Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            catalog.pick(&mut rng, None),
            Err(ScenarioError::NoScenarios)
        ));
    }

    #[test]
    fn get_random_parses_the_picked_source() {
        let catalog = Catalog::from_sources(vec![source("a")]);
        let mut rng = StdRng::seed_from_u64(42);
        let scenario = catalog.get_random(&mut rng, None).unwrap();
        assert_eq!(scenario.source, "a");
        assert_eq!(scenario.prompt, "A prompt for a");
    }

    #[test]
    fn from_dir_reads_txt_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "B?\n<yes>\n1 Ok\n").unwrap();
        fs::write(dir.path().join("a.txt"), "A?\n<yes>\n1 Ok\n").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "nope").unwrap();
        fs::write(dir.path().join("notes.md"), "nope").unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
