//! JSON snapshot storage for ducks.
//!
//! One file per duck, named after the instant it hatched so the lexically
//! last file is the current duck. An in-progress duck keeps its file across
//! saves; a successor gets a fresh one.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::duck::Duck;
use crate::error::JourneyResult;

/// A directory of duck snapshots.
#[derive(Debug, Clone)]
pub struct DuckStore {
    dir: PathBuf,
}

impl DuckStore {
    /// Open (creating if needed) a snapshot directory.
    pub fn open(dir: &Path) -> JourneyResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// The store's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The snapshot filename for a duck hatched at `instant`.
    pub fn filename_for(instant: DateTime<Utc>) -> String {
        format!("{}.json", instant.format("%Y%m%dT%H%M%SZ"))
    }

    /// Snapshot filenames, sorted.
    pub fn list(&self) -> JourneyResult<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|n| n.ends_with(".json") && !n.starts_with('.'))
            .collect();
        names.sort();
        Ok(names)
    }

    /// The lexically last snapshot, if any, with its filename.
    pub fn latest(&self) -> JourneyResult<Option<(String, Duck)>> {
        let Some(name) = self.list()?.pop() else {
            return Ok(None);
        };
        let duck = self.load(&name)?;
        Ok(Some((name, duck)))
    }

    /// Load a snapshot by filename.
    pub fn load(&self, filename: &str) -> JourneyResult<Duck> {
        let text = fs::read_to_string(self.dir.join(filename))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write a duck to `filename` as pretty JSON.
    pub fn save(&self, duck: &Duck, filename: &str) -> JourneyResult<PathBuf> {
        let path = self.dir.join(filename);
        let mut text = serde_json::to_string_pretty(duck)?;
        text.push('\n');
        fs::write(&path, text)?;
        Ok(path)
    }
}
