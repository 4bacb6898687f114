use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use sprint_rhythm::sprints::{Sprint, SprintStore};
use sprint_rhythm::storage::FileKvStore;

/// Seed used when no persisted state exists
pub const DEFAULT_START: &str = "2026-01-17";
pub const DEFAULT_COUNT: usize = 12;

/// Shared application state for CLI commands
pub struct App {
    pub store: SprintStore<FileKvStore>,
    /// Second handle to the same directory, for the theme preference
    pub kv: FileKvStore,
}

impl App {
    /// Open the data directory and hydrate the sprint store
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => FileKvStore::default_data_dir().context("Failed to get data directory")?,
        };
        let kv = FileKvStore::new(dir).context("Failed to initialize storage")?;

        let mut store = SprintStore::new(kv.clone());
        let start: NaiveDate = DEFAULT_START.parse().expect("valid default start date");
        store
            .hydrate(start, DEFAULT_COUNT)
            .context("Failed to hydrate sprint data")?;

        Ok(Self { store, kv })
    }

    /// Find a sprint by exact id, bare number, or case-insensitive
    /// title prefix
    pub fn find_sprint(&self, key: &str) -> Result<Sprint> {
        let sprints = self.store.sprints();

        if let Some(sprint) = sprints.iter().find(|s| s.id == key) {
            return Ok(sprint.clone());
        }

        if key.chars().all(|c| c.is_ascii_digit()) && !key.is_empty() {
            let id = format!("sprint-{}", key);
            if let Some(sprint) = sprints.iter().find(|s| s.id == id) {
                return Ok(sprint.clone());
            }
        }

        let key_lower = key.to_lowercase();
        let mut matches = sprints
            .iter()
            .filter(|s| s.title.to_lowercase().starts_with(&key_lower));
        match (matches.next(), matches.next()) {
            (Some(sprint), None) => Ok(sprint.clone()),
            (Some(_), Some(_)) => bail!("Sprint '{}' is ambiguous", key),
            _ => bail!("Sprint '{}' not found", key),
        }
    }
}
