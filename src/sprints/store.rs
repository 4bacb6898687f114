//! Sprint store: the authoritative in-memory sequence with injected persistence

use chrono::NaiveDate;

use super::generator;
use super::models::{Sprint, SprintStatus, WEEKS_PER_SPRINT};
use super::status::sprint_status;
use crate::settings::THEME_KEY;
use crate::storage::{KvStore, Result, StorageError};

/// Persisted key for the serialized sprint sequence. The version suffix
/// tracks the wire schema; an absent key always means fresh generation,
/// never migration from an earlier version.
pub const DATA_KEY: &str = "sprint_rhythm_data_v4";

/// Owns the ordered sprint sequence and the only sanctioned mutation
/// operations. Every accepted mutation re-persists the whole sequence.
pub struct SprintStore<K: KvStore> {
    kv: K,
    sprints: Vec<Sprint>,
}

impl<K: KvStore> SprintStore<K> {
    /// Create an empty store around a persistence backend
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            sprints: Vec::new(),
        }
    }

    /// Read the persisted sequence without touching in-memory state.
    ///
    /// An absent key means the store was never initialized. A payload
    /// that fails to parse is discarded with a warning and treated the
    /// same way, so startup falls back to fresh generation instead of
    /// crashing.
    pub fn load(&self) -> Result<Option<Vec<Sprint>>> {
        let Some(raw) = self.kv.get(DATA_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(sprints) => Ok(Some(sprints)),
            Err(e) => {
                log::warn!("Discarding malformed persisted sprint data: {}", e);
                Ok(None)
            }
        }
    }

    /// One-time startup hydration: the persisted sequence if present,
    /// otherwise a freshly generated one, saved immediately.
    pub fn hydrate(&mut self, start_date: NaiveDate, count: usize) -> Result<()> {
        match self.load()? {
            Some(sprints) => {
                self.sprints = sprints;
                Ok(())
            }
            None => self.seed(start_date, count),
        }
    }

    /// Replace everything with a freshly generated sequence and persist it
    pub fn seed(&mut self, start_date: NaiveDate, count: usize) -> Result<()> {
        self.sprints = generator::generate(start_date, count);
        self.save()
    }

    /// Serialize the full current sequence, overwriting prior state
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.sprints)?;
        self.kv.set(DATA_KEY, &json)
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// Get a sprint by id
    pub fn get(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id == id)
    }

    /// First sprint that is current on the given day (the scroll target)
    pub fn current(&self, on: NaiveDate) -> Option<&Sprint> {
        self.sprints
            .iter()
            .find(|s| sprint_status(s, on) == SprintStatus::Current)
    }

    /// Replace the sprint whose id matches `updated.id` and re-persist.
    ///
    /// An unmatched id leaves the sequence unchanged (logged, non-fatal).
    /// An inverted date range or a review-flag count other than four is
    /// rejected outright.
    pub fn replace_sprint(&mut self, updated: Sprint) -> Result<()> {
        validate_sprint(&updated)?;
        match self.sprints.iter_mut().find(|s| s.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                self.save()
            }
            None => {
                log::warn!("replace_sprint: no sprint with id {}", updated.id);
                Ok(())
            }
        }
    }

    /// Flip one weekly review flag and re-persist.
    ///
    /// An unknown sprint id is a logged no-op; a week index outside
    /// 0..=3 is rejected.
    pub fn toggle_week(&mut self, sprint_id: &str, week_index: usize) -> Result<()> {
        if week_index >= WEEKS_PER_SPRINT {
            return Err(StorageError::WeekIndexOutOfRange { index: week_index });
        }
        match self.sprints.iter_mut().find(|s| s.id == sprint_id) {
            Some(sprint) => {
                sprint.weekly_reviews[week_index] = !sprint.weekly_reviews[week_index];
                self.save()
            }
            None => {
                log::warn!("toggle_week: no sprint with id {}", sprint_id);
                Ok(())
            }
        }
    }

    /// Clear all persisted state and the in-memory sequence, returning
    /// the store to never-initialized. Irreversible; callers must get
    /// explicit confirmation from the user first.
    pub fn reset(&mut self) -> Result<()> {
        self.kv.remove(DATA_KEY)?;
        self.kv.remove(THEME_KEY)?;
        self.sprints.clear();
        Ok(())
    }
}

fn validate_sprint(sprint: &Sprint) -> Result<()> {
    if sprint.start_date > sprint.end_date {
        return Err(StorageError::InvalidSprint(format!(
            "start date {} is after end date {}",
            sprint.start_date, sprint.end_date
        )));
    }
    // The review checklist stays at four flags per sprint even when an
    // edit changes the duration; any other count is rejected rather than
    // padded or truncated.
    if sprint.weekly_reviews.len() != WEEKS_PER_SPRINT {
        return Err(StorageError::InvalidSprint(format!(
            "expected {} weekly review flags, got {}",
            WEEKS_PER_SPRINT,
            sprint.weekly_reviews.len()
        )));
    }
    Ok(())
}
