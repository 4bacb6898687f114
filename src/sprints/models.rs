//! Sprint data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of weekly review flags per sprint. Fixed at four regardless
/// of the actual sprint duration.
pub const WEEKS_PER_SPRINT: usize = 4;

/// Life-focus category of a sprint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LifeTrack {
    Stability,
    Growth,
    Recovery,
}

impl LifeTrack {
    /// Human-readable track name
    pub fn name(&self) -> &'static str {
        match self {
            LifeTrack::Stability => "Stability",
            LifeTrack::Growth => "Growth",
            LifeTrack::Recovery => "Recovery",
        }
    }

    /// Lowercase wire form, as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeTrack::Stability => "stability",
            LifeTrack::Growth => "growth",
            LifeTrack::Recovery => "recovery",
        }
    }
}

impl std::str::FromStr for LifeTrack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stability" => Ok(LifeTrack::Stability),
            "growth" => Ok(LifeTrack::Growth),
            "recovery" => Ok(LifeTrack::Recovery),
            other => Err(format!(
                "Unknown life track '{}' (expected stability, growth, or recovery)",
                other
            )),
        }
    }
}

impl std::fmt::Display for LifeTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a sprint sits relative to a reference day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    Past,
    Current,
    Future,
}

impl SprintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintStatus::Past => "past",
            SprintStatus::Current => "current",
            SprintStatus::Future => "future",
        }
    }
}

impl std::fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled external resource link attached to a sprint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Unique within the owning sprint
    pub id: String,
    pub label: String,
    pub url: String,
}

impl Material {
    /// Create a material with a fresh id
    pub fn new(label: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label,
            url,
        }
    }
}

/// A fixed-period life-planning unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Stable unique identifier, assigned at creation
    pub id: String,
    pub title: String,
    /// Inclusive period; `start_date <= end_date`
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub life_track: LifeTrack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order is user-significant; append on create
    pub materials: Vec<Material>,
    /// One flag per nominal week, Week 1 to Week 4
    pub weekly_reviews: Vec<bool>,
}
