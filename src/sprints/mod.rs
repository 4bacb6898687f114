//! Sprint sequence: models, generation, status resolution, and the store

pub mod generator;
pub mod models;
pub mod status;
pub mod store;

pub use generator::generate;
pub use models::*;
pub use status::{format_day, format_range, sprint_status, sprint_status_today};
pub use store::{SprintStore, DATA_KEY};
