pub mod settings;
pub mod sprints;
pub mod storage;
