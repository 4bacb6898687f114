use anyhow::{Context, Result};

use crate::app::App;
use crate::render::review_boxes;

pub fn run(app: &mut App, key: &str, week: usize) -> Result<()> {
    let sprint = app.find_sprint(key)?;

    // The CLI takes the human-facing week number; the store is 0-based
    let index = week
        .checked_sub(1)
        .context("Week number must be between 1 and 4")?;
    app.store.toggle_week(&sprint.id, index)?;

    let sprint = app
        .find_sprint(&sprint.id)
        .context("Sprint disappeared after toggle")?;
    println!("{} {}", sprint.id, review_boxes(&sprint.weekly_reviews));

    Ok(())
}
