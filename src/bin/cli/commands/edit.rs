use anyhow::Result;
use chrono::NaiveDate;

use sprint_rhythm::sprints::LifeTrack;

use crate::app::App;

pub fn run(
    app: &mut App,
    key: &str,
    title: Option<String>,
    description: Option<String>,
    track: Option<LifeTrack>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<()> {
    let mut sprint = app.find_sprint(key)?;

    if let Some(title) = title {
        sprint.title = title;
    }
    if let Some(description) = description {
        sprint.description = Some(description);
    }
    if let Some(track) = track {
        sprint.life_track = track;
    }
    if let Some(start) = start {
        sprint.start_date = start;
    }
    if let Some(end) = end {
        sprint.end_date = end;
    }

    let id = sprint.id.clone();
    app.store.replace_sprint(sprint)?;
    println!("Updated {}", id);

    Ok(())
}
