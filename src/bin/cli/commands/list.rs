use anyhow::Result;
use chrono::Local;

use sprint_rhythm::sprints::{format_range, sprint_status, SprintStatus};

use crate::app::App;
use crate::render::{paint, review_boxes, status_color, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let sprints = app.store.sprints();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for sprint in sprints {
                let status = sprint_status(sprint, today);
                output.push(serde_json::json!({
                    "id": sprint.id,
                    "title": sprint.title,
                    "startDate": sprint.start_date,
                    "endDate": sprint.end_date,
                    "lifeTrack": sprint.life_track,
                    "status": status,
                    "weeklyReviews": sprint.weekly_reviews,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for sprint in sprints {
                let status = sprint_status(sprint, today);
                let marker = if status == SprintStatus::Current {
                    "* "
                } else {
                    "  "
                };
                // Pad before painting so ANSI codes don't skew columns
                let track = paint(
                    &format!("{:<10}", sprint.life_track.as_str()),
                    Color::MAGENTA,
                    use_color,
                );
                let status_label = paint(
                    &format!("{:<8}", status.as_str()),
                    status_color(status),
                    use_color,
                );
                println!(
                    "{}{:<12} {:<24} {} {} {}",
                    marker,
                    sprint.id,
                    format_range(sprint),
                    track,
                    status_label,
                    review_boxes(&sprint.weekly_reviews),
                );
            }
        }
    }

    Ok(())
}
