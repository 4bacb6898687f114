use anyhow::Result;
use chrono::Local;

use sprint_rhythm::sprints::{format_range, sprint_status};

use crate::app::App;
use crate::render::{paint, status_color, Color};
use crate::OutputFormat;

pub fn run(app: &App, key: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let sprint = app.find_sprint(key)?;
    let status = sprint_status(&sprint, Local::now().date_naive());

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&sprint)?;
            value["status"] = serde_json::to_value(status)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} ({})",
                paint(&sprint.title, Color::BOLD, use_color),
                sprint.id
            );
            println!("  {}", format_range(&sprint));
            println!(
                "  track: {}  status: {}",
                paint(sprint.life_track.as_str(), Color::MAGENTA, use_color),
                paint(status.as_str(), status_color(status), use_color),
            );
            if let Some(description) = &sprint.description {
                println!("  {}", paint(description, Color::DIM, use_color));
            }

            println!("  weekly reviews:");
            for (i, done) in sprint.weekly_reviews.iter().enumerate() {
                let mark = if *done { "x" } else { " " };
                println!("    [{}] Week {}", mark, i + 1);
            }

            if sprint.materials.is_empty() {
                println!("  (no materials)");
            } else {
                println!("  materials:");
                for material in &sprint.materials {
                    println!(
                        "    {} {} ({})",
                        paint(&material.id, Color::GRAY, use_color),
                        material.label,
                        material.url
                    );
                }
            }
        }
    }

    Ok(())
}
