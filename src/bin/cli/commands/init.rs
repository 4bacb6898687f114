use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, start: NaiveDate, count: usize, format: &OutputFormat) -> Result<()> {
    app.store.seed(start, count)?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "generated": count,
                    "start": start,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!("Generated {} sprints starting {}", count, start);
        }
    }

    Ok(())
}
