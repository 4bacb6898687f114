use anyhow::Result;

use sprint_rhythm::settings::{load_theme, save_theme, Theme};

use crate::app::App;

pub fn run(app: &mut App, theme: Option<Theme>) -> Result<()> {
    match theme {
        Some(theme) => {
            save_theme(&mut app.kv, theme)?;
            println!("Theme set to {}", theme);
        }
        None => {
            println!("{}", load_theme(&app.kv)?);
        }
    }

    Ok(())
}
