use anyhow::{bail, Result};

use crate::app::App;

pub fn run(app: &mut App, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to reset without --yes (this deletes all sprint data)");
    }

    app.store.reset()?;
    println!("All persisted state cleared");

    Ok(())
}
