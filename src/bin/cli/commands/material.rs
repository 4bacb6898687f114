use anyhow::{bail, Result};

use sprint_rhythm::sprints::Material;

use crate::app::App;

pub fn run_add(app: &mut App, key: &str, label: String, url: String) -> Result<()> {
    let mut sprint = app.find_sprint(key)?;

    let material = Material::new(label, url);
    let material_id = material.id.clone();
    sprint.materials.push(material);

    let sprint_id = sprint.id.clone();
    app.store.replace_sprint(sprint)?;
    println!("Added material {} to {}", material_id, sprint_id);

    Ok(())
}

pub fn run_remove(app: &mut App, key: &str, material_id: &str) -> Result<()> {
    let mut sprint = app.find_sprint(key)?;

    let len_before = sprint.materials.len();
    sprint.materials.retain(|m| m.id != material_id);
    if sprint.materials.len() == len_before {
        bail!("Material '{}' not found in {}", material_id, sprint.id);
    }

    let sprint_id = sprint.id.clone();
    app.store.replace_sprint(sprint)?;
    println!("Removed material {} from {}", material_id, sprint_id);

    Ok(())
}
