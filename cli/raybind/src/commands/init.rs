//! `raybind init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use raybind_gen::BindManifest;

/// Create a new binding project at the given path.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("creating {}", project_dir.display()))?;

    fs::write(project_dir.join("raybind.toml"), BindManifest::template(name))
        .context("writing raybind.toml")?;

    println!("Created binding project '{name}'");
    println!("  {name}/raybind.toml");

    Ok(())
}
