//! `raybind check` — dry-run resolution of the allow-list.

use std::path::Path;

use anyhow::Result;
use raybind_gen::pipeline;

use crate::commands::generate::{load_manifest, read_headers};

/// Parse and map everything the manifest requests, reporting what resolves
/// and what is missing. Writes nothing.
pub fn run(project_dir: &Path, manifest_path: Option<&str>) -> Result<()> {
    let manifest = load_manifest(project_dir, manifest_path)?;
    let header_text = read_headers(project_dir, &manifest)?;
    let allowlist = manifest.allowlist();

    let generated =
        pipeline::generate(&header_text, &allowlist).map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("Allow-list status for '{}':", manifest.library.name);
    println!("  Requested: {}", allowlist.len());
    println!("  Resolved:  {}", generated.functions.len());
    println!("  Missing:   {}", generated.missing.len());
    for name in &generated.missing {
        println!("    {name}");
    }

    Ok(())
}
