//! `raybind generate` — run the pipeline and write the three outputs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use raybind_gen::{pipeline, BindManifest};

/// Run generation: read headers, render all three documents, then write
/// them. Nothing touches the filesystem until every document exists, so a
/// failed run leaves no partial output behind.
pub fn run(project_dir: &Path, manifest_path: Option<&str>, report: Option<&str>) -> Result<()> {
    if !matches!(report, None | Some("human") | Some("json")) {
        bail!(
            "unknown report format: '{}'. Choose: human, json",
            report.unwrap_or_default()
        );
    }

    let manifest = load_manifest(project_dir, manifest_path)?;
    let header_text = read_headers(project_dir, &manifest)?;
    let allowlist = manifest.allowlist();

    let generated =
        pipeline::generate(&header_text, &allowlist).map_err(|e| anyhow::anyhow!("{e}"))?;

    write_output(project_dir, &manifest.output.zig, &generated.zig)?;
    write_output(project_dir, &manifest.output.header, &generated.header)?;
    write_output(project_dir, &manifest.output.implementation, &generated.implementation)?;

    if generated.functions.len() != allowlist.len() {
        eprintln!(
            "warning: {} of {} allow-listed functions were not generated: {}",
            generated.missing.len(),
            allowlist.len(),
            generated.missing.join(", ")
        );
    }

    match report {
        Some("json") => {
            let json = serde_json::json!({
                "library": manifest.library.name,
                "generated": generated.functions,
                "missing": generated.missing,
                "outputs": {
                    "zig": manifest.output.zig,
                    "header": manifest.output.header,
                    "implementation": manifest.output.implementation,
                },
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!(
                "Generated {} bindings for '{}' → {}, {}, {}",
                generated.functions.len(),
                manifest.library.name,
                manifest.output.zig,
                manifest.output.header,
                manifest.output.implementation
            );
        }
    }

    Ok(())
}

/// Load the manifest relative to the project directory.
pub(crate) fn load_manifest(
    project_dir: &Path,
    manifest_path: Option<&str>,
) -> Result<BindManifest> {
    let path: PathBuf = project_dir.join(manifest_path.unwrap_or("raybind.toml"));
    if !path.is_file() {
        bail!(
            "manifest not found: {} (run 'raybind init' first)",
            path.display()
        );
    }
    BindManifest::load(&path).with_context(|| format!("loading {}", path.display()))
}

/// Read every input header and concatenate with a newline, in order.
pub(crate) fn read_headers(project_dir: &Path, manifest: &BindManifest) -> Result<String> {
    let mut texts = Vec::new();
    for header in &manifest.library.headers {
        let path = project_dir.join(header);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        texts.push(text);
    }
    Ok(texts.join("\n"))
}

fn write_output(project_dir: &Path, rel_path: &str, content: &str) -> Result<()> {
    let path = project_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    println!("written to {}", path.display());
    Ok(())
}
