//! raybind CLI — binding generation for the raylib marshalling layer.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "raybind", version, about = "raylib → Zig marshalling binding generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new binding project with a template raybind.toml
    Init {
        /// Project name
        name: String,
    },
    /// Parse the headers and write the three binding files
    Generate {
        /// Manifest path (default: raybind.toml)
        #[arg(long)]
        manifest: Option<String>,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Resolve the allow-list against the headers without writing anything
    Check {
        /// Manifest path (default: raybind.toml)
        #[arg(long)]
        manifest: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Generate { manifest, report } => {
            commands::generate::run(&cwd, manifest.as_deref(), report.as_deref())
        }
        Commands::Check { manifest } => commands::check::run(&cwd, manifest.as_deref()),
    }
}
