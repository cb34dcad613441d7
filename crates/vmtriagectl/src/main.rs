//! VM Triage Control - CLI for inspecting health-check triage results
//!
//! Loads a health-check report file, runs the triage pipeline, and prints
//! the prioritized problem list or a one-line health summary.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vmtriagectl")]
#[command(about = "Turn VM health-check reports into prioritized problems", long_about = None)]
#[command(version)]
struct Cli {
    /// Language for problem text (es, en); unsupported tags fall back to es
    #[arg(long, global = true, default_value = "es")]
    lang: String,

    /// Technical detail level (basic, intermediate, advanced)
    #[arg(long, global = true, default_value = "intermediate")]
    level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full triage report for one VM
    Triage {
        /// Path to the health-check report (JSON)
        report: PathBuf,

        /// VM identifier
        #[arg(long)]
        vm_id: String,

        /// VM display name (defaults to the id)
        #[arg(long)]
        vm_name: Option<String>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// One-line health summary for one VM
    Summary {
        /// Path to the health-check report (JSON)
        report: PathBuf,

        /// VM identifier
        #[arg(long)]
        vm_id: String,

        /// VM display name (defaults to the id)
        #[arg(long)]
        vm_name: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::parse_config(&cli.lang, &cli.level);

    match cli.command {
        Commands::Triage {
            report,
            vm_id,
            vm_name,
            json,
        } => commands::triage(&report, &vm_id, vm_name.as_deref(), &config, json),
        Commands::Summary {
            report,
            vm_id,
            vm_name,
        } => commands::summary(&report, &vm_id, vm_name.as_deref(), &config),
    }
}
