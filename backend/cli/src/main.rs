mod analyze_cmd;
mod doctor_cmd;
mod terminal_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roomlens_config::{config_dir, config_file_path, load_and_prepare};

#[derive(Parser)]
#[command(name = "roomlens")]
#[command(about = "RoomLens — housekeeping inspection reports from room photos and video")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze room photos or a walkthrough video
    Analyze {
        /// Image or video files to analyze
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Stills to rip per video (overrides config)
        #[arg(long)]
        frames: Option<u32>,
        /// Print the structured report as JSON instead of the checklist view
        #[arg(long)]
        json: bool,
    },
    /// Check credentials and external tool availability
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config_file_path(&config_dir());
    let config = load_and_prepare(&config_path).await?;

    let log_dir = config
        .logging
        .as_ref()
        .and_then(|l| l.dir.clone())
        .unwrap_or_else(|| "logs".to_string());
    let log_level = config
        .logging
        .as_ref()
        .and_then(|l| l.level.clone())
        .unwrap_or_else(|| "info".to_string());
    logging::init_logger(&log_dir, &log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            frames,
            json,
        } => analyze_cmd::run(&config, &inputs, frames, json).await,
        Commands::Doctor => doctor_cmd::run(&config).await,
    }
}
