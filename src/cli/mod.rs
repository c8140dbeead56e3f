//! muestra CLI - Dataset preview normalization
//!
//! Command-line interface for inspecting preview payloads, metadata and
//! full listing documents.

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::view::ViewConfig;

mod preview;

/// muestra - Normalize dataset preview payloads into tables
#[derive(Parser)]
#[command(name = "muestra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log shape detection and loading details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sample_data payload as a table
    Preview {
        /// Path to a JSON file holding the payload
        path: PathBuf,
        /// Print the canonical table as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Render a metadata object as label/value pairs
    Grid {
        /// Path to a JSON file holding the metadata object
        path: PathBuf,
        /// Display width in characters
        #[arg(short, long, default_value = "80")]
        width: u16,
    },
    /// Render a full dataset listing
    Show {
        /// Path to a JSON file holding the listing
        path: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Table layout flags
#[derive(Args)]
struct LayoutArgs {
    /// Display width in characters
    #[arg(short, long, default_value = "80")]
    width: u16,
    /// Maximum width of a single column
    #[arg(long = "max-col-width", default_value = "40")]
    max_column_width: usize,
}

impl LayoutArgs {
    fn to_config(&self) -> crate::Result<ViewConfig> {
        let config = ViewConfig::new()
            .width(self.width)
            .max_column_width(self.max_column_width);
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "muestra=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Preview { path, json, layout } => layout
            .to_config()
            .and_then(|config| preview::cmd_preview(&path, json, config, &mut out)),
        Commands::Grid { path, width } => preview::cmd_grid(&path, width, &mut out),
        Commands::Show { path, layout } => layout
            .to_config()
            .and_then(|config| preview::cmd_show(&path, config, &mut out)),
    };

    let result = result.and_then(|()| out.flush().map_err(crate::Error::io_no_path));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
