//! Folio CLI - static site generator for academic portfolio pages.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use folio_static::{BuildError, PageKind};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for academic portfolio pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold starter content and config in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build portfolio pages from their content documents
    Build {
        /// Build a single page (bio, research, publications, teaching)
        #[arg(short, long)]
        page: Option<PageKind>,

        /// Directory holding sidebar.json and the content documents
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the inline stylesheet
        #[arg(long)]
        minify: bool,
    },

    /// Screenshot project pages to PNG with headless Chrome
    Capture,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    let result = match cli.command {
        Commands::Init { yes } => commands::init::run(yes),
        Commands::Build {
            page,
            content_dir,
            output,
            minify,
        } => commands::build::run(
            &cli.config,
            commands::build::BuildArgs {
                page,
                content_dir,
                output,
                minify,
            },
        ),
        Commands::Capture => commands::capture::run(&cli.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// 1 when a required input file is missing, 2 for anything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    let missing = err
        .downcast_ref::<BuildError>()
        .is_some_and(BuildError::is_missing_input);

    if missing {
        1
    } else {
        2
    }
}
