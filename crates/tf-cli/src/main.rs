//! TipForge console
//!
//! Usage:
//!   tipforge                                  - Interactive menu
//!   tipforge generate -v swisslos -n 5        - Generate, check and export tips
//!   tipforge show                             - Print the last exported tips

mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tf_core::config::DRAW_HEADROOM;
use tf_core::{TipConfig, Variant, validate_batch_size};

use session::{Outcome, Session};

#[derive(Parser)]
#[command(name = "tipforge", about = "Lottery tip generator", version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record file to write and read
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    /// Largest number of tips per batch
    #[arg(long, global = true)]
    max_tips: Option<usize>,

    /// Seed for reproducible tips
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Generate tips without prompting
    Generate {
        /// Lottery format: swisslos or euro-millions
        #[arg(short, long)]
        variant: Variant,

        /// Number of tips
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,
    },
    /// Print the last exported tips
    Show,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    log::debug!("Using config {:?}", config);

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout().lock());

    let outcome = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => session.run_menu()?,
        Commands::Generate { variant, count } => {
            let max = session.config().max_tips;
            match validate_batch_size(count, variant, max) {
                Ok(count) => Some(session.generate(variant, count)?),
                Err(e) => {
                    eprintln!("Invalid number of tips: {}", e);
                    return Ok(ExitCode::from(2));
                }
            }
        }
        Commands::Show => {
            let found = session.show_record()?;
            return Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
    };

    Ok(match outcome {
        Some(Outcome::Exported { path, tips }) => {
            log::info!("Session finished: {} tips in {}", tips, path.display());
            ExitCode::SUCCESS
        }
        Some(Outcome::Rejected) | Some(Outcome::GaveUp) => ExitCode::FAILURE,
        None => ExitCode::SUCCESS,
    })
}

/// Config file (or defaults) with command-line overrides applied
fn build_config(cli: &Cli) -> Result<TipConfig> {
    let mut config = match &cli.config {
        Some(path) => TipConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TipConfig::default(),
    };

    if let Some(record) = &cli.record {
        config = config.with_record_path(record.clone());
    }
    if let Some(max) = cli.max_tips {
        let draws = config.draw_limit.max(max.saturating_mul(DRAW_HEADROOM));
        config = config.with_max_tips(max).with_draw_limit(draws);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config.validate().context("invalid settings")?;
    Ok(config)
}
