//! Halite bot CLI.
//!
//! - `halite-bot` / `halite-bot play` - speak the harness protocol on stdin/stdout
//! - `halite-bot plan` - plan one turn for a JSON snapshot and print the result

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use halite_bot::{play, plan_snapshot, BotConfig, LogConfig};

#[derive(Parser)]
#[command(name = "halite-bot")]
#[command(about = "Frontier-hungry territory capture bot", version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (per-cell decisions)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game over stdin/stdout
    Play {
        /// Override the bot name sent to the harness
        #[arg(long)]
        name: Option<String>,
    },

    /// Plan one turn for a map snapshot
    Plan {
        /// JSON snapshot (`width`, `height`, `sites`)
        #[arg(long)]
        snapshot: PathBuf,

        /// Player to plan for
        #[arg(long)]
        player: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BotConfig::load_or_default(cli.config.as_deref())?;
    if let Some(file) = cli.log_file {
        config.log.file = Some(file);
    }
    init_logging(&config.log, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Play { name: None }) {
        Commands::Play { name } => {
            if let Some(name) = name {
                config.name = name;
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            let summary = play(&mut stdin.lock(), &mut stdout.lock(), &config)?;
            tracing::info!(player = summary.player, turns = summary.turns, "game over");
            Ok(())
        }
        Commands::Plan { snapshot, player } => plan_command(&snapshot, player, &config),
    }
}

fn plan_command(snapshot: &Path, player: u8, config: &BotConfig) -> Result<()> {
    let report = plan_snapshot(snapshot, player, config.planner)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to render plan")?;
    println!("{json}");
    Ok(())
}

/// Stdout carries the game protocol, so logs go to stderr or a file.
fn init_logging(log: &LogConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { log.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = fmt().with_env_filter(filter).with_target(false).with_ansi(false);
    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            if log.json {
                builder.json().with_writer(Mutex::new(file)).init();
            } else {
                builder.with_writer(Mutex::new(file)).init();
            }
        }
        None => {
            if log.json {
                builder.json().with_writer(io::stderr).init();
            } else {
                builder.with_writer(io::stderr).init();
            }
        }
    }
    Ok(())
}
