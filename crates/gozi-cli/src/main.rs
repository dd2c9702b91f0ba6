//! Terminal entry point for GOZI.
//!
//! Plays interactive sessions against the computer, fully automated sessions
//! with `--auto`, or parallel statistics runs with the `batch` subcommand.
//! Narration goes to stdout; logs go to stderr (`RUST_LOG`, default `warn`).

mod terminal;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gozi_core::batch::{simulate_batch, BatchConfig};
use gozi_core::error::GameError;
use gozi_core::roster::Catalog;
use gozi_core::session::{Session, SessionConfig};
use tracing_subscriber::EnvFilter;

use terminal::{Format, TerminalHost};

/// GOZI: Battle of the Warriors
#[derive(Parser)]
#[command(name = "gozi")]
#[command(about = "Turn-based warrior battles in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed for draws and damage rolls (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Restrict the catalog to these archetypes (at least six)
    #[arg(long, value_delimiter = ',', global = true)]
    roster: Vec<String>,

    /// Number of matches to play (until quit if omitted; one with --auto)
    #[arg(long)]
    matches: Option<u32>,

    /// Let the computer control the home team too
    #[arg(long)]
    auto: bool,

    /// Print events and menus as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run automated sessions in parallel and print aggregate results
    Batch {
        /// Independent sessions to run
        #[arg(long, default_value_t = 100)]
        sessions: u32,

        /// Matches per session
        #[arg(long = "matches-per-session", default_value_t = 10)]
        matches_per_session: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(&cli.roster)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, archetypes = catalog.len(), "gozi starting");

    match cli.command {
        Some(Command::Batch {
            sessions,
            matches_per_session,
        }) => run_batch(
            &BatchConfig {
                sessions,
                matches_per_session,
                base_seed: seed,
            },
            &catalog,
        ),
        None => play(&cli, catalog, seed),
    }
}

fn load_catalog(names: &[String]) -> Result<Catalog> {
    if names.is_empty() {
        return Ok(Catalog::standard());
    }
    Catalog::from_names(names).context("invalid --roster")
}

fn play(cli: &Cli, catalog: Catalog, seed: u64) -> Result<()> {
    let config = if cli.auto {
        SessionConfig::automated()
    } else {
        SessionConfig::default()
    };
    let format = if cli.json { Format::Json } else { Format::Text };
    let host = TerminalHost::new(seed, io::stdin().lock(), io::stdout(), format);
    let mut session = Session::new(config, catalog, host).context("failed to start session")?;

    let matches = cli.matches.or(cli.auto.then_some(1));
    let result = match matches {
        Some(n) => session.run(n).map(|_| ()),
        None => loop {
            if let Err(err) = session.play_match() {
                break Err(err);
            }
        },
    };

    match result {
        Ok(()) => {}
        Err(GameError::SessionAbandoned) => tracing::info!("session abandoned"),
        Err(err) => return Err(err).context("session failed"),
    }

    let [home, away] = session.scores();
    if !cli.json {
        println!("Final score\nHome: {home}\nAway: {away}");
    }
    Ok(())
}

fn run_batch(config: &BatchConfig, catalog: &Catalog) -> Result<()> {
    let report = simulate_batch(config, catalog).context("batch failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
