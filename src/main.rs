//! Tic-tac-toe widget - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strictly_tictactoe_widget::{AudioSink, GameEngine, WavFileSink, WidgetConfig, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(cli.config.as_deref()),
        Command::Replay { moves, json } => {
            init_tracing(std::io::stderr, true)?;
            run_replay(cli.config.as_deref(), &moves, json)
        }
        Command::Tone { out } => {
            init_tracing(std::io::stderr, true)?;
            run_tone(cli.config.as_deref(), out)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_subscriber<W>(
    writer: W,
    ansi: bool,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

fn init_tracing<W>(writer: W, ansi: bool) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(log_subscriber(writer, ansi, env_filter()))
        .context("Failed to install tracing subscriber")
}

/// Run the interactive terminal widget
fn run_play(config_path: Option<&Path>) -> Result<()> {
    // Log to a file so output does not tear the terminal UI
    let log_file = std::fs::File::create("tictactoe_widget.log")
        .context("Failed to create tictactoe_widget.log")?;
    init_tracing(Arc::new(log_file), false)?;

    let config = WidgetConfig::load(config_path)?;
    run_tui(&config)
}

/// Apply moves headlessly and print the outcome
#[instrument(skip(config_path))]
fn run_replay(config_path: Option<&Path>, moves: &[usize], json: bool) -> Result<()> {
    let config = WidgetConfig::load(config_path)?;

    let mut engine = GameEngine::new();
    if let Some(chime) = config.victory_chime() {
        engine.subscribe(chime);
    }
    for &index in moves {
        engine.apply_move(index);
    }
    info!(moves = engine.state().history().len(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    } else {
        println!("{}\n\n{}", engine.board(), engine.status_line());
    }
    Ok(())
}

/// Render the configured victory tone to a WAV file
#[instrument(skip(config_path, out), fields(out = %out.display()))]
fn run_tone(config_path: Option<&Path>, out: PathBuf) -> Result<()> {
    let config = WidgetConfig::load(config_path)?;
    let tone = config.tone();

    let mut sink = WavFileSink::create(out.clone())
        .with_context(|| format!("Failed to open {}", out.display()))?;
    sink.play(tone, &tone.samples())?;

    info!(samples = tone.sample_count(), "Victory tone written");
    Ok(())
}
