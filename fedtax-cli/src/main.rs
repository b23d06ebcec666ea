use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fedtax_cli::menu;
use fedtax_core::Taxpayer;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Simplified 2025 federal income tax estimator, console edition.
///
/// Walks one in-memory session through a numbered menu; nothing is saved
/// when the program exits.
#[derive(Debug, Parser)]
struct Cli;

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep console output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut taxpayer = Taxpayer::new();

    menu::run_menu(&mut taxpayer, &mut stdin.lock(), &mut stdout.lock())
}
