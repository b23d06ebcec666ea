use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fedtax_api::routes;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Simplified 2025 federal income tax estimator, HTTP edition.
///
/// Serves the estimation API and the bundled browser UI over a single
/// in-memory session. All state is lost when the process exits.
#[derive(Debug, Parser)]
struct Cli {
    /// Host to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Directory holding the browser UI files.
    #[arg(long, default_value = "fedtax-api/web")]
    web_root: PathBuf,
}

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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let address: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    routes::serve(address, &cli.web_root).await
}
