// Syncping - Wallet daemon sync probe
// Main entry point

use anyhow::Result;
use clap::Parser;

use syncping::config::{load_config, DaemonSettings};
use syncping::daemon::{DaemonClient, DaemonError, SyncRequest};
use tracing::info;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "syncping")]
#[command(about = "Wallet daemon sync probe", version)]
struct Args {
    /// Run mode
    #[command(subcommand)]
    command: Option<Command>,

    /// Daemon address as host:port (overrides config)
    #[arg(long)]
    daemon: Option<String>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Probe the daemon with a minimal sync request
    Ping,
    /// Fetch a batch of wallet sync data
    Sync {
        /// Number of blocks to request
        #[arg(long, default_value_t = 100)]
        count: u64,

        /// Height to start syncing from
        #[arg(long, default_value_t = 0)]
        start_height: u64,

        /// Timestamp to start syncing from
        #[arg(long, default_value_t = 0)]
        start_timestamp: u64,

        /// Block hash checkpoint, newest first (repeatable)
        #[arg(long = "checkpoint")]
        checkpoints: Vec<String>,

        /// Skip coinbase transactions
        #[arg(long)]
        skip_coinbase: bool,

        /// Print the raw response as pretty JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing();

    // Load configuration, then apply command-line overrides
    let mut config = load_config()?;
    if let Some(address) = args.daemon {
        config.daemon.address = address;
    }

    match args.command.unwrap_or(Command::Ping) {
        Command::Ping => run_ping(&config.daemon).await,
        Command::Sync {
            count,
            start_height,
            start_timestamp,
            checkpoints,
            skip_coinbase,
            json,
        } => {
            let request = SyncRequest::new(count)
                .with_start_height(start_height)
                .with_start_timestamp(start_timestamp)
                .with_checkpoints(checkpoints)
                .with_skip_coinbase(skip_coinbase);

            run_sync(&config.daemon, &request, json).await
        }
    }
}

/// Initialize tracing to stderr
///
/// Default: INFO level, can be overridden with RUST_LOG env var.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // Bridge log crate -> tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

/// Map a daemon error to a CLI error, keeping its short code visible
fn with_code(e: DaemonError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", e.code(), e)
}

/// Probe the daemon and print the raw response body
async fn run_ping(settings: &DaemonSettings) -> Result<()> {
    let client = DaemonClient::new(settings).map_err(with_code)?;

    info!(url = %client.sync_url(), "Pinging daemon");

    let body = client.ping().await.map_err(with_code)?;
    println!("{}", body);

    Ok(())
}

/// Fetch sync data and print a per-block summary (or raw JSON)
async fn run_sync(settings: &DaemonSettings, request: &SyncRequest, json: bool) -> Result<()> {
    let client = DaemonClient::new(settings).map_err(with_code)?;

    info!(
        url = %client.sync_url(),
        block_count = request.block_count,
        start_height = request.start_height,
        "Fetching wallet sync data"
    );

    let data = client.wallet_sync_data(request).await.map_err(with_code)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if data.items.is_empty() {
        println!("No blocks returned");
        return Ok(());
    }

    for block in &data.items {
        let tx_count = block.all_transactions().count();
        let output_count: usize = block.all_transactions().map(|tx| tx.outputs.len()).sum();
        println!(
            "block {:>9}  {} transaction(s), {} output(s)",
            block.block_height, tx_count, output_count
        );
    }

    println!(
        "\n{} block(s), heights {}..={}",
        data.items.len(),
        data.items[0].block_height,
        data.items[data.items.len() - 1].block_height
    );

    Ok(())
}
