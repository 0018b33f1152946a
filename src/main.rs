//! EpochWatch entry point
//!
//! Usage:
//!   epochwatch binance BTCUSDC btc.json 10
//!   epochwatch coingecko-latest bitcoin

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use epochwatch::config::AppConfig;
use epochwatch::epoch::{build_windows, load_dataset};
use epochwatch::error::AppError;
use epochwatch::exchange::fetch_exchange_data;
use epochwatch::report;
use epochwatch::types::Exchange;

#[derive(Parser, Debug)]
#[command(name = "epochwatch")]
#[command(about = "Fetch pair prices aligned to the recorded epoch voting window")]
struct Args {
    /// Exchange to query (ascendex, binance, coingecko-latest)
    exchange: String,

    /// Trading pair or asset id in the exchange's own format (e.g. BTCUSDC, bitcoin)
    pair: String,

    /// Path to a prior epoch dataset (JSON file exposing a `data` array)
    datafile: Option<PathBuf>,

    /// Correction offset in seconds from the start of the voting window
    #[arg(default_value_t = 0)]
    offset: i64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let cfg = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {e}");
            std::process::exit(1);
        }
    };
    info!("Config loaded: {}", cfg.digest());

    // Single failure boundary: adapter and dataset errors are reported here,
    // once, and nothing is retried.
    if let Err(e) = run(args, cfg).await {
        error!("{e:#}");
    }
}

async fn run(args: Args, cfg: AppConfig) -> anyhow::Result<()> {
    let mut windows = Vec::new();
    if let Some(path) = &args.datafile {
        let records = load_dataset(path)
            .with_context(|| format!("failed to load epoch dataset {}", path.display()))?;
        windows = build_windows(&records, args.offset, &cfg.epoch);

        if !windows.is_empty() {
            println!("data from file");
            report::print_windows(&windows);
        }
    }

    let exchange = Exchange::parse(&args.exchange)
        .ok_or_else(|| AppError::UnsupportedExchange(args.exchange.clone()))?;

    let data = fetch_exchange_data(exchange, &args.pair, &windows, &cfg)
        .await
        .with_context(|| format!("Failed to fetch data from {exchange}"))?;

    println!("data from {exchange}");
    report::print_exchange_data(&data);

    Ok(())
}
