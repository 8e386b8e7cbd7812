//! Scout - Best-Route Quote Scanner
//!
//! Run with: cargo run
//!
//! Encodes each candidate route into a packed path, asks the quoter
//! contract for the simulated output amount over plain eth_call, and
//! reports the route with the highest output.

use alloy_primitives::U256;
use clap::Parser;
use color_eyre::eyre::Result;
use console::style;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod path;
mod quoter;
mod resolve;
mod route;

use config::Config;
use quoter::{HttpRpc, QuoteRunner};
use resolve::HederaResolver;

/// Best-route quote scanner for Uniswap V3-style pools on Hedera
#[derive(Debug, Parser)]
#[command(name = "scout", version, about)]
struct Args {
    /// TOML config file with routes; defaults to env + built-in routes
    #[arg(short, long)]
    config: Option<String>,

    /// Override the RPC endpoint
    #[arg(long)]
    rpc_url: Option<String>,

    /// Override the quoter contract (entity ID or 0x address)
    #[arg(long)]
    quoter: Option<String>,

    /// Override the input amount (decimal, smallest unit)
    #[arg(long)]
    amount_in: Option<String>,

    /// Print the result as JSON instead of the styled report
    #[arg(long)]
    json: bool,
}

/// Machine-readable scan result.
#[derive(Debug, Serialize)]
struct BestRouteReport<'a> {
    best_route: &'a route::Route,
    best_route_index: usize,
    best_output_amount: String,
}

fn print_banner() {
    println!();
    println!(
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    );
    println!(
        "{}",
        style(" 🔭 SCOUT - Best-Route Quote Scanner").cyan().bold()
    );
    println!(
        "{}",
        style("    Packed paths | QuoterV2 eth_call | Highest output wins").cyan()
    );
    println!(
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    );
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scout=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if !args.json {
        print_banner();
    }

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(rpc_url) = args.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(quoter) = args.quoter {
        config.quoter_contract_id = quoter;
    }
    if let Some(amount_in) = args.amount_in {
        config.input_amount = amount_in;
    }

    config.validate()?;
    if !args.json {
        config.print_summary();
        println!();
    }

    // Resolve the quoter to its wire address before the first call
    let quoter_address = config.quoter_address()?;
    let amount_in: U256 = config.amount_in()?;

    info!(
        "scanning {} candidate routes via {}",
        config.routes.len(),
        config.rpc_url
    );

    let runner = QuoteRunner::new(HttpRpc::new(config.rpc_url.clone()), quoter_address);
    let best = runner
        .best_route(&config.routes, amount_in, &HederaResolver)
        .await?;

    if args.json {
        let report = BestRouteReport {
            best_route: &best.route,
            best_route_index: best.index,
            best_output_amount: best.amount_out.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} Best route: {} (#{} of {})",
        style("✓").green(),
        style(&best.route).cyan().bold(),
        best.index + 1,
        config.routes.len()
    );
    println!(
        "  Fees:          {}",
        best.route
            .fees()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Input amount:  {amount_in}");
    println!("  Output amount: {}", style(best.amount_out).green().bold());

    Ok(())
}
