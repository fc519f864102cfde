use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use omniex_core::prelude::*;
use omniex_exchange::prelude::*;
use omniex_poloniex::PoloniexAdapter;

#[derive(Parser)]
#[command(name = "omniex")]
#[command(about = "A normalized trading API over pluggable exchange adapters")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level filter
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the lending order book for a currency
    LendBook {
        /// Currency in the normalized vocabulary, e.g. XBT
        currency: String,
    },
    /// Fetch available account balances (requires credentials)
    Balance,
    /// List open loan offers and active loans (requires credentials)
    ActiveOffers,
    /// Place a loan offer (requires credentials)
    PostOffer {
        /// Currency in the normalized vocabulary, e.g. XBT
        currency: String,
        /// Amount to lend
        amount: Decimal,
        /// Daily interest rate as a fraction, e.g. 0.0002
        rate: Decimal,
        /// Offer duration in days
        #[arg(long, default_value_t = 2)]
        period: u32,
        /// Renew the offer automatically when taken
        #[arg(long)]
        auto_renew: bool,
    },
    /// Cancel a loan offer by id (requires credentials)
    CancelOffer { offer_id: u64 },
    /// Print the adapter's capability descriptor
    Properties,
    /// Show version information
    Version,
}

fn load_config(path: &str) -> anyhow::Result<OmniexConfig> {
    if std::path::Path::new(path).exists() {
        OmniexConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path))
    } else {
        Ok(OmniexConfig::default())
    }
}

fn build_adapter(config: &OmniexConfig) -> PoloniexAdapter {
    match config.credentials("poloniex") {
        Some(credentials) => {
            info!("poloniex adapter configured with credentials");
            PoloniexAdapter::with_credentials(credentials.key.clone(), credentials.secret.clone())
        }
        None => PoloniexAdapter::new(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&cli.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config(&cli.config)?;
    let adapter = build_adapter(&config);

    match cli.command {
        Commands::LendBook { currency } => {
            print_json(&adapter.get_lend_book(LendBookParams { currency }).await)?;
        }
        Commands::Balance => {
            print_json(&adapter.get_balance(BalanceParams::default()).await)?;
        }
        Commands::ActiveOffers => {
            print_json(&adapter.get_active_offers().await)?;
        }
        Commands::PostOffer {
            currency,
            amount,
            rate,
            period,
            auto_renew,
        } => {
            let params = OfferParams {
                currency,
                amount,
                period,
                auto_renew,
                rate,
            };
            print_json(&adapter.place_offer(params).await)?;
        }
        Commands::CancelOffer { offer_id } => {
            print_json(&adapter.cancel_offer(CancelOfferParams { offer_id }).await)?;
        }
        Commands::Properties => {
            print_json(adapter.properties())?;
        }
        Commands::Version => {
            println!("omniex v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
