pub mod account;
pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "horizon-account")]
#[command(about = "Look up ledger accounts and balances on Horizon", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "horizon.toml")]
    pub config: String,

    /// Override the Horizon base URL from the config
    #[arg(long)]
    pub horizon_url: Option<String>,

    /// Use the public test network
    #[arg(long, conflicts_with = "horizon_url")]
    pub testnet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an account and all of its balances
    Account {
        account_id: String,
    },
    /// Show the native balance of an account
    Balance {
        account_id: String,
        #[arg(long)]
        decimals: Option<u32>,
        /// Print the amount exactly as Horizon returned it
        #[arg(long)]
        raw: bool,
    },
    /// Shorten a public key for display
    Abbreviate {
        identity: String,
        #[arg(long)]
        start: Option<usize>,
        #[arg(long)]
        end: Option<usize>,
    },
    /// Format a balance amount
    Format {
        balance: String,
        #[arg(long)]
        decimals: Option<u32>,
    },
}
