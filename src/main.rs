use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use horizon_account::cli::{self, Cli, Commands};
use horizon_account::client::{HorizonClient, TESTNET_HORIZON_URL};
use horizon_account::config::ClientConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::load_or_default(&cli.config);
    if let Some(url) = cli.horizon_url {
        config.horizon_url = url;
    } else if cli.testnet {
        config.horizon_url = TESTNET_HORIZON_URL.to_string();
    }
    debug!("Horizon URL: {}", config.horizon_url);

    let client = HorizonClient::from_config(&config);
    let display = &config.display;

    match cli.command {
        Commands::Account { account_id } => {
            cli::account::handle_account_command(&client, display, &account_id).await;
        }
        Commands::Balance { account_id, decimals, raw } => {
            cli::account::handle_balance_command(&client, display, &account_id, decimals, raw).await;
        }
        Commands::Abbreviate { identity, start, end } => {
            cli::display::handle_abbreviate_command(display, &identity, start, end);
        }
        Commands::Format { balance, decimals } => {
            cli::display::handle_format_command(display, &balance, decimals);
        }
    }
}
