use crate::account::AccountRecord;
use crate::client::HorizonClient;
use crate::config::DisplayConfig;
use crate::format::{abbreviate_identity, format_balance_amount};

pub async fn handle_account_command(client: &HorizonClient, display: &DisplayConfig, account_id: &str) {
    match client.retrieve_account(account_id).await {
        Some(record) => {
            for line in account_summary(&record, display) {
                println!("{}", line);
            }
        }
        None => println!("No account data for {}", account_id),
    }
}

pub async fn handle_balance_command(
    client: &HorizonClient,
    display: &DisplayConfig,
    account_id: &str,
    decimals: Option<u32>,
    raw: bool,
) {
    match client.retrieve_native_balance(account_id).await {
        Some(balance) if raw => println!("{}", balance),
        Some(balance) => {
            let decimals = decimals.unwrap_or(display.decimals);
            println!("{} XLM", format_balance_amount(&balance, decimals));
        }
        None => println!("No native balance for {}", account_id),
    }
}

/// Lines printed by `account`: the abbreviated identity, then one row per balance.
pub fn account_summary(record: &AccountRecord, display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(record.balances.len() + 2);
    lines.push(format!(
        "Account: {}",
        abbreviate_identity(&record.id, display.start_chars, display.end_chars)
    ));
    if record.balances.is_empty() {
        lines.push("  (no balances)".to_string());
    }
    for entry in &record.balances {
        lines.push(format!(
            "  {:<20} {}",
            entry.asset_label(),
            format_balance_amount(&entry.balance, display.decimals)
        ));
    }
    lines
}
