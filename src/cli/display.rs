use crate::config::DisplayConfig;
use crate::format::{abbreviate_identity, format_balance_amount};

pub fn handle_abbreviate_command(display: &DisplayConfig, identity: &str, start: Option<usize>, end: Option<usize>) {
    let start = start.unwrap_or(display.start_chars);
    let end = end.unwrap_or(display.end_chars);
    println!("{}", abbreviate_identity(identity, start, end));
}

pub fn handle_format_command(display: &DisplayConfig, balance: &str, decimals: Option<u32>) {
    println!("{}", format_balance_amount(balance, decimals.unwrap_or(display.decimals)));
}
