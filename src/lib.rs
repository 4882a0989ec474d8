pub mod account;
pub mod error;
pub mod client;
pub mod format;
pub mod config;
pub mod cli;

pub use account::{AccountRecord, AssetType, BalanceEntry};
pub use client::HorizonClient;
pub use error::AccountError;
pub use format::{abbreviate_identity, format_balance_amount};
