//! Account data model
//!
//! Records are plain snapshots of one Horizon response:
//! - identity and sequence
//! - ordered balance lines (native and issued assets)

pub mod types;
pub mod balance;

pub use types::{AccountId, AccountRecord, AssetType, BalanceEntry};
