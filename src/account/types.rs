//! Account records as served by a Horizon ledger-query endpoint

use serde::{Deserialize, Serialize};

use crate::format::abbreviate_key;

/// Public account identity (G... strkey)
pub type AccountId = String;

/// Asset classification of a balance line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The chain's base currency (XLM)
    Native,
    CreditAlphanum4,
    CreditAlphanum12,
    LiquidityPoolShares,
    #[serde(other)]
    Other,
}

impl AssetType {
    pub fn is_native(&self) -> bool {
        matches!(self, AssetType::Native)
    }

    /// Anything that is not the base currency
    pub fn is_issued(&self) -> bool {
        !self.is_native()
    }
}

/// One balance line of an account
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BalanceEntry {
    pub asset_type: AssetType,
    /// Decimal string, e.g. "42.0000000"
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<AccountId>,
}

impl BalanceEntry {
    /// Short human label: "XLM" for native, "CODE:GABC...WXYZ" for issued assets.
    pub fn asset_label(&self) -> String {
        if self.asset_type.is_native() {
            return "XLM".to_string();
        }
        match (&self.asset_code, &self.asset_issuer) {
            (Some(code), Some(issuer)) => format!("{}:{}", code, abbreviate_key(issuer)),
            (Some(code), None) => code.clone(),
            _ => format!("{:?}", self.asset_type),
        }
    }
}

/// Snapshot of an account for one retrieval. Never cached or merged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccountRecord {
    pub id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
}
