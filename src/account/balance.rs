//! Balance lookups over a retrieved account record

use super::types::{AccountRecord, BalanceEntry};

impl AccountRecord {
    /// Amount of the first native balance line, unmodified.
    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|entry| entry.asset_type.is_native())
            .map(|entry| entry.balance.as_str())
    }

    /// All non-native balance lines, in the order the server returned them.
    pub fn issued_balances(&self) -> impl Iterator<Item = &BalanceEntry> {
        self.balances.iter().filter(|entry| entry.asset_type.is_issued())
    }

    /// Amount held of the issued asset `code` from `issuer`.
    pub fn issued_balance(&self, code: &str, issuer: &str) -> Option<&str> {
        self.issued_balances()
            .find(|entry| {
                entry.asset_code.as_deref() == Some(code)
                    && entry.asset_issuer.as_deref() == Some(issuer)
            })
            .map(|entry| entry.balance.as_str())
    }
}
