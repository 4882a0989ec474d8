// Horizon REST client for account lookups
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::account::AccountRecord;
use crate::config::ClientConfig;
use crate::error::AccountError;

pub const PUBLIC_HORIZON_URL: &str = "https://horizon.stellar.org";
pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";

/// Stateless client: every call is one fresh GET, no retries, no caching.
#[derive(Clone, Debug)]
pub struct HorizonClient {
    base_url: String,
    client: Client,
}

impl HorizonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Use a caller-built `reqwest::Client`, e.g. one with its own timeout.
    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.horizon_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn account_url(&self, account_id: &str) -> String {
        format!("{}/accounts/{}", self.base_url, account_id)
    }

    /// Fetch an account, keeping the failure cause.
    pub async fn fetch_account(&self, account_id: &str) -> Result<AccountRecord, AccountError> {
        let response = self
            .client
            .get(self.account_url(account_id))
            .send()
            .await
            .map_err(|e| AccountError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AccountError::NotFound(account_id.to_string()));
        }
        if !status.is_success() {
            return Err(AccountError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AccountError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| AccountError::Decode(e.to_string()))
    }

    /// Fetch an account; any failure becomes `None`.
    ///
    /// Transport and decode failures are logged once at error level.
    pub async fn retrieve_account(&self, account_id: &str) -> Option<AccountRecord> {
        match self.fetch_account(account_id).await {
            Ok(record) => Some(record),
            Err(e) if e.is_missing() => {
                debug!("No account data for {}: {}", account_id, e);
                None
            }
            Err(e) => {
                error!("Error fetching account details for {}: {}", account_id, e);
                None
            }
        }
    }

    pub async fn fetch_native_balance(&self, account_id: &str) -> Result<Option<String>, AccountError> {
        let record = self.fetch_account(account_id).await?;
        Ok(record.native_balance().map(str::to_string))
    }

    /// Native balance string exactly as Horizon reported it.
    pub async fn retrieve_native_balance(&self, account_id: &str) -> Option<String> {
        let record = self.retrieve_account(account_id).await?;
        record.native_balance().map(str::to_string)
    }
}

impl Default for HorizonClient {
    fn default() -> Self {
        Self::new(PUBLIC_HORIZON_URL)
    }
}
