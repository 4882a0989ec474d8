use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("Horizon returned HTTP {0}")]
    Status(u16),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccountError {
    /// True when the server answered but had no account to give back.
    pub fn is_missing(&self) -> bool {
        matches!(self, AccountError::NotFound(_) | AccountError::Status(_))
    }
}
