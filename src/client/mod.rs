// Client module
pub mod horizon_client;

pub use horizon_client::{HorizonClient, PUBLIC_HORIZON_URL, TESTNET_HORIZON_URL};
