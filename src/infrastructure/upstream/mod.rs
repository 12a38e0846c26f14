pub mod data_api;
pub mod rpc;

use crate::core::errors::WalletError;
use crate::core::models::{TokenEntry, UpstreamActivity, UpstreamNft};
use async_trait::async_trait;
use std::time::Duration;

pub use self::data_api::RestDataProvider;
pub use self::rpc::HttpRpcProvider;

/// REST provider of portfolio, NFT and activity lookups keyed by address.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn token_portfolio(&self, address: &str) -> Result<Vec<TokenEntry>, WalletError>;
    async fn nfts(&self, address: &str) -> Result<Vec<UpstreamNft>, WalletError>;
    async fn transactions(&self, address: &str) -> Result<Vec<UpstreamActivity>, WalletError>;
}

/// Node RPC used for the live transaction count.
#[async_trait]
pub trait RpcProvider: Send + Sync {
    /// Nonce of `address` at the latest block
    async fn transaction_count(&self, address: &str) -> Result<u64, WalletError>;
}

/// Builds the shared HTTP client. No timeout is applied unless one is given.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, WalletError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| WalletError::Config(format!("Failed to create HTTP client: {e}")))
}
