//! Consumer side of the API: fetches all four wallet endpoints for one
//! address and merges them into a [`WalletView`](crate::core::models::WalletView).

pub mod aggregator;
pub mod http_source;

use crate::core::errors::WalletError;
use crate::core::models::{ContractInteractionSummary, NftEntry, TokenEntry, TransactionCount};
use async_trait::async_trait;

pub use self::aggregator::{CheckState, WalletChecker, fetch_wallet_info};
pub use self::http_source::HttpWalletSource;

/// The four per-kind lookups the aggregator fans out to.
#[async_trait]
pub trait WalletSource: Send + Sync {
    async fn tokens(&self, address: &str) -> Result<Vec<TokenEntry>, WalletError>;
    async fn nfts(&self, address: &str) -> Result<Vec<NftEntry>, WalletError>;
    async fn contract_interactions(&self, address: &str) -> Result<ContractInteractionSummary, WalletError>;
    async fn transaction_count(&self, address: &str) -> Result<TransactionCount, WalletError>;
}
