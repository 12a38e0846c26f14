use crate::core::errors::WalletError;
use crate::core::models::{
    ContractInteractionSummary, DataKind, NftEntry, TokenEntry, TransactionCount,
};
use crate::infrastructure::cache::{CACHE_TTL, Cache, cache_keys::wallet_cache_key};
use crate::infrastructure::upstream::{DataProvider, RpcProvider};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Wallet lookups served by the API. Cache-backed kinds go through
/// [`WalletService::read_through`]; the transaction count always hits the RPC.
pub struct WalletService<C: Cache, D: DataProvider, R: RpcProvider> {
    cache: C,
    data: D,
    rpc: R,
}

impl<C: Cache, D: DataProvider, R: RpcProvider> WalletService<C, D, R> {
    pub fn new(cache: C, data: D, rpc: R) -> Self {
        WalletService { cache, data, rpc }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub async fn tokens(&self, address: &str) -> Result<Vec<TokenEntry>, WalletError> {
        self.read_through(DataKind::Tokens, address, || self.data.token_portfolio(address))
            .await
    }

    pub async fn nfts(&self, address: &str) -> Result<Vec<NftEntry>, WalletError> {
        self.read_through(DataKind::Nfts, address, || async {
            let nfts = self.data.nfts(address).await?;
            Ok(nfts.into_iter().map(NftEntry::from).collect())
        })
        .await
    }

    pub async fn contract_interactions(&self, address: &str) -> Result<ContractInteractionSummary, WalletError> {
        self.read_through(DataKind::ContractInteractions, address, || async {
            let activities = self.data.transactions(address).await?;
            Ok(ContractInteractionSummary::from_activities(&activities))
        })
        .await
    }

    /// Live nonce from the node. Never read from or written to the cache.
    pub async fn transaction_count(&self, address: &str) -> Result<TransactionCount, WalletError> {
        let count = self.rpc.transaction_count(address).await?;
        Ok(TransactionCount { count })
    }

    /// Cache-aside read: a fresh entry is returned as is (its expiry is not
    /// extended); otherwise `fetch` runs and its result is stored for
    /// [`CACHE_TTL`]. Failed fetches are not stored. Cache errors are logged
    /// and never fail the request.
    async fn read_through<T, F, Fut>(&self, kind: DataKind, address: &str, fetch: F) -> Result<T, WalletError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, WalletError>>,
    {
        let key = wallet_cache_key(kind, address);

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<T>(&bytes) {
                Ok(value) => {
                    info!(key = %key, "Cache hit");
                    return Ok(value);
                }
                Err(e) => warn!(key = %key, error = %e, "Discarding undecodable cache entry"),
            },
            Ok(None) => info!(key = %key, "Cache miss"),
            Err(e) => warn!(key = %key, error = %e, "Cache read failed, fetching from upstream"),
        }

        let value = fetch().await?;

        match serde_json::to_vec(&value) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(&key, bytes, CACHE_TTL).await {
                    warn!(key = %key, error = %e, "Cache write failed");
                } else {
                    debug!(key = %key, ttl_secs = CACHE_TTL.as_secs(), "Cached upstream response");
                }
            }
            Err(e) => warn!(key = %key, error = %e, "Could not serialize response for cache"),
        }

        Ok(value)
    }
}
