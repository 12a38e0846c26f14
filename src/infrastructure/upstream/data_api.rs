use crate::core::errors::WalletError;
use crate::core::models::{TokenEntry, UpstreamActivity, UpstreamNft};
use crate::infrastructure::upstream::{DataProvider, build_http_client};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Every account endpoint wraps its list as `{ "result": { "data": [...] } }`.
#[derive(Deserialize)]
struct Envelope<T> {
    result: Page<T>,
}

#[derive(Deserialize)]
struct Page<T> {
    data: Option<Vec<T>>,
}

/// Client for the account data API (`/account/tokenPortfolio`, `/account/nfts`,
/// `/account/transactions`).
#[derive(Clone, Debug)]
pub struct RestDataProvider {
    base_url: String,
    http_client: reqwest::Client,
}

impl RestDataProvider {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, WalletError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            http_client: build_http_client(timeout)?,
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str, address: &str) -> Result<Vec<T>, WalletError> {
        let url = format!("{}/account/{}", self.base_url, endpoint);
        let response = self
            .http_client
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WalletError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| WalletError::UpstreamFailure(format!("Malformed {endpoint} response: {e}")))?;
        let items = envelope.result.data.unwrap_or_default();
        debug!(endpoint, address, items = items.len(), "Fetched account data");
        Ok(items)
    }
}

#[async_trait]
impl DataProvider for RestDataProvider {
    #[instrument(skip(self))]
    async fn token_portfolio(&self, address: &str) -> Result<Vec<TokenEntry>, WalletError> {
        self.fetch_list("tokenPortfolio", address).await
    }

    #[instrument(skip(self))]
    async fn nfts(&self, address: &str) -> Result<Vec<UpstreamNft>, WalletError> {
        self.fetch_list("nfts", address).await
    }

    #[instrument(skip(self))]
    async fn transactions(&self, address: &str) -> Result<Vec<UpstreamActivity>, WalletError> {
        self.fetch_list("transactions", address).await
    }
}
