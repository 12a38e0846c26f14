use crate::client::WalletSource;
use crate::core::errors::WalletError;
use crate::core::models::{ContractInteractionSummary, DataKind, NftEntry, TokenEntry, TransactionCount};
use crate::infrastructure::upstream::build_http_client;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Reads the wallet endpoints of a running wallet-checker server.
#[derive(Clone, Debug)]
pub struct HttpWalletSource {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpWalletSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, WalletError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            http_client: build_http_client(timeout)?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, kind: DataKind, address: &str) -> Result<T, WalletError> {
        let url = format!("{}/{}/{}", self.base_url, kind.path_segment(), address);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WalletError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl WalletSource for HttpWalletSource {
    async fn tokens(&self, address: &str) -> Result<Vec<TokenEntry>, WalletError> {
        self.get_json(DataKind::Tokens, address).await
    }

    async fn nfts(&self, address: &str) -> Result<Vec<NftEntry>, WalletError> {
        self.get_json(DataKind::Nfts, address).await
    }

    async fn contract_interactions(&self, address: &str) -> Result<ContractInteractionSummary, WalletError> {
        self.get_json(DataKind::ContractInteractions, address).await
    }

    async fn transaction_count(&self, address: &str) -> Result<TransactionCount, WalletError> {
        self.get_json(DataKind::TransactionCount, address).await
    }
}
