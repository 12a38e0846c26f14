use crate::core::errors::WalletError;
use crate::infrastructure::upstream::{RpcProvider, build_http_client};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client for an EVM node.
#[derive(Debug)]
pub struct HttpRpcProvider {
    rpc_url: String,
    http_client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpRpcProvider {
    pub fn new(rpc_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, WalletError> {
        Ok(Self {
            rpc_url: rpc_url.into(),
            http_client: build_http_client(timeout)?,
            next_id: AtomicU64::new(1),
        })
    }

    async fn call(&self, method: &str, params: serde_json::Value) -> Result<String, WalletError> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
        });

        let response = self.http_client.post(&self.rpc_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WalletError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|e| WalletError::UpstreamFailure(format!("Malformed RPC response: {e}")))?;

        if let Some(error) = response.error {
            return Err(WalletError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response
            .result
            .ok_or_else(|| WalletError::UpstreamFailure(format!("RPC response for {method} has no result")))
    }
}

/// Parses a JSON-RPC quantity such as `"0x1a"`.
pub(crate) fn parse_quantity(quantity: &str) -> Result<u64, WalletError> {
    let digits = quantity
        .strip_prefix("0x")
        .ok_or_else(|| WalletError::UpstreamFailure(format!("Invalid quantity: {quantity}")))?;
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16).map_err(|e| WalletError::UpstreamFailure(format!("Invalid quantity {quantity}: {e}")))
}

#[async_trait]
impl RpcProvider for HttpRpcProvider {
    #[instrument(skip(self))]
    async fn transaction_count(&self, address: &str) -> Result<u64, WalletError> {
        let result = self
            .call("eth_getTransactionCount", serde_json::json!([address, "latest"]))
            .await?;
        let count = parse_quantity(&result)?;
        info!(address, count, "Transaction count fetched");
        Ok(count)
    }
}
