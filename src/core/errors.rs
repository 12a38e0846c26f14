use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// Address failed the EVM syntax/checksum check
    #[error("Invalid wallet address!")]
    InvalidAddress,

    /// Network error, timeout or undecodable body from a provider
    #[error("Upstream request failed: {0}")]
    UpstreamFailure(String),

    /// Provider answered with a non-2xx status
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// JSON-RPC error object returned by the node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Cache unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// One of the fanned-out wallet fetches failed
    #[error("Error fetching data!")]
    AggregateFailure,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::UpstreamFailure(err.to_string())
    }
}

impl From<redis::RedisError> for WalletError {
    fn from(err: redis::RedisError) -> Self {
        WalletError::StorageUnavailable(err.to_string())
    }
}
