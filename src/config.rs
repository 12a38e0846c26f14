use crate::core::errors::WalletError;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Base URL of the account data API
    pub data_api_url: String,
    /// EVM node JSON-RPC URL
    pub rpc_url: String,
    pub redis_url: Option<String>,
    pub log_level: String,
    /// Per-call upstream timeout. Unset means requests wait for the provider.
    pub upstream_timeout: Option<Duration>,
}

// Provider URLs usually embed API keys
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_api_url", &"<redacted>")
            .field("rpc_url", &"<redacted>")
            .field("redis_url", &self.redis_url.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(5000),
            data_api_url: env::var("MONAD_API").unwrap_or_default(),
            rpc_url: env::var("ALCHEMY_RPC").unwrap_or_default(),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs),
        }
    }

    /// Both provider URLs are required to serve any endpoint.
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.data_api_url.is_empty() {
            return Err(WalletError::Config("MONAD_API must be set".to_string()));
        }
        if self.rpc_url.is_empty() {
            return Err(WalletError::Config("ALCHEMY_RPC must be set".to_string()));
        }
        Ok(())
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
