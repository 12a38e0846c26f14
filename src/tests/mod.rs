mod upstream_tests;

use crate::api::handlers::{AppService, api_routes};
use crate::core::errors::WalletError;
use crate::core::models::{TokenEntry, UpstreamActivity, UpstreamNft};
use crate::core::services::WalletService;
use crate::infrastructure::cache::{Cache, CacheBackend, InMemoryCache};
use crate::infrastructure::upstream::{DataProvider, HttpRpcProvider, RestDataProvider, RpcProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::MockServer;

pub const ADDRESS: &str = "0x52908400098527886e0f7030069857d2e4169ee7";
pub const OTHER_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// Upstream call counters shared between the mocks and the test body.
#[derive(Default)]
pub struct UpstreamCalls {
    pub tokens: AtomicUsize,
    pub nfts: AtomicUsize,
    pub transactions: AtomicUsize,
    pub transaction_count: AtomicUsize,
}

impl UpstreamCalls {
    pub fn tokens(&self) -> usize {
        self.tokens.load(Ordering::SeqCst)
    }

    pub fn nfts(&self) -> usize {
        self.nfts.load(Ordering::SeqCst)
    }

    pub fn transactions(&self) -> usize {
        self.transactions.load(Ordering::SeqCst)
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count.load(Ordering::SeqCst)
    }
}

pub struct MockDataProvider {
    calls: Arc<UpstreamCalls>,
    down: Arc<AtomicBool>,
    tokens: Vec<TokenEntry>,
    nfts: Vec<UpstreamNft>,
    activities: Vec<UpstreamActivity>,
}

impl MockDataProvider {
    fn check(&self, counter: &AtomicUsize) -> Result<(), WalletError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(WalletError::UpstreamStatus {
                status: 503,
                body: "provider down".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn token_portfolio(&self, _address: &str) -> Result<Vec<TokenEntry>, WalletError> {
        self.check(&self.calls.tokens)?;
        Ok(self.tokens.clone())
    }

    async fn nfts(&self, _address: &str) -> Result<Vec<UpstreamNft>, WalletError> {
        self.check(&self.calls.nfts)?;
        Ok(self.nfts.clone())
    }

    async fn transactions(&self, _address: &str) -> Result<Vec<UpstreamActivity>, WalletError> {
        self.check(&self.calls.transactions)?;
        Ok(self.activities.clone())
    }
}

pub struct MockRpcProvider {
    calls: Arc<UpstreamCalls>,
    down: Arc<AtomicBool>,
    count: u64,
}

#[async_trait]
impl RpcProvider for MockRpcProvider {
    async fn transaction_count(&self, _address: &str) -> Result<u64, WalletError> {
        self.calls.transaction_count.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(WalletError::Rpc {
                code: -32000,
                message: "header not found".to_string(),
            });
        }
        Ok(self.count)
    }
}

/// Cache whose backend is never reachable.
pub struct UnreachableCache;

#[async_trait]
impl Cache for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        Err(WalletError::StorageUnavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), WalletError> {
        Err(WalletError::StorageUnavailable("connection refused".to_string()))
    }
}

pub struct TestHarness<C: Cache> {
    pub service: WalletService<C, MockDataProvider, MockRpcProvider>,
    pub calls: Arc<UpstreamCalls>,
    pub upstream_down: Arc<AtomicBool>,
}

pub fn sample_tokens() -> Vec<TokenEntry> {
    vec![
        TokenEntry::new("Wrapped Monad", "WMON"),
        TokenEntry::new("USD Coin", "USDC"),
    ]
}

pub fn create_harness_with<C: Cache>(
    cache: C,
    nfts: Vec<UpstreamNft>,
    activities: Vec<UpstreamActivity>,
) -> TestHarness<C> {
    let calls = Arc::new(UpstreamCalls::default());
    let upstream_down = Arc::new(AtomicBool::new(false));
    let data = MockDataProvider {
        calls: calls.clone(),
        down: upstream_down.clone(),
        tokens: sample_tokens(),
        nfts,
        activities,
    };
    let rpc = MockRpcProvider {
        calls: calls.clone(),
        down: upstream_down.clone(),
        count: 42,
    };
    TestHarness {
        service: WalletService::new(cache, data, rpc),
        calls,
        upstream_down,
    }
}

pub fn create_test_harness() -> TestHarness<InMemoryCache> {
    create_harness_with(InMemoryCache::new(), Vec::new(), Vec::new())
}

/// Serves the real router on an ephemeral port, with both providers pointed
/// at `upstream`. Returns the base URL.
pub async fn spawn_app(upstream: &MockServer) -> String {
    let service: Arc<AppService> = Arc::new(WalletService::new(
        CacheBackend::InMemory(InMemoryCache::new()),
        RestDataProvider::new(upstream.uri(), None).unwrap(),
        HttpRpcProvider::new(upstream.uri(), None).unwrap(),
    ));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_routes(service)).await.unwrap();
    });
    format!("http://{addr}")
}
