use http::header;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wallet_checker::{
    api::handlers::api_routes,
    config::CONFIG,
    core::services::WalletService,
    infrastructure::{
        cache::CacheBackend,
        upstream::{HttpRpcProvider, RestDataProvider},
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();

    CONFIG.validate()?;
    info!("Loaded configuration: {:?}", *CONFIG);

    // Initialize cache and upstream clients
    let cache = CacheBackend::connect(CONFIG.redis_url.as_deref()).await;
    info!(backend = cache.name(), "Cache ready");
    let data = RestDataProvider::new(&CONFIG.data_api_url, CONFIG.upstream_timeout)?;
    let rpc = HttpRpcProvider::new(&CONFIG.rpc_url, CONFIG.upstream_timeout)?;
    let service = Arc::new(WalletService::new(cache, data, rpc));

    let app = api_routes(service)
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::new(CONFIG.host, CONFIG.port);
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
