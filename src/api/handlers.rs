use crate::{
    api::{
        models::{ApiError, ErrorResponse, RpcErrorResponse},
        openapi::ApiDoc,
    },
    core::{
        models::{ContractInteractionSummary, DataKind, NftEntry, TokenEntry, TransactionCount},
        services::WalletService,
    },
    infrastructure::{
        cache::CacheBackend,
        upstream::{HttpRpcProvider, RestDataProvider},
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;

pub type AppService = WalletService<CacheBackend, RestDataProvider, HttpRpcProvider>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/tokens/{address}", get(get_tokens))
        .route("/nfts/{address}", get(get_nfts))
        .route("/contract-interactions/{address}", get(get_contract_interactions))
        .route("/transaction-count/{address}", get(get_transaction_count))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/tokens/{address}",
    params(
        ("address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Tokens held by the wallet (cached for 300s)", body = [TokenEntry]),
        (status = 500, description = "Data provider failure", body = ErrorResponse)
    )
)]
pub async fn get_tokens(
    State(service): State<Arc<AppService>>,
    Path(address): Path<String>,
) -> Result<Json<Vec<TokenEntry>>, ApiError> {
    let tokens = service
        .tokens(&address)
        .await
        .map_err(|e| ApiError(DataKind::Tokens, e))?;
    Ok(Json(tokens))
}

#[utoipa::path(
    get,
    path = "/nfts/{address}",
    params(
        ("address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "NFT collections held by the wallet (cached for 300s)", body = [NftEntry]),
        (status = 500, description = "Data provider failure", body = ErrorResponse)
    )
)]
pub async fn get_nfts(
    State(service): State<Arc<AppService>>,
    Path(address): Path<String>,
) -> Result<Json<Vec<NftEntry>>, ApiError> {
    let nfts = service.nfts(&address).await.map_err(|e| ApiError(DataKind::Nfts, e))?;
    Ok(Json(nfts))
}

#[utoipa::path(
    get,
    path = "/contract-interactions/{address}",
    params(
        ("address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Distinct contracts the wallet sent transactions to (cached for 300s)", body = ContractInteractionSummary),
        (status = 500, description = "Data provider failure", body = ErrorResponse)
    )
)]
pub async fn get_contract_interactions(
    State(service): State<Arc<AppService>>,
    Path(address): Path<String>,
) -> Result<Json<ContractInteractionSummary>, ApiError> {
    let summary = service
        .contract_interactions(&address)
        .await
        .map_err(|e| ApiError(DataKind::ContractInteractions, e))?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/transaction-count/{address}",
    params(
        ("address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Transaction count at the latest block (never cached)", body = TransactionCount),
        (status = 500, description = "RPC failure", body = RpcErrorResponse)
    )
)]
pub async fn get_transaction_count(
    State(service): State<Arc<AppService>>,
    Path(address): Path<String>,
) -> Result<Json<TransactionCount>, ApiError> {
    let count = service
        .transaction_count(&address)
        .await
        .map_err(|e| ApiError(DataKind::TransactionCount, e))?;
    Ok(Json(count))
}
