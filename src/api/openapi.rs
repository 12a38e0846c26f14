use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, RpcErrorResponse},
    core::models::{ContractInteractionSummary, NftEntry, TokenEntry, TransactionCount, WalletView},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::get_tokens,
        super::handlers::get_nfts,
        super::handlers::get_contract_interactions,
        super::handlers::get_transaction_count
    ),
    components(schemas(
        TokenEntry,
        NftEntry,
        ContractInteractionSummary,
        TransactionCount,
        WalletView,
        ErrorResponse,
        RpcErrorResponse
    )),
    info(
        title = "Wallet Checker API",
        description = "Token, NFT, contract interaction and transaction count lookups for EVM wallets",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
