use super::{activity::ContractInteractionSummary, activity::TransactionCount, nft::NftEntry, token::TokenEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything known about one wallet, merged from the four endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub token_count: usize,
    pub nft_count: usize,
    pub tokens: Vec<TokenEntry>,
    pub nfts: Vec<NftEntry>,
    pub contract_interactions: u64,
    pub transaction_count: u64,
}

impl WalletView {
    pub fn new(
        tokens: Vec<TokenEntry>,
        nfts: Vec<NftEntry>,
        contract_interactions: ContractInteractionSummary,
        transaction_count: TransactionCount,
    ) -> Self {
        WalletView {
            token_count: tokens.len(),
            nft_count: nfts.len(),
            tokens,
            nfts,
            contract_interactions: contract_interactions.count,
            transaction_count: transaction_count.count,
        }
    }
}
