use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four wallet data kinds served by the API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    Tokens,
    Nfts,
    ContractInteractions,
    TransactionCount,
}

impl DataKind {
    /// Route segment this kind is served under.
    pub fn path_segment(self) -> &'static str {
        match self {
            DataKind::Tokens => "tokens",
            DataKind::Nfts => "nfts",
            DataKind::ContractInteractions => "contract-interactions",
            DataKind::TransactionCount => "transaction-count",
        }
    }

    /// Fixed message returned to callers when fetching this kind fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            DataKind::Tokens => "Error fetching token data",
            DataKind::Nfts => "Error fetching NFT data",
            DataKind::ContractInteractions => "Error fetching contract data",
            DataKind::TransactionCount => "Error fetching transaction count from RPC",
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
