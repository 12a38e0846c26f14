use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_NFT_NAME: &str = "Unknown NFT";

/// NFT collection entry returned by `/nfts/{address}`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftEntry {
    pub name: String,
    pub token_ids: Vec<String>,
}

/// Collection item as the data provider sends it. Items without a `tokenId`
/// are dropped when reshaping.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UpstreamNft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<UpstreamNftItem>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamNftItem {
    #[serde(default)]
    pub token_id: Option<String>,
}

impl From<UpstreamNft> for NftEntry {
    fn from(nft: UpstreamNft) -> Self {
        let name = nft
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_NFT_NAME.to_string());
        let token_ids = nft
            .items
            .map(|items| items.into_iter().filter_map(|item| item.token_id).collect())
            .unwrap_or_default();
        NftEntry { name, token_ids }
    }
}
