use crate::core::models::DataKind;

/// Cache key for one wallet query: the request path the data is served under.
pub fn wallet_cache_key(kind: DataKind, address: &str) -> String {
    format!("/{}/{}", kind.path_segment(), address)
}
