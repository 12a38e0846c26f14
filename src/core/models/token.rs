use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A fungible token held by the wallet, as reported by the data provider.
///
/// Only `name` and `symbol` are typed; every other upstream field (balance,
/// decimals, prices) is carried in `extra` and written back unchanged.
/// Either name field may be `null` upstream.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TokenEntry {
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl TokenEntry {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        TokenEntry {
            name: Some(name.into()),
            symbol: Some(symbol.into()),
            extra: Map::new(),
        }
    }
}
