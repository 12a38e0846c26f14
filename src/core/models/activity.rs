use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// One entry of the provider's transaction activity list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UpstreamActivity {
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ContractInteractionSummary {
    pub count: u64,
}

impl ContractInteractionSummary {
    /// Counts the distinct, non-empty `to` addresses in an activity list.
    pub fn from_activities(activities: &[UpstreamActivity]) -> Self {
        let contracts: HashSet<&str> = activities
            .iter()
            .filter_map(|activity| activity.to.as_deref())
            .filter(|to| !to.is_empty())
            .collect();
        ContractInteractionSummary {
            count: contracts.len() as u64,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransactionCount {
    pub count: u64,
}
