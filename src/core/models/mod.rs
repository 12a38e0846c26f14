pub mod activity;
pub mod kind;
pub mod nft;
pub mod token;
pub mod wallet;

pub use activity::{ContractInteractionSummary, TransactionCount, UpstreamActivity};
pub use kind::DataKind;
pub use nft::{NftEntry, UpstreamNft, UpstreamNftItem};
pub use token::TokenEntry;
pub use wallet::WalletView;
