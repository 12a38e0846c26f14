use crate::client::WalletSource;
use crate::core::address::is_valid_address;
use crate::core::errors::WalletError;
use crate::core::models::{DataKind, WalletView};
use futures::TryFutureExt;
use tokio::sync::watch;
use tracing::warn;

/// Fetches the four wallet kinds concurrently and merges them.
///
/// An invalid address fails with [`WalletError::InvalidAddress`] before any
/// request is made. Any failed fetch collapses the whole result into
/// [`WalletError::AggregateFailure`]; which kind failed is only logged.
pub async fn fetch_wallet_info<S>(source: &S, address: &str) -> Result<WalletView, WalletError>
where
    S: WalletSource + ?Sized,
{
    if !is_valid_address(address) {
        return Err(WalletError::InvalidAddress);
    }

    let tagged = |kind: DataKind| move |e: WalletError| (kind, e);
    let joined = tokio::try_join!(
        source.tokens(address).map_err(tagged(DataKind::Tokens)),
        source.nfts(address).map_err(tagged(DataKind::Nfts)),
        source
            .contract_interactions(address)
            .map_err(tagged(DataKind::ContractInteractions)),
        source
            .transaction_count(address)
            .map_err(tagged(DataKind::TransactionCount)),
    );

    match joined {
        Ok((tokens, nfts, contract_interactions, transaction_count)) => Ok(WalletView::new(
            tokens,
            nfts,
            contract_interactions,
            transaction_count,
        )),
        Err((kind, e)) => {
            warn!(address, kind = %kind, error = %e, "Wallet fetch failed");
            Err(WalletError::AggregateFailure)
        }
    }
}

/// What a presentation layer renders: spinner, error line or the wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckState {
    pub loading: bool,
    pub error: Option<String>,
    pub wallet: Option<WalletView>,
}

/// Runs wallet checks and publishes their [`CheckState`] to subscribers.
/// A failed check sets `error` and leaves the last good `wallet` in place.
pub struct WalletChecker<S> {
    source: S,
    state: watch::Sender<CheckState>,
}

/// Clears `loading` if a check is dropped before it resolves.
struct LoadingGuard<'a>(&'a watch::Sender<CheckState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| std::mem::replace(&mut state.loading, false));
    }
}

impl<S: WalletSource> WalletChecker<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(CheckState::default());
        WalletChecker { source, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<CheckState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CheckState {
        self.state.borrow().clone()
    }

    pub async fn check(&self, address: &str) -> Result<WalletView, WalletError> {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        let _guard = LoadingGuard(&self.state);

        let result = fetch_wallet_info(&self.source, address).await;

        self.state.send_modify(|state| {
            state.loading = false;
            match &result {
                Ok(wallet) => {
                    state.wallet = Some(wallet.clone());
                    state.error = None;
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        });
        result
    }
}
