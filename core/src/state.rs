use crate::{
    chains::Chain, types::ProfilePageStateType, utils::parse_hex_chain_id, wallet, Error,
};
use leptos::{prelude::*, task::spawn_local};
use reactive_stores::Store;
use tracing::{debug, error, warn};

/// Wallet connection state. Written by the wallet provider, read by the nav bar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Web3State {
    pub chain_id: RwSignal<Option<u64>>,
    pub account: RwSignal<Option<String>>,
}

impl Web3State {
    pub fn new() -> Self {
        Self {
            chain_id: RwSignal::new(None),
            account: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }

    /// The connected chain, `None` before the wallet reports one.
    pub fn chain(&self) -> Result<Option<Chain>, Error> {
        self.chain_id.get().map(Chain::try_from).transpose()
    }

    pub fn disconnect(&self) {
        self.account.set(None);
    }

    /// Picks up a session the user already authorized, without prompting.
    pub fn restore(self) {
        if !wallet::is_available() {
            debug!("no injected wallet provider");
            return;
        }

        spawn_local(async move {
            match wallet::accounts().await {
                Ok(accounts) => self.account.set(accounts.into_iter().next()),
                Err(err) => error!("failed to read accounts: {err}"),
            }
            match wallet::chain_id().await {
                Ok(id) => self.chain_id.set(Some(id)),
                Err(err) => error!("failed to read chain id: {err}"),
            }
        });
    }

    /// Keeps the signals in sync with the provider's `accountsChanged` and `chainChanged` events.
    pub fn listen(self) {
        if !wallet::is_available() {
            return;
        }

        let accounts_changed = wallet::on("accountsChanged", move |accounts| {
            warn!("Wallet accounts changed.");
            match serde_wasm_bindgen::from_value::<Vec<String>>(accounts) {
                Ok(accounts) => self.account.set(accounts.into_iter().next()),
                Err(err) => error!("unexpected accountsChanged payload: {err}"),
            }
        });

        let chain_changed = wallet::on("chainChanged", move |chain_id| {
            match chain_id.as_string().as_deref().map(parse_hex_chain_id) {
                Some(Ok(id)) => {
                    if let Err(err) = Chain::try_from(id) {
                        warn!("{err}");
                    }
                    self.chain_id.set(Some(id));
                }
                Some(Err(err)) => error!("{err}"),
                None => error!("unexpected chainChanged payload"),
            }
        });

        if let Err(err) = accounts_changed.and(chain_changed) {
            error!("failed to subscribe to wallet events: {err}");
        }
    }
}

impl Default for Web3State {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FeatureFlags {
    pub should_disable_nft_routes: RwSignal<bool>,
}

impl FeatureFlags {
    pub fn new(should_disable_nft_routes: bool) -> Self {
        Self {
            should_disable_nft_routes: RwSignal::new(should_disable_nft_routes),
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Store, Clone, Debug, Default)]
pub struct ProfilePageState {
    pub state: ProfilePageStateType,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BagState {
    pub is_open: RwSignal<bool>,
    pub item_count: RwSignal<usize>,
}

impl BagState {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            item_count: RwSignal::new(0),
        }
    }

    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    pub fn add_item(&self) {
        self.item_count.update(|count| *count += 1);
    }
}

impl Default for BagState {
    fn default() -> Self {
        Self::new()
    }
}
