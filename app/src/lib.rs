use deltaswap_core::{
    state::{BagState, FeatureFlags, ProfilePageState, Web3State},
    DEFAULT_CHAIN,
};
use deltaswap_nav::Navbar;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router_macro::path;
use reactive_stores::Store;
use tracing::{debug, info};

mod routes;

use routes::{NftProfile, Nfts, Pools, Swap, Tokens};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    let web3 = Web3State::new();
    let bag = BagState::new();

    provide_context(web3);
    provide_context(bag);
    provide_context(FeatureFlags::default());
    provide_context(Store::new(ProfilePageState::default()));

    debug!("expecting users on {DEFAULT_CHAIN} ({})", DEFAULT_CHAIN.id());

    web3.listen();
    web3.restore();

    Effect::new(move |_| info!("Account set to {:?}", web3.account.get()));
    Effect::new(move |_| info!("Chain ID set to {:?}", web3.chain_id.get()));

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text="DeltaSwap" />
        <Router>
            <header class="sticky top-0 bg-background z-40">
                <Navbar blur=bag.is_open />
            </header>
            <main class="flex-1 px-2.5 lg:px-8 py-3 overflow-x-auto">
                <Routes fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=|| view! { <Redirect path="/swap" /> } />
                    <Route path=path!("/swap") view=Swap />
                    <Route path=path!("/pools") view=Pools />
                    <Route path=path!("/tokens") view=Tokens />
                    <Route path=path!("/nfts") view=Nfts />
                    <Route path=path!("/nfts/profile") view=NftProfile />
                </Routes>
            </main>
        </Router>
    }
}
