use crate::model::NavFlags;
use deltaswap_core::{
    routes::is_nft_page,
    state::{FeatureFlags, ProfilePageState, ProfilePageStateStoreFields, Web3State},
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use reactive_stores::Store;

pub fn use_is_nft_page() -> Memo<bool> {
    let location = use_location();
    Memo::new(move |_| location.pathname.with(|pathname| is_nft_page(pathname)))
}

/// Collects the router, wallet, feature flag, and profile page state into one snapshot.
pub fn use_nav_flags() -> Memo<NavFlags> {
    let location = use_location();
    let web3 = use_context::<Web3State>().expect("web3 context missing!");
    let feature_flags = use_context::<FeatureFlags>().expect("feature flags context missing!");
    let profile_page =
        use_context::<Store<ProfilePageState>>().expect("profile page context missing!");

    Memo::new(move |_| {
        NavFlags::new(
            location.pathname.get(),
            web3.chain_id.get(),
            feature_flags.should_disable_nft_routes.get(),
            profile_page.state().get(),
        )
    })
}
