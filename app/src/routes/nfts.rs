use deltaswap_core::{
    constants::links::{NFTS_PATH, NFT_PROFILE_PATH},
    state::{BagState, ProfilePageState, ProfilePageStateStoreFields},
    ProfilePageStateType,
};
use leptos::prelude::*;
use leptos_router::components::A;
use reactive_stores::Store;
use tracing::info;

#[component]
pub fn Nfts() -> impl IntoView {
    info!("rendering <Nfts/>");

    let bag = use_context::<BagState>().expect("bag context missing!");

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-4">
            <h2 class="m-0">"NFTs"</h2>
            <div class="flex flex-row gap-3">
                <button on:click=move |_| bag.add_item()>"Add to bag"</button>
                <A href=NFT_PROFILE_PATH>"Profile"</A>
            </div>
        </div>
    }
}

#[component]
pub fn NftProfile() -> impl IntoView {
    info!("rendering <NftProfile/>");

    let profile_page =
        use_context::<Store<ProfilePageState>>().expect("profile page context missing!");

    let is_listing = move || profile_page.state().get() == ProfilePageStateType::Listing;

    // leaving the page always ends the listing flow
    on_cleanup(move || {
        info!("cleaning up <NftProfile/>");
        profile_page.state().set(ProfilePageStateType::ViewProfile);
    });

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-4">
            <h2 class="m-0">"Profile"</h2>
            <Show
                when=is_listing
                fallback=move || {
                    view! {
                        <button on:click=move |_| {
                            profile_page.state().set(ProfilePageStateType::Listing)
                        }>"List items"</button>
                    }
                }
            >
                <button on:click=move |_| {
                    profile_page.state().set(ProfilePageStateType::ViewProfile)
                }>"Back to profile"</button>
            </Show>
            <A href=NFTS_PATH>"Back to NFTs"</A>
        </div>
    }
}
