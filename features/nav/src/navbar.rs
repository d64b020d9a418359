use crate::{model::*, use_is_nft_page, PageTabs};
use deltaswap_components::{
    Bag, Blur, ChainSelector, LogoIcon, ResponsiveBox, SearchBar, Web3Status,
};
use deltaswap_core::{
    constants::{links::LOGO_URL, test_ids, NAV_HEIGHT},
    state::{ProfilePageState, ProfilePageStateStoreFields},
};
use leptos::{either::Either, ev::MouseEvent, prelude::*};
use reactive_stores::Store;
use tracing::{error, info};

#[component]
pub fn Navbar(#[prop(into)] blur: Signal<bool>) -> impl IntoView {
    info!("rendering <Navbar/>");

    let is_nft_page = use_is_nft_page();
    let profile_page =
        use_context::<Store<ProfilePageState>>().expect("profile page context missing!");

    let input = Memo::new(move |_| NavbarInput {
        blur: blur.get(),
        is_nft_page: is_nft_page.get(),
        sell_page_state: profile_page.state().get(),
    });

    let go_home = move |_: MouseEvent| {
        if let Err(err) = window().location().set_href(LOGO_URL) {
            error!("failed to navigate to {LOGO_URL}: {err:?}");
        }
    };

    view! {
        <Region region=NavbarRegion::Blur input>
            <Blur />
        </Region>
        <nav class="w-full px-3 py-5 z-[2]" style=format!("height: {NAV_HEIGHT}px")>
            <div class="flex h-full flex-nowrap">
                <div class=LEFT_SIDE_CONTAINER_CLASS>
                    <Region region=NavbarRegion::Logo input>
                        <div class=LOGO_CONTAINER_CLASS>
                            <LogoIcon test_id=test_ids::LOGO on_click=go_home />
                        </div>
                    </Region>
                    <Region region=NavbarRegion::LeftChainSelector input>
                        <ChainSelector left_align=true />
                    </Region>
                    <Region region=NavbarRegion::PageTabs input class="flex-row items-center">
                        <PageTabs />
                    </Region>
                </div>
                <div class=RIGHT_SIDE_CONTAINER_CLASS>
                    <div class="flex flex-row items-center gap-3">
                        <Region region=NavbarRegion::SearchBar input class="relative">
                            <SearchBar />
                        </Region>
                        <Region region=NavbarRegion::Bag input>
                            <Bag />
                        </Region>
                        <Region region=NavbarRegion::RightChainSelector input>
                            <ChainSelector />
                        </Region>
                        <Region region=NavbarRegion::Web3Status input>
                            <Web3Status />
                        </Region>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Mounts one navbar region when [`NavbarInput::mounts`] says so, inside a responsive box
/// if the region has breakpoint rules.
#[component]
fn Region(
    region: NavbarRegion,
    input: Memo<NavbarInput>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let display = region.display();

    view! {
        <Show when=move || input.get().mounts(region)>
            {match display {
                Some(display) => {
                    let children = children.clone();
                    Either::Left(
                        view! {
                            <ResponsiveBox display class=class.clone()>
                                {children()}
                            </ResponsiveBox>
                        },
                    )
                }
                None => Either::Right(children()),
            }}
        </Show>
    }
}
