use crate::{
    model::{NavEntry, PageTabsModel},
    use_nav_flags, MenuDropdown, MenuItem,
};
use deltaswap_components::ResponsiveBox;
use leptos::{either::Either, prelude::*};
use tracing::{debug, info};

#[component]
pub fn PageTabs() -> impl IntoView {
    info!("rendering <PageTabs/>");

    let flags = use_nav_flags();
    let model = Memo::new(move |_| PageTabsModel::new(&flags.read()));

    // NOTE: the chain name and the NFT route flag are not used by any tab yet.
    Effect::new(move |_| {
        model.with(|model| {
            debug!(
                "page tabs: chain {}, nft routes disabled: {}",
                model.chain_name, model.should_disable_nft_routes
            )
        })
    });

    view! {
        {move || {
            model
                .get()
                .entries
                .into_iter()
                .map(|entry| view! { <PageTab entry=entry /> })
                .collect_view()
        }}
        <div class="my-4 md:my-0">
            <MenuDropdown />
        </div>
    }
}

#[component]
fn PageTab(entry: NavEntry) -> impl IntoView {
    let NavEntry {
        href,
        label,
        id,
        test_id,
        display,
        is_active,
    } = entry;

    let item = move || {
        view! {
            <MenuItem href=href id=id test_id=test_id is_active=is_active>
                {label}
            </MenuItem>
        }
    };

    match display {
        Some(display) => Either::Left(view! {
            <ResponsiveBox display=display class="w-full">
                {item()}
            </ResponsiveBox>
        }),
        None => Either::Right(item()),
    }
}
