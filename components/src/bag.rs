use deltaswap_core::{constants::test_ids, state::BagState};
use leptos::prelude::*;
use lucide_leptos::ShoppingBag;
use tracing::info;

#[component]
pub fn Bag() -> impl IntoView {
    info!("rendering <Bag/>");

    let bag = use_context::<BagState>().expect("bag context missing!");

    view! {
        <button
            data-testid=test_ids::BAG
            on:click=move |_| bag.toggle()
            class="relative inline-flex items-center justify-center h-10 w-10 border-none rounded-md bg-transparent text-foreground hover:bg-secondary transition-colors"
        >
            <ShoppingBag size=20 />
            <Show when=move || { bag.item_count.get() > 0 }>
                <span class="absolute -top-1 -right-1 min-w-4 h-4 px-1 rounded-full text-[10px] leading-4 bg-primary text-primary-foreground">
                    {move || bag.item_count.get()}
                </span>
            </Show>
        </button>
    }
}
