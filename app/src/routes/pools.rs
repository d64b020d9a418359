use deltaswap_core::constants::links::POOLS_URL;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn Pools() -> impl IntoView {
    info!("rendering <Pools/>");

    on_cleanup(move || {
        info!("cleaning up <Pools/>");
    });

    view! {
        <div class="max-w-md mx-auto flex flex-col gap-4">
            <h2 class="m-0">"Pools"</h2>
            <a href=POOLS_URL target="_blank" rel="noopener noreferrer">
                "Manage liquidity"
            </a>
        </div>
    }
}
