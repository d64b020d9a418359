use deltaswap_core::constants::links::SWAP_URL;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    view! {
        <div class="max-w-md mx-auto flex flex-col gap-4">
            <h2 class="m-0">"Swap"</h2>
            <p class="text-muted-foreground">
                "Swapping lives in the DeltaSwap interface. "
                <a href=SWAP_URL target="_blank" rel="noopener noreferrer">
                    "Open it in a new tab."
                </a>
            </p>
        </div>
    }
}
