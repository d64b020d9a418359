use deltaswap_core::constants::test_ids;
use leptos::prelude::*;

/// Full-bleed backdrop rendered behind the nav bar.
#[component]
pub fn Blur() -> impl IntoView {
    view! {
        <div
            data-testid=test_ids::BLUR
            class="fixed inset-0 z-[1] pointer-events-none bg-background/40 backdrop-blur-xl"
        ></div>
    }
}
