use deltaswap_core::DisplayMap;
use leptos::prelude::*;

/// A box whose `display` follows a [`DisplayMap`] across breakpoints.
#[component]
pub fn ResponsiveBox(
    display: DisplayMap,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        display.class()
    } else {
        format!("{} {class}", display.class())
    };

    view! { <div class=class>{children()}</div> }
}
