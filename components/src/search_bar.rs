use deltaswap_core::{constants::SEARCH_PLACEHOLDER, utils::search_href};
use leptos::{ev, prelude::*};
use leptos_router::{hooks::use_navigate, NavigateOptions};
use lucide_leptos::Search;
use tracing::debug;

#[component]
pub fn SearchBar() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let navigate = use_navigate();

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            if let Some(href) = search_href(&query.get_untracked()) {
                debug!("searching: {href}");
                navigate(&href, NavigateOptions::default());
            }
        }
        "Escape" => set_query.set(String::new()),
        _ => {}
    };

    view! {
        <div class="relative flex items-center h-10 w-full gap-2 px-3 rounded-md border border-solid border-border bg-background text-muted-foreground">
            <Search size=16 />
            <input
                type="text"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=on_keydown
                class="w-full border-none bg-transparent text-sm text-foreground outline-none"
            />
        </div>
    }
}
