use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use tracing::info;

#[component]
pub fn Tokens() -> impl IntoView {
    info!("rendering <Tokens/>");

    let query = use_query_map();
    let search = move || query.read().get("search").unwrap_or_default();

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-4">
            <h2 class="m-0">"Tokens"</h2>
            <Show
                when=move || !search().is_empty()
                fallback=|| view! { <p class="text-muted-foreground">"Top tokens"</p> }
            >
                <p class="text-muted-foreground">"Results for \"" {search} "\""</p>
            </Show>
        </div>
    }
}
