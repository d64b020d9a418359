use leptos::prelude::*;
use lucide_leptos::LoaderCircle;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span class="inline-flex animate-spin text-muted-foreground">
            <LoaderCircle size=24 />
        </span>
    }
}
