use leptos::{ev::MouseEvent, prelude::*};

#[component]
pub fn LogoIcon(
    #[prop(optional)] test_id: Option<&'static str>,
    on_click: impl Fn(MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <svg
            data-testid=test_id
            on:click=on_click
            class="h-12 w-[200px] fill-foreground cursor-pointer hover:rotate-1 transition-transform duration-300"
            viewBox="0 0 200 48"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M24 4L44 44H4L24 4ZM24 16L13.6 37H34.4L24 16Z" fill-rule="evenodd" />
            <text x="54" y="33" font-size="22" font-weight="600">
                "DeltaSwap"
            </text>
        </svg>
    }
}
