use crate::model::{menu_item_class, LinkKind};
use leptos::{either::Either, prelude::*};
use leptos_router::components::A;

/// A single navigation link.
///
/// `https` and protocol-relative hrefs open in a new tab with no opener and no referrer. Anything
/// else is a client-side route transition.
#[component]
pub fn MenuItem(
    #[prop(into)] href: String,
    #[prop(default = None)] id: Option<&'static str>,
    #[prop(default = None)] test_id: Option<&'static str>,
    #[prop(optional)] is_active: bool,
    children: Children,
) -> impl IntoView {
    let class = menu_item_class(is_active);

    match LinkKind::of(&href) {
        kind @ LinkKind::External => Either::Left(view! {
            <a
                href=href
                target=kind.target()
                rel=kind.rel()
                class=class
                id=id
                data-testid=test_id
                style="text-decoration: none"
            >
                {children()}
            </a>
        }),
        LinkKind::Internal => Either::Right(view! {
            <A
                href=href
                attr:class=class
                attr:id=id
                attr:data-testid=test_id
                attr:style="text-decoration: none"
            >
                {children()}
            </A>
        }),
    }
}
