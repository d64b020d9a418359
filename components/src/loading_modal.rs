use crate::Spinner;
use leptos::{html::Dialog, prelude::*};

#[component]
pub fn LoadingModal(when: Memo<bool>, #[prop(into)] message: String) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            match when.get() {
                true => {
                    let _ = dialog.show_modal();
                }
                false => dialog.close(),
            }
        }
    });

    view! {
        <dialog node_ref=dialog_ref class="rounded-lg border border-solid border-border">
            // prevent focus ring from showing around the main div
            <div tabindex="0"></div>
            <div class="align-middle inline-flex items-center justify-center gap-3">
                <Spinner />
                <div class="font-bold">{message}</div>
            </div>
        </dialog>
    }
}
