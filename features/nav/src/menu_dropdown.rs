use crate::{
    model::{dropdown_entries, DropdownEvent},
    use_nav_flags, MenuItem,
};
use leptos::{
    html::{Dialog, Div},
    prelude::*,
};
use leptos_use::on_click_outside;
use lucide_leptos::Ellipsis;
use tracing::{debug, info};

#[component]
pub fn MenuDropdown() -> impl IntoView {
    info!("rendering <MenuDropdown/>");

    let flags = use_nav_flags();
    let container_ref = NodeRef::<Div>::new();
    let dialog_ref = NodeRef::<Dialog>::new();

    let (is_open, set_is_open) = signal(false);
    let send = move |event: DropdownEvent| set_is_open.update(|open| *open = event.apply(*open));

    let _ = on_click_outside(container_ref, move |_| send(DropdownEvent::ClickedOutside));

    Effect::new(move |_| {
        let open = is_open.get();
        debug!("menu dropdown open: {open}");
        match dialog_ref.get() {
            Some(dialog) if open => dialog.show(),
            Some(dialog) => dialog.close(),
            None => {}
        }
    });

    view! {
        <div node_ref=container_ref class="relative inline-block">
            <button
                on:click=move |_| send(DropdownEvent::Toggle)
                aria-label="More"
                class="h-10 px-3 inline-flex items-center border-none rounded-xl bg-transparent text-muted-foreground hover:text-foreground"
            >
                <Ellipsis size=20 />
            </button>
            <dialog
                node_ref=dialog_ref
                class="z-50 mt-2 p-2 w-48 shadow-md bg-popover text-popover-foreground rounded-lg border border-solid border-border"
            >
                <div class="flex flex-col gap-1">
                    {move || {
                        dropdown_entries(&flags.read())
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div
                                        class="contents"
                                        on:click=move |_| send(DropdownEvent::EntryChosen)
                                    >
                                        <MenuItem
                                            href=entry.href
                                            id=entry.id
                                            test_id=entry.test_id
                                            is_active=entry.is_active
                                        >
                                            {entry.label}
                                        </MenuItem>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </dialog>
        </div>
    }
}
