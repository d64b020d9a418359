use deltaswap_core::{state::Web3State, wallet, Chain, Error};
use leptos::{html::Div, prelude::*};
use leptos_use::on_click_outside;
use lucide_leptos::{Check, ChevronDown};
use tracing::{error, info};

#[component]
pub fn ChainSelector(#[prop(optional)] left_align: bool) -> impl IntoView {
    info!("rendering <ChainSelector/>");

    let web3 = use_context::<Web3State>().expect("web3 context missing!");

    let (is_open, set_is_open) = signal(false);
    let container_ref = NodeRef::<Div>::new();

    let _ = on_click_outside(container_ref, move |_| set_is_open.set(false));

    let switch_chain: Action<Chain, Result<(), Error>> =
        Action::new_unsync(move |chain: &Chain| {
            let chain = *chain;
            async move {
                let result = wallet::switch_chain(chain).await;
                match &result {
                    Ok(()) => {
                        web3.chain_id.set(Some(chain.id()));
                        set_is_open.set(false);
                    }
                    Err(err) => error!("failed to switch to {chain}: {err}"),
                }
                result
            }
        });

    let label = move || match web3.chain() {
        Ok(Some(chain)) => chain.label(),
        Ok(None) => "Select network",
        Err(_) => "Unsupported",
    };

    let menu_class = if left_align {
        "absolute left-0 top-12 z-50 w-56 m-0 p-2 list-none rounded-lg border border-solid border-border bg-popover shadow-md"
    } else {
        "absolute right-0 top-12 z-50 w-56 m-0 p-2 list-none rounded-lg border border-solid border-border bg-popover shadow-md"
    };

    view! {
        <div node_ref=container_ref class="relative">
            <button
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                disabled=switch_chain.pending()
                class="h-10 inline-flex items-center gap-2 px-3 text-sm font-medium border-none rounded-md bg-transparent text-foreground hover:bg-secondary transition-colors"
            >
                {label}
                <ChevronDown size=16 />
            </button>
            <Show when=move || is_open.get()>
                <ul class=menu_class>
                    {Chain::selectable()
                        .map(|chain| {
                            let is_selected = move || web3.chain_id.get() == Some(chain.id());
                            view! {
                                <li
                                    on:click=move |_| {
                                        switch_chain.dispatch(chain);
                                    }
                                    class="flex items-center justify-between px-3 py-2 rounded text-sm cursor-pointer hover:bg-secondary"
                                >
                                    {chain.label()}
                                    <Show when=is_selected>
                                        <Check size=16 />
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
