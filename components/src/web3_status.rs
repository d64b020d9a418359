use crate::LoadingModal;
use deltaswap_core::{
    constants::test_ids,
    state::Web3State,
    utils::{alert, shorten_address},
    wallet, Error,
};
use leptos::{ev::MouseEvent, prelude::*};
use lucide_leptos::{Power, Wallet};
use tracing::{debug, error, info};

#[component]
pub fn Web3Status() -> impl IntoView {
    info!("rendering <Web3Status/>");

    let web3 = use_context::<Web3State>().expect("web3 context missing!");

    let connect_action: Action<(), bool> = Action::new_unsync(move |_: &()| async move {
        if !wallet::is_available() {
            alert("No wallet found. Install a browser wallet to connect.");
            return false;
        }

        debug!("Requesting wallet connection...");
        match wallet::request_accounts().await {
            Ok(accounts) => {
                web3.account.set(accounts.into_iter().next());
                match wallet::chain_id().await {
                    Ok(id) => web3.chain_id.set(Some(id)),
                    Err(err) => error!("{err}"),
                }
                debug!("Wallet is connected");
                true
            }
            Err(Error::Js(message)) => {
                error!("Connection rejected: {message}");
                false
            }
            Err(err) => {
                error!("{err}");
                false
            }
        }
    });

    let connect = move |_: MouseEvent| {
        connect_action.dispatch(());
    };

    let disconnect = move |_: MouseEvent| web3.disconnect();

    let address = move || web3.account.get().map(shorten_address);

    view! {
        <Show
            when=move || web3.is_connected()
            fallback=move || {
                view! {
                    <button
                        data-testid=test_ids::CONNECT_WALLET
                        on:click=connect
                        disabled=connect_action.pending()
                        class="min-w-24 h-10 text-sm font-medium px-4 border-none rounded-md bg-primary text-primary-foreground"
                    >
                        <div class="flex flex-row items-center gap-2">
                            <Wallet size=16 />
                            "Connect"
                        </div>
                    </button>
                }
            }
        >
            <button
                data-testid=test_ids::WEB3_STATUS_CONNECTED
                on:click=disconnect
                title="Disconnect"
                class="min-w-24 h-10 text-sm font-medium px-4 border-none rounded-md bg-secondary text-secondary-foreground"
            >
                <div class="flex flex-row items-center gap-2">
                    {address}
                    <Power size=14 />
                </div>
            </button>
        </Show>
        <LoadingModal when=connect_action.pending() message="Requesting Connection" />
    }
}
