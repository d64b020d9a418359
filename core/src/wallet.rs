//! Thin bindings to the injected EIP-1193 provider at `window.ethereum`.

use crate::{chains::Chain, utils::parse_hex_chain_id, Error};
use leptos::prelude::window;
use serde::Serialize;
use tracing::{debug, trace};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys,
    wasm_bindgen::{closure::Closure, JsCast, JsValue},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams {
    chain_id: String,
}

pub fn is_available() -> bool {
    provider().is_ok()
}

fn provider() -> Result<JsValue, Error> {
    let ethereum = js_sys::Reflect::get(&window(), &JsValue::from_str("ethereum"))?;

    if ethereum.is_undefined() || ethereum.is_null() {
        Err(Error::WalletUnavailable)
    } else {
        Ok(ethereum)
    }
}

async fn request(method: &str, params: Option<JsValue>) -> Result<JsValue, Error> {
    trace!("wallet request: {method}");

    let ethereum = provider()?;
    let request = js_sys::Reflect::get(&ethereum, &JsValue::from_str("request"))?
        .dyn_into::<js_sys::Function>()?;

    let args = js_sys::Object::new();
    js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))?;
    if let Some(params) = params {
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params)?;
    }

    let promise = request
        .call1(&ethereum, &args)?
        .dyn_into::<js_sys::Promise>()?;

    JsFuture::from(promise).await.map_err(Error::from)
}

/// Prompts the user to connect, returning the authorized accounts.
pub async fn request_accounts() -> Result<Vec<String>, Error> {
    let accounts = request("eth_requestAccounts", None).await?;
    serde_wasm_bindgen::from_value(accounts).map_err(Error::from)
}

/// Accounts already authorized for this site. Never prompts.
pub async fn accounts() -> Result<Vec<String>, Error> {
    let accounts = request("eth_accounts", None).await?;
    serde_wasm_bindgen::from_value(accounts).map_err(Error::from)
}

pub async fn chain_id() -> Result<u64, Error> {
    let chain_id = request("eth_chainId", None)
        .await?
        .as_string()
        .ok_or(Error::generic("eth_chainId did not return a string"))?;

    parse_hex_chain_id(&chain_id)
}

pub async fn switch_chain(chain: Chain) -> Result<(), Error> {
    debug!("switching to {chain} ({})", chain.hex_id());

    let params = serde_wasm_bindgen::to_value(&[SwitchChainParams {
        chain_id: chain.hex_id(),
    }])?;

    request("wallet_switchEthereumChain", Some(params))
        .await
        .map(|_| ())
}

/// Subscribes to a provider event for the lifetime of the page.
pub fn on(event: &str, handler: impl FnMut(JsValue) + 'static) -> Result<(), Error> {
    let ethereum = provider()?;
    let on = js_sys::Reflect::get(&ethereum, &JsValue::from_str("on"))?
        .dyn_into::<js_sys::Function>()?;

    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    on.call2(&ethereum, &JsValue::from_str(event), closure.as_ref())?;
    closure.forget();

    Ok(())
}
