//! Sharing a page link: Web Share API where the browser has it, clipboard
//! otherwise.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[derive(Serialize)]
struct ShareData<'a> {
    title: &'a str,
    url: &'a str,
}

/// Copy text to the system clipboard and call `on_success` when done.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                on_success();
            }
        }
    });
}

/// Opens the native share sheet; falls back to copying `url` and calling
/// `on_copied`. A share the user cancels is not retried as a copy.
pub fn share_link<F>(title: &str, url: &str, on_copied: F)
where
    F: FnOnce() + 'static,
{
    match native_share(title, url) {
        Some(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("share dismissed: {:?}", e);
            }
        }),
        None => copy_to_clipboard_with_callback(url, on_copied),
    }
}

fn native_share(title: &str, url: &str) -> Option<js_sys::Promise> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    let share = share.dyn_into::<js_sys::Function>().ok()?;

    let data = serde_wasm_bindgen::to_value(&ShareData { title, url }).ok()?;
    share
        .call1(&navigator, &data)
        .ok()?
        .dyn_into::<js_sys::Promise>()
        .ok()
}
