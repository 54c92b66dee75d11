//! Share Button
//!
//! Native share sheet first, then the clipboard, then the share dialog.

use js_sys::{Function, Promise, Reflect};
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::context::UiServices;
use crate::dom::{self, Bindings};
use crate::models::ShareTarget;

pub fn register(services: UiServices, bindings: &mut Bindings) {
    for button in dom::query_all(".share-btn") {
        bindings.on(&button, "click", move |ev| {
            ev.prevent_default();
            let target = current_page();
            spawn_local(share(services, target));
        });
    }
}

/// Title, description and URL of the page being viewed
pub fn current_page() -> ShareTarget {
    let url = dom::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let title = dom::document().map(|d| d.title()).unwrap_or_default();
    let text = dom::meta_content("description")
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| title.clone());
    ShareTarget { title, text, url }
}

async fn share(services: UiServices, target: ShareTarget) {
    match native_share(&target).await {
        Ok(true) => services.success("Project shared successfully!"),
        Ok(false) => fallback(services, target).await,
        Err(e) => {
            log::info!("[SHARE] Native share failed: {}", dom::js_error_message(&e, "dismissed"));
            fallback(services, target).await;
        }
    }
}

async fn fallback(services: UiServices, target: ShareTarget) {
    match copy_to_clipboard(&target.url).await {
        Ok(()) => services.info("Project URL copied to clipboard!"),
        Err(e) => {
            log::info!("[SHARE] Clipboard unavailable ({}), opening dialog", dom::js_error_message(&e, "denied"));
            services.open_share_dialog(target);
        }
    }
}

/// `navigator.share(...)`; `Ok(false)` when the browser has no share sheet
async fn native_share(target: &ShareTarget) -> Result<bool, JsValue> {
    let Some(window) = dom::window() else {
        return Ok(false);
    };
    let navigator = window.navigator();
    let share = Reflect::get(&navigator, &JsValue::from_str("share"))?;
    if !share.is_function() {
        return Ok(false);
    }
    let share: Function = share.dyn_into()?;
    let data = serde_wasm_bindgen::to_value(target)?;
    let promise: Promise = share.call1(&navigator, &data)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(true)
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
        return Err(JsValue::from_str("Clipboard API unavailable"));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}
