//! Portfolio Interactions App
//!
//! Root component: builds the UI services, binds the page controllers and
//! renders the overlays (toasts, confirmation dialog, share dialog).

use leptos::prelude::*;

use crate::components::{ConfirmDialog, ShareDialog, ToastStack};
use crate::config::InteractionConfig;
use crate::context::UiServices;
use crate::controllers;

#[component]
pub fn App(config: InteractionConfig) -> impl IntoView {
    let services = UiServices::new(config);
    provide_context(services);

    // Listeners live as long as this component; disposing the owner unbinds them.
    let bindings = controllers::register_all(services);
    if bindings.is_empty() {
        log::info!("[APP] Nothing to enhance on this page");
    } else {
        log::info!("[APP] Page enhanced, {} bindings", bindings.len());
    }
    let _bindings = StoredValue::new_local(bindings);

    view! {
        <ToastStack />
        <ConfirmDialog />
        <ShareDialog />
    }
}
