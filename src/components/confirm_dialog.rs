//! Confirm Dialog Component
//!
//! Modal confirmation for destructive actions, with a "Don't ask again"
//! checkbox. Overlay click or Cancel dismisses without acting.

use leptos::prelude::*;

use crate::context::use_ui_services;
use crate::controllers;
use crate::store::UiStateStoreFields;

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let services = use_ui_services();
    let store = services.store();

    let on_confirm = move |_| {
        if let Some(action) = services.confirm() {
            log::info!("[CONFIRM] Confirmed {:?}", action);
            controllers::perform(services, action);
        }
    };

    view! {
        <Show when=move || store.confirm().read().is_open()>
            <div class="confirmation-overlay" on:click=move |_| services.cancel_confirmation()></div>
            <div class="confirmation-dialog" role="dialog" aria-modal="true">
                <h5 class="mb-3">"Confirm Deletion"</h5>
                <p class="mb-4">"Are you sure you want to remove this social network?"</p>
                <div class="form-check mb-3">
                    <input
                        class="form-check-input"
                        type="checkbox"
                        id="dontAskAgain"
                        prop:checked=move || store.confirm().read().dont_ask_again()
                        on:change=move |ev| services.set_dont_ask_again(event_target_checked(&ev))
                    />
                    <label class="form-check-label" for="dontAskAgain">
                        "Don't ask again"
                    </label>
                </div>
                <div class="d-flex gap-2 justify-content-end">
                    <button class="btn btn-secondary" on:click=move |_| services.cancel_confirmation()>
                        "Cancel"
                    </button>
                    <button class="btn btn-outline-danger" on:click=on_confirm>
                        "Confirm"
                    </button>
                </div>
            </div>
        </Show>
    }
}
