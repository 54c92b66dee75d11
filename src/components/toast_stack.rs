//! Toast Stack Component
//!
//! Fixed top-right stack of status toasts. The container only exists while
//! there is something to show.

use leptos::prelude::*;

use crate::context::use_ui_services;
use crate::store::UiStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let services = use_ui_services();
    let store = services.store();

    view! {
        <Show when=move || !store.toasts().read().is_empty()>
            <div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 9999;">
                <For
                    each=move || store.toasts().get()
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        let class = format!(
                            "toast show align-items-center text-white border-0 {}",
                            toast.kind.bg_class()
                        );
                        view! {
                            <div class=class role="alert" aria-live="assertive" aria-atomic="true">
                                <div class="d-flex">
                                    <div class="toast-body">{toast.message}</div>
                                    <button
                                        type="button"
                                        class="btn-close btn-close-white me-2 m-auto"
                                        aria-label="Close"
                                        on:click=move |_| services.dismiss_toast(id)
                                    ></button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
