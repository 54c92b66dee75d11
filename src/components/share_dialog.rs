//! Share Dialog Component
//!
//! Last-resort share options when neither the native share sheet nor the
//! clipboard worked. Mounted while a share target is set, gone once closed.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::context::use_ui_services;
use crate::controllers::copy_to_clipboard;
use crate::store::UiStateStoreFields;
use crate::urls;

const DIALOG_SELECTOR: &str = ".modal-dialog";

/// A click closes the dialog unless it started inside `.modal-dialog`.
fn is_outside_click<E>(enclosing_dialog: Option<E>) -> bool {
    enclosing_dialog.is_none()
}

#[component]
pub fn ShareDialog() -> impl IntoView {
    let services = use_ui_services();
    let store = services.store();

    move || {
        store.share().get().map(|target| {
            let linkedin = urls::linkedin_share(&target.url);
            let twitter = urls::twitter_share(&target.url, &target.title);
            let url = target.url.clone();

            let copy_link = move |_| {
                let url = url.clone();
                spawn_local(async move {
                    match copy_to_clipboard(&url).await {
                        Ok(()) => services.success("Link copied to clipboard!"),
                        Err(_) => services.error("Could not copy the link"),
                    }
                });
            };

            // `.modal` covers the viewport, so backdrop clicks land on it.
            let on_outside_click = move |ev: MouseEvent| {
                let dialog = ev
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(DIALOG_SELECTOR).ok().flatten());
                if is_outside_click(dialog) {
                    services.close_share_dialog();
                }
            };

            view! {
                <div class="modal-backdrop fade show"></div>
                <div
                    class="modal fade show d-block"
                    tabindex="-1"
                    role="dialog"
                    aria-modal="true"
                    on:click=on_outside_click
                >
                    <div class="modal-dialog modal-dialog-centered">
                        <div class="modal-content">
                            <div class="modal-header">
                                <h5 class="modal-title">"Share Project"</h5>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| services.close_share_dialog()
                                ></button>
                            </div>
                            <div class="modal-body text-center">
                                <p class="mb-3">"Share this project:"</p>
                                <div class="d-grid gap-2">
                                    <a href=linkedin target="_blank" rel="noopener" class="btn btn-primary">
                                        <i class="fab fa-linkedin me-2"></i>
                                        "Share on LinkedIn"
                                    </a>
                                    <a href=twitter target="_blank" rel="noopener" class="btn btn-info">
                                        <i class="fab fa-twitter me-2"></i>
                                        "Share on Twitter"
                                    </a>
                                    <button class="btn btn-secondary" on:click=copy_link>
                                        <i class="fas fa-copy me-2"></i>
                                        "Copy Link"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
