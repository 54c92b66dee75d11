//! UI Services
//!
//! The toast sink, confirmation dialog and share dialog, constructed once per
//! page and handed to every controller. Provided via Leptos Context API so the
//! overlay components can reach it too.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::InteractionConfig;
use crate::confirm::{Gate, LocalStoragePrefs};
use crate::models::{ConfirmAction, ShareTarget, ToastKind};
use crate::store::{store_push_toast, store_remove_toast, UiState, UiStateStoreFields, UiStore};

#[derive(Clone, Copy)]
pub struct UiServices {
    store: UiStore,
    config: StoredValue<InteractionConfig>,
}

impl UiServices {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            store: UiStore::new(UiState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn store(&self) -> UiStore {
        self.store
    }

    pub fn config(&self) -> InteractionConfig {
        self.config.get_value()
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast; it dismisses itself after the configured lifetime.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        log::debug!("[TOAST] {:?}: {}", kind, message);
        let id = store_push_toast(&self.store, kind, message);

        let store = self.store;
        let lifetime = self.config.with_value(|c| c.toast_lifetime_ms);
        Timeout::new(lifetime, move || store_remove_toast(&store, id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn dismiss_toast(&self, id: u32) {
        store_remove_toast(&self.store, id);
    }

    // ========================
    // Confirmation dialog
    // ========================

    /// Ask before running `action`; `Gate::Proceed` means the user opted out
    /// of the prompt earlier.
    pub fn request_confirmation(&self, action: ConfirmAction) -> Gate {
        let key = self.config.with_value(|c| c.skip_confirm_key.clone());
        self.store.confirm().write().request(action, &LocalStoragePrefs, &key)
    }

    pub fn set_dont_ask_again(&self, checked: bool) {
        self.store.confirm().write().set_dont_ask_again(checked);
    }

    /// Close the dialog and hand back the confirmed action.
    pub fn confirm(&self) -> Option<ConfirmAction> {
        let key = self.config.with_value(|c| c.skip_confirm_key.clone());
        self.store.confirm().write().confirm(&LocalStoragePrefs, &key)
    }

    pub fn cancel_confirmation(&self) {
        if self.store.confirm().write().cancel() {
            log::debug!("[CONFIRM] Cancelled");
        }
    }

    // ========================
    // Share dialog
    // ========================

    pub fn open_share_dialog(&self, target: ShareTarget) {
        self.store.share().set(Some(target));
    }

    pub fn close_share_dialog(&self) {
        self.store.share().set(None);
    }
}

/// Get the UI services from context
pub fn use_ui_services() -> UiServices {
    expect_context::<UiServices>()
}
