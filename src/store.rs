//! UI State Store
//!
//! Toasts, the confirmation dialog and the share dialog, held in one
//! reactive_stores store so each overlay only re-renders on its own field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::confirm::ConfirmState;
use crate::models::{ShareTarget, Toast, ToastKind};

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u32,
    /// Confirmation dialog (single instance)
    pub confirm: ConfirmState,
    /// Share dialog target, `Some` while the dialog is open
    pub share: Option<ShareTarget>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

/// Append a toast and return its id
pub fn store_push_toast(store: &UiStore, kind: ToastKind, message: String) -> u32 {
    let id = {
        let field = store.last_toast_id();
        let mut last = field.write();
        *last = last.wrapping_add(1);
        *last
    };
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by id; no-op when it is already gone
pub fn store_remove_toast(store: &UiStore, toast_id: u32) {
    let present = store.toasts().read_untracked().iter().any(|t| t.id == toast_id);
    if present {
        store.toasts().write().retain(|t| t.id != toast_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_increase_and_remove_by_id() {
        let store = UiStore::new(UiState::default());

        let first = store_push_toast(&store, ToastKind::Success, "Project liked!".to_string());
        let second = store_push_toast(&store, ToastKind::Error, "Error processing like".to_string());
        assert_eq!((first, second), (1, 2));
        assert_eq!(store.last_toast_id().get_untracked(), 2);

        store_remove_toast(&store, first);
        store_remove_toast(&store, first);
        let ids: Vec<u32> = store.toasts().get_untracked().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second]);
    }
}
