//! Confirmation Gate
//!
//! Destructive actions wait in `Awaiting` until the user confirms or cancels.
//! A persisted "don't ask again" flag lets actions skip the prompt entirely.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashSet;

use crate::models::ConfirmAction;

/// Where the skip flag lives between sessions
pub trait PreferenceStore {
    fn flag(&self, key: &str) -> bool;
    fn set_flag(&self, key: &str);
}

/// `window.localStorage`, flag stored as the string `"true"`
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn flag(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.get_item(key).ok().flatten())
            .is_some_and(|v| v == "true")
    }

    fn set_flag(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, "true").is_err() {
                    log::warn!("[CONFIRM] Could not persist {} (storage full or blocked)", key);
                }
            }
            None => log::warn!("[CONFIRM] localStorage unavailable, {} not persisted", key),
        }
    }
}

/// In-memory flags
#[cfg(test)]
#[derive(Default)]
pub struct MemoryPrefs {
    flags: RefCell<HashSet<String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPrefs {
    fn flag(&self, key: &str) -> bool {
        self.flags.borrow().contains(key)
    }

    fn set_flag(&self, key: &str) {
        self.flags.borrow_mut().insert(key.to_string());
    }
}

/// Outcome of asking for a gated action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Skip flag set: run the action now
    Proceed(ConfirmAction),
    /// Dialog is (now) showing this action
    Prompted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Awaiting {
        action: ConfirmAction,
        dont_ask_again: bool,
    },
}

impl ConfirmState {
    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmState::Awaiting { .. })
    }

    pub fn dont_ask_again(&self) -> bool {
        matches!(self, ConfirmState::Awaiting { dont_ask_again: true, .. })
    }

    /// Ask for `action`. Replaces any request already on screen.
    pub fn request(&mut self, action: ConfirmAction, prefs: &impl PreferenceStore, key: &str) -> Gate {
        if prefs.flag(key) {
            *self = ConfirmState::Idle;
            return Gate::Proceed(action);
        }
        *self = ConfirmState::Awaiting {
            action,
            dont_ask_again: false,
        };
        Gate::Prompted
    }

    pub fn set_dont_ask_again(&mut self, checked: bool) {
        if let ConfirmState::Awaiting { dont_ask_again, .. } = self {
            *dont_ask_again = checked;
        }
    }

    /// User confirmed. Persists the skip flag first when it was ticked, then
    /// hands back the action to run.
    pub fn confirm(&mut self, prefs: &impl PreferenceStore, key: &str) -> Option<ConfirmAction> {
        match std::mem::take(self) {
            ConfirmState::Awaiting {
                action,
                dont_ask_again,
            } => {
                if dont_ask_again {
                    prefs.set_flag(key);
                }
                Some(action)
            }
            ConfirmState::Idle => None,
        }
    }

    /// User cancelled (button or overlay click). Returns whether a dialog was open.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(self).is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "skipSocialNetworkConfirmation";

    #[test]
    fn test_request_prompts_without_flag() {
        let prefs = MemoryPrefs::default();
        let mut state = ConfirmState::default();

        let gate = state.request(ConfirmAction::RemoveSocialNetwork(3), &prefs, KEY);
        assert_eq!(gate, Gate::Prompted);
        assert!(state.is_open());
        assert!(!state.dont_ask_again());
    }

    #[test]
    fn test_cancel_runs_nothing() {
        let prefs = MemoryPrefs::default();
        let mut state = ConfirmState::default();
        state.request(ConfirmAction::RemoveSocialNetwork(3), &prefs, KEY);

        assert!(state.cancel());
        assert_eq!(state, ConfirmState::Idle);
        assert_eq!(state.confirm(&prefs, KEY), None);
        assert!(!state.cancel());
    }

    #[test]
    fn test_confirm_without_checkbox_does_not_persist() {
        let prefs = MemoryPrefs::default();
        let mut state = ConfirmState::default();
        state.request(ConfirmAction::RemoveSocialNetwork(3), &prefs, KEY);

        assert_eq!(state.confirm(&prefs, KEY), Some(ConfirmAction::RemoveSocialNetwork(3)));
        assert_eq!(state, ConfirmState::Idle);
        assert!(!prefs.flag(KEY));
    }

    #[test]
    fn test_dont_ask_again_skips_future_prompts() {
        let prefs = MemoryPrefs::default();
        let mut state = ConfirmState::default();
        state.request(ConfirmAction::RemoveSocialNetwork(3), &prefs, KEY);
        state.set_dont_ask_again(true);

        assert_eq!(state.confirm(&prefs, KEY), Some(ConfirmAction::RemoveSocialNetwork(3)));
        assert!(prefs.flag(KEY));

        let gate = state.request(ConfirmAction::RemoveSocialNetwork(9), &prefs, KEY);
        assert_eq!(gate, Gate::Proceed(ConfirmAction::RemoveSocialNetwork(9)));
        assert!(!state.is_open());
    }

    #[test]
    fn test_new_request_replaces_open_dialog() {
        let prefs = MemoryPrefs::default();
        let mut state = ConfirmState::default();
        state.request(ConfirmAction::RemoveSocialNetwork(1), &prefs, KEY);
        state.set_dont_ask_again(true);

        state.request(ConfirmAction::RemoveSocialNetwork(2), &prefs, KEY);
        assert_eq!(
            state,
            ConfirmState::Awaiting {
                action: ConfirmAction::RemoveSocialNetwork(2),
                dont_ask_again: false,
            }
        );
    }

    #[test]
    fn test_checkbox_ignored_when_idle() {
        let mut state = ConfirmState::Idle;
        state.set_dont_ask_again(true);
        assert_eq!(state, ConfirmState::Idle);
    }
}
