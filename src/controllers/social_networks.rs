//! Social Networks
//!
//! Add via `#social-network-form`, remove via `[data-remove-network-id]`
//! buttons. Removal goes through the confirmation dialog unless the user
//! opted out.

use leptos::task::spawn_local;
use web_sys::{FormData, HtmlFormElement};

use crate::api::{self, ApiError};
use crate::confirm::Gate;
use crate::context::UiServices;
use crate::dom::{self, Bindings};
use crate::models::{ConfirmAction, MessageResponse, ToastKind};

const ADDED: &str = "Social network added successfully!";
const REMOVED: &str = "Social network removed successfully!";
const GENERIC_FAILURE: &str = "An error occurred";

pub fn register(services: UiServices, bindings: &mut Bindings) {
    if let Some(form) = dom::by_id::<HtmlFormElement>("social-network-form") {
        let target = form.clone();
        bindings.on(&form, "submit", move |ev| {
            ev.prevent_default();
            add_network(services, &target);
        });
    }

    for button in dom::query_all("[data-remove-network-id]") {
        let Some(network_id) = button
            .get_attribute("data-remove-network-id")
            .and_then(|id| id.trim().parse::<u32>().ok())
        else {
            log::warn!("[SOCIAL] Remove button without a numeric network id");
            continue;
        };
        bindings.on(&button, "click", move |ev| {
            ev.prevent_default();
            request_removal(services, network_id);
        });
    }
}

fn add_network(services: UiServices, form: &HtmlFormElement) {
    let form_data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("[SOCIAL] Could not read form: {}", dom::js_error_message(&e, "FormData failed"));
            services.error(GENERIC_FAILURE);
            return;
        }
    };
    let config = services.config();
    let form = form.clone();

    spawn_local(async move {
        let result = api::add_social_network(&config, form_data).await;
        if let Err(e) = &result {
            log::warn!("[SOCIAL] Add failed: {}", e);
        }
        let added = result.is_ok();
        let (kind, message) = mutation_outcome(result, ADDED);
        services.notify(kind, message);
        if added {
            form.reset();
            dom::reload_page();
        }
    });
}

/// Ask first (unless the user opted out), then remove.
pub fn request_removal(services: UiServices, network_id: u32) {
    match services.request_confirmation(ConfirmAction::RemoveSocialNetwork(network_id)) {
        Gate::Proceed(action) => super::perform(services, action),
        Gate::Prompted => log::debug!("[SOCIAL] Awaiting confirmation to remove {}", network_id),
    }
}

/// Issue the delete. Call only once the removal is confirmed.
pub(super) fn remove_network(services: UiServices, network_id: u32) {
    let config = services.config();
    spawn_local(async move {
        let result = api::remove_social_network(&config, network_id).await;
        if let Err(e) = &result {
            log::warn!("[SOCIAL] Remove {} failed: {}", network_id, e);
        }
        let removed = result.is_ok();
        let (kind, message) = mutation_outcome(result, REMOVED);
        services.notify(kind, message);
        if removed {
            match after_removal(dom::query(&entry_selector(network_id))) {
                AfterRemoval::Detach(entry) => entry.remove(),
                AfterRemoval::Reload => dom::reload_page(),
            }
        }
    });
}

/// Toast for an add or remove: the server's message, or `success` /
/// a generic failure when it sent none.
fn mutation_outcome(result: Result<MessageResponse, ApiError>, success: &str) -> (ToastKind, String) {
    match result {
        Ok(reply) => (
            ToastKind::Success,
            reply
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| success.to_string()),
        ),
        Err(e) => (ToastKind::Error, e.user_message(GENERIC_FAILURE)),
    }
}

/// How the list catches up after a removal
#[derive(Debug, PartialEq)]
enum AfterRemoval<E> {
    /// The page marks its entries: drop just this one
    Detach(E),
    Reload,
}

fn after_removal<E>(entry: Option<E>) -> AfterRemoval<E> {
    match entry {
        Some(entry) => AfterRemoval::Detach(entry),
        None => AfterRemoval::Reload,
    }
}

fn entry_selector(network_id: u32) -> String {
    format!("[data-social-network-id=\"{}\"]", network_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::accept;

    fn reply(json: &str) -> Result<MessageResponse, ApiError> {
        accept(serde_json::from_str::<MessageResponse>(json).unwrap())
    }

    #[test]
    fn test_success_uses_server_message() {
        let outcome = mutation_outcome(reply(r#"{"success": true, "message": "GitHub added"}"#), ADDED);
        assert_eq!(outcome, (ToastKind::Success, "GitHub added".to_string()));
    }

    #[test]
    fn test_success_without_message_falls_back() {
        assert_eq!(
            mutation_outcome(reply(r#"{"success": true}"#), ADDED),
            (ToastKind::Success, ADDED.to_string())
        );
        assert_eq!(
            mutation_outcome(reply(r#"{"success": true, "message": ""}"#), REMOVED),
            (ToastKind::Success, REMOVED.to_string())
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            mutation_outcome(reply(r#"{"success": false, "message": "Invalid URL"}"#), ADDED),
            (ToastKind::Error, "Invalid URL".to_string())
        );
        assert_eq!(
            mutation_outcome(Err(ApiError::Transport("offline".into())), REMOVED),
            (ToastKind::Error, GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_removal_detaches_marked_entry_or_reloads() {
        assert_eq!(after_removal(Some("entry")), AfterRemoval::Detach("entry"));
        assert_eq!(after_removal::<&str>(None), AfterRemoval::Reload);
    }

    #[test]
    fn test_entry_selector() {
        assert_eq!(entry_selector(7), "[data-social-network-id=\"7\"]");
    }
}
