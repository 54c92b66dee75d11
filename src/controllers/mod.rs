//! Page Controllers
//!
//! One registration pass over the server-rendered page. Each controller finds
//! its elements and binds listeners; a controller whose elements are missing
//! stays inert.

mod comment_form;
mod like_button;
mod page_effects;
mod share;
mod social_networks;

use crate::context::UiServices;
use crate::dom::Bindings;
use crate::models::ConfirmAction;

pub use share::copy_to_clipboard;

/// Bind every controller. Dropping the returned bindings unbinds them all.
pub fn register_all(services: UiServices) -> Bindings {
    let config = services.config();
    let mut bindings = Bindings::new();

    like_button::register(services, &mut bindings);
    comment_form::register(services, &mut bindings);
    share::register(services, &mut bindings);
    social_networks::register(services, &mut bindings);
    page_effects::register(&config, &mut bindings);

    bindings
}

/// Run an action the user confirmed (or opted out of confirming)
pub fn perform(services: UiServices, action: ConfirmAction) {
    match action {
        ConfirmAction::RemoveSocialNetwork(network_id) => {
            social_networks::remove_network(services, network_id)
        }
    }
}
