//! Like Button
//!
//! Optimistic toggle: the heart flips and the count moves before the server
//! answers, then settles on the server's count or reverts.

use gloo_timers::callback::Timeout;
use leptos::task::spawn_local;
use optimistic_state::{apply_optimistic, Pending, StateCell};
use web_sys::Element;

use crate::api::{self, ApiError};
use crate::context::UiServices;
use crate::dom::{self, Bindings};
use crate::models::{LikeResponse, LikeState, ToastKind};
use crate::urls;

const LIKED_CLASS: &str = "liked";
const ICON_LIKED: &str = "fas fa-heart text-danger";
const ICON_UNLIKED: &str = "fas fa-heart";
const PULSE_CLASSES: [&str; 2] = ["animate__animated", "animate__pulse"];
const LIKED: &str = "Project liked!";
const UNLIKED: &str = "Project unliked";
const LIKE_FAILED: &str = "Error processing like";

/// The like button's DOM is the state: `liked` class, icon class and the
/// `.like-count` text.
#[derive(Clone)]
struct LikeView {
    button: Element,
    icon: Option<Element>,
    count: Option<Element>,
}

impl LikeView {
    fn new(button: &Element) -> Self {
        Self {
            button: button.clone(),
            icon: button.query_selector("i").ok().flatten(),
            count: button.query_selector(".like-count").ok().flatten(),
        }
    }

    fn pulse(&self, duration_ms: u32) {
        let Some(icon) = self.icon.clone() else {
            return;
        };
        let classes = icon.class_list();
        for class in PULSE_CLASSES {
            let _ = classes.add_1(class);
        }
        Timeout::new(duration_ms, move || {
            let classes = icon.class_list();
            for class in PULSE_CLASSES {
                let _ = classes.remove_1(class);
            }
        })
        .forget();
    }
}

impl StateCell<LikeState> for LikeView {
    fn read(&self) -> LikeState {
        LikeState {
            liked: self.button.class_list().contains(LIKED_CLASS),
            count: self
                .count
                .as_ref()
                .and_then(|el| el.text_content())
                .map(|text| dom::parse_count(&text))
                .unwrap_or(0),
        }
    }

    fn write(&self, state: LikeState) {
        let _ = self.button.class_list().toggle_with_force(LIKED_CLASS, state.liked);
        if let Some(icon) = &self.icon {
            icon.set_class_name(if state.liked { ICON_LIKED } else { ICON_UNLIKED });
        }
        if let Some(count) = &self.count {
            count.set_text_content(Some(&state.count.to_string()));
        }
    }
}

/// Wire every `.like-btn` on the page
pub fn register(services: UiServices, bindings: &mut Bindings) {
    let buttons = dom::query_all(".like-btn");
    for button in buttons.iter() {
        let target = button.clone();
        bindings.on(button, "click", move |ev| {
            ev.prevent_default();
            activate(services, &target);
        });
    }
    log::debug!("[LIKE] Bound {} like buttons", buttons.len());
}

fn activate(services: UiServices, button: &Element) {
    let Some(project_id) = button
        .get_attribute("data-project-id")
        .filter(|id| !id.trim().is_empty())
    else {
        return;
    };
    let config = services.config();

    if !dom::user_authenticated() {
        let href = urls::login_redirect(&config.login_path, &dom::current_pathname());
        log::info!("[LIKE] Not signed in, redirecting to {}", href);
        dom::navigate_to(&href);
        return;
    }

    let view = LikeView::new(button);
    let pending = apply_optimistic(view.clone(), LikeState::toggle);
    if pending.guess().liked {
        view.pulse(config.pulse_duration_ms);
    }
    log::debug!(
        "[LIKE] Project {}: {:?} -> {:?}",
        project_id,
        pending.before(),
        pending.guess()
    );

    spawn_local(async move {
        let result = api::toggle_like(&config, &project_id).await;
        if let Err(e) = &result {
            log::warn!("[LIKE] Project {} failed: {}", project_id, e);
        }
        let (settled, kind, message) = settle(pending, result);
        log::debug!("[LIKE] Project {} settled at {:?}", project_id, settled);
        services.notify(kind, message);
    });
}

/// Settle an optimistic toggle with the server's answer: adopt its count on
/// success, restore the previous state otherwise. Returns the state left on
/// screen and the toast to show.
fn settle<C: StateCell<LikeState>>(
    pending: Pending<LikeState, C>,
    result: Result<LikeResponse, ApiError>,
) -> (LikeState, ToastKind, String) {
    match result {
        Ok(reply) => {
            let settled = pending.commit(|state| state.reconcile(&reply));
            let fallback = if settled.liked { LIKED } else { UNLIKED };
            let message = reply
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            (settled, ToastKind::Success, message)
        }
        Err(e) => {
            let restored = pending.rollback();
            (restored, ToastKind::Error, e.user_message(LIKE_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::accept;

    /// Toggle `start`, then settle with the reply the server would send.
    fn run(start: LikeState, reply: Result<LikeResponse, ApiError>) -> (LikeState, LikeState, ToastKind, String) {
        let cell = Rc::new(RefCell::new(start));
        let pending = apply_optimistic(cell.clone(), LikeState::toggle);
        let shown = *pending.guess();
        let (settled, kind, message) = settle(pending, reply);
        assert_eq!(*cell.borrow(), settled);
        (shown, settled, kind, message)
    }

    fn reply(json: &str) -> Result<LikeResponse, ApiError> {
        accept(serde_json::from_str::<LikeResponse>(json).unwrap())
    }

    #[test]
    fn test_like_settles_on_server_count() {
        let (shown, settled, kind, message) = run(
            LikeState { liked: false, count: 3 },
            reply(r#"{"success": true, "like_count": 5}"#),
        );
        assert_eq!(shown, LikeState { liked: true, count: 4 });
        assert_eq!(settled, LikeState { liked: true, count: 5 });
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(message, LIKED);
    }

    #[test]
    fn test_unlike_uses_unliked_message() {
        let (_, settled, kind, message) = run(
            LikeState { liked: true, count: 5 },
            reply(r#"{"success": true, "like_count": 4, "liked": false}"#),
        );
        assert_eq!(settled, LikeState { liked: false, count: 4 });
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(message, UNLIKED);
    }

    #[test]
    fn test_server_message_wins_on_success() {
        let (_, _, _, message) = run(
            LikeState { liked: false, count: 0 },
            reply(r#"{"success": true, "like_count": 1, "message": "Thanks!"}"#),
        );
        assert_eq!(message, "Thanks!");
    }

    #[test]
    fn test_rejected_like_reverts() {
        let (shown, settled, kind, message) = run(
            LikeState { liked: false, count: 3 },
            reply(r#"{"success": false, "message": "rate limited"}"#),
        );
        assert_eq!(shown, LikeState { liked: true, count: 4 });
        assert_eq!(settled, LikeState { liked: false, count: 3 });
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, "rate limited");
    }

    #[test]
    fn test_rejected_unlike_reverts_with_fallback_message() {
        let (shown, settled, _, message) =
            run(LikeState { liked: true, count: 7 }, reply(r#"{"success": false}"#));
        assert_eq!(shown, LikeState { liked: false, count: 6 });
        assert_eq!(settled, LikeState { liked: true, count: 7 });
        assert_eq!(message, LIKE_FAILED);
    }

    #[test]
    fn test_network_failure_reverts() {
        let (_, settled, kind, message) = run(
            LikeState { liked: false, count: 3 },
            Err(ApiError::Transport("offline".to_string())),
        );
        assert_eq!(settled, LikeState { liked: false, count: 3 });
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, LIKE_FAILED);
    }
}
