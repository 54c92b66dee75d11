//! Comment Form
//!
//! Posts `#comment-form` in the background, prepends the server-rendered
//! comment, and keeps a live character counter under the textarea.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlButtonElement, HtmlFormElement, HtmlTextAreaElement};

use crate::api::{self, ApiError};
use crate::context::UiServices;
use crate::counter::CharCounter;
use crate::dom::{self, Bindings};
use crate::models::{CommentResponse, ToastKind};

const POSTING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Posting..."#;
const POSTED: &str = "Comment posted successfully!";
const POST_FAILED: &str = "Error posting comment";

pub fn register(services: UiServices, bindings: &mut Bindings) {
    let Some(form) = dom::by_id::<HtmlFormElement>("comment-form") else {
        return;
    };
    let textarea = form
        .query_selector("textarea[name=\"content\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());

    let target = form.clone();
    let content = textarea.clone();
    bindings.on(&form, "submit", move |ev| {
        ev.prevent_default();
        submit(services, &target, content.clone());
    });

    if let Some(textarea) = textarea {
        bind_counter(services, &textarea, bindings);
    }
    log::debug!("[COMMENT] Comment form bound");
}

fn submit(services: UiServices, form: &HtmlFormElement, textarea: Option<HtmlTextAreaElement>) {
    let form_data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("[COMMENT] Could not read form: {}", dom::js_error_message(&e, "FormData failed"));
            services.error(POST_FAILED);
            return;
        }
    };
    let action = form.action();
    let config = services.config();

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = button.as_ref().map(|b| b.inner_html());
    if let Some(button) = &button {
        button.set_disabled(true);
        button.set_inner_html(POSTING_LABEL);
    }

    spawn_local(async move {
        let result = api::post_comment(&config, &action, form_data).await;
        if let Ok(reply) = &result {
            if let Some(textarea) = &textarea {
                textarea.set_value("");
                // Let the counter see the cleared value.
                if let Ok(input) = Event::new("input") {
                    let _ = textarea.dispatch_event(&input);
                }
            }

            if let Some(html) = reply.comment_html.as_deref() {
                match dom::by_id::<web_sys::Element>("comments-container") {
                    Some(container) => {
                        if let Err(e) = container.insert_adjacent_html("afterbegin", html) {
                            log::error!("[COMMENT] Insert failed: {}", dom::js_error_message(&e, "unknown"));
                        }
                    }
                    None => log::warn!("[COMMENT] #comments-container missing, new comment not shown"),
                }
            }

            if let Some(counter) = dom::query(".comment-count") {
                let next = next_comment_count(counter.text_content().as_deref());
                counter.set_text_content(Some(&next.to_string()));
            }
        }
        if let Err(e) = &result {
            log::warn!("[COMMENT] Post to {} failed: {}", action, e);
        }
        let (kind, message) = post_outcome(&result);
        services.notify(kind, message);

        if let Some(button) = &button {
            button.set_disabled(false);
            if let Some(label) = &original_label {
                button.set_inner_html(label);
            }
        }
    });
}

/// Toast for a finished post: fixed text on success, the server's reason
/// (or a generic one) on failure.
fn post_outcome(result: &Result<CommentResponse, ApiError>) -> (ToastKind, String) {
    match result {
        Ok(_) => (ToastKind::Success, POSTED.to_string()),
        Err(e) => (ToastKind::Error, e.user_message(POST_FAILED)),
    }
}

/// Value for `.comment-count` after one more comment
fn next_comment_count(current: Option<&str>) -> i64 {
    current.map(dom::parse_count).unwrap_or(0) + 1
}

/// `<small>` after the textarea showing how many characters are left
fn bind_counter(services: UiServices, textarea: &HtmlTextAreaElement, bindings: &mut Bindings) {
    let config = services.config();
    let counter = CharCounter {
        max_length: config.comment_max_length,
        warning_below: config.counter_warning_below,
        danger_below: config.counter_danger_below,
    };

    let (Some(doc), Some(parent)) = (dom::document(), textarea.parent_node()) else {
        return;
    };
    let Ok(label) = doc.create_element("small") else {
        return;
    };
    if parent.append_child(&label).is_err() {
        return;
    }

    let render = move |value: &str| {
        let reading = counter.read(value);
        label.set_text_content(Some(&reading.label()));
        label.set_class_name(reading.level.class());
    };
    render(&textarea.value());

    let source = textarea.clone();
    bindings.on(textarea, "input", move |_| render(&source.value()));
}
