//! Page Effects
//!
//! Small conveniences on every page: navbar shadow on scroll, smooth anchor
//! scrolling, lazy images, flash auto-hide, validation hints, debounced
//! search, back-to-top.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement, IntersectionObserverEntry,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::config::InteractionConfig;
use crate::dom::{self, Bindings, ObserverBinding};

pub fn register(config: &InteractionConfig, bindings: &mut Bindings) {
    bind_navbar(config.navbar_scroll_threshold, bindings);
    bind_back_to_top(config.back_to_top_threshold, bindings);
    bind_anchor_links(config.anchor_offset, bindings);
    bind_comment_links(config.comment_focus_delay_ms, bindings);
    bind_lazy_images(bindings);
    schedule_flash_hide(config.flash_hide_ms);
    bind_form_validation(bindings);
    bind_search(config.search_debounce_ms, bindings);
}

/// Calls `f` once input has been quiet for `delay_ms`
struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    fn call(&self, f: impl FnOnce() + 'static) {
        // Replacing the Timeout drops (cancels) the previous one.
        let timeout = Timeout::new(self.delay_ms, f);
        *self.pending.borrow_mut() = Some(timeout);
    }
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn bind_navbar(threshold: f64, bindings: &mut Bindings) {
    let (Some(window), Some(navbar)) = (dom::window(), dom::query(".navbar")) else {
        return;
    };
    bindings.on(&window, "scroll", move |_| {
        let _ = navbar
            .class_list()
            .toggle_with_force("navbar-scrolled", dom::scroll_y() > threshold);
    });
}

fn bind_back_to_top(threshold: f64, bindings: &mut Bindings) {
    let buttons = dom::query_all(".back-to-top");
    let Some(window) = dom::window() else {
        return;
    };
    if buttons.is_empty() {
        return;
    }

    for button in buttons.iter() {
        bindings.on(button, "click", move |ev| {
            ev.prevent_default();
            smooth_scroll_to(0.0);
        });
    }
    bindings.on(&window, "scroll", move |_| {
        let visible = dom::scroll_y() > threshold;
        for button in buttons.iter() {
            let _ = button.class_list().toggle_with_force("show", visible);
        }
    });
}

/// `a[href^="#"]` scroll smoothly, leaving room for the fixed navbar.
/// `#comments` links are handled by [`bind_comment_links`].
fn bind_anchor_links(offset: f64, bindings: &mut Bindings) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        if href == "#comments" {
            continue;
        }
        bindings.on(&anchor, "click", move |ev| {
            ev.prevent_default();
            let target = anchor_target(&href)
                .and_then(dom::query)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                smooth_scroll_to(f64::from(target.offset_top()) - offset);
            }
        });
    }
}

/// Selector to scroll to; a bare `#` only suppresses the jump.
fn anchor_target(href: &str) -> Option<&str> {
    (href != "#").then_some(href)
}

fn bind_comment_links(focus_delay_ms: u32, bindings: &mut Bindings) {
    for link in dom::query_all("a[href=\"#comments\"]") {
        bindings.on(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(section) = dom::by_id::<web_sys::Element>("comments") else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);

            let textarea = section
                .query_selector("textarea")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(textarea) = textarea {
                Timeout::new(focus_delay_ms, move || {
                    let _ = textarea.focus();
                })
                .forget();
            }
        });
    }
}

/// Swap `data-src` into `src`
fn load_image(img: &HtmlImageElement) {
    if let Some(src) = img.get_attribute("data-src") {
        img.set_src(&src);
    }
    let _ = img.class_list().remove_1("lazy");
}

fn bind_lazy_images(bindings: &mut Bindings) {
    let images: Vec<HtmlImageElement> = dom::query_all("img[data-src]")
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    if images.is_empty() {
        return;
    }

    let supported = dom::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false);
    if !supported {
        log::debug!("[EFFECTS] No IntersectionObserver, loading {} images now", images.len());
        images.iter().for_each(load_image);
        return;
    }

    let observer = ObserverBinding::new(|entries, observer| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                load_image(img);
            }
            observer.unobserve(&target);
        }
    });
    match observer {
        Ok(observer) => {
            for img in images.iter() {
                observer.observe(img);
            }
            bindings.keep_observer(observer);
        }
        Err(e) => log::warn!(
            "[EFFECTS] IntersectionObserver failed: {}",
            dom::js_error_message(&e, "unknown")
        ),
    }
}

/// Fade out non-permanent flash alerts
fn schedule_flash_hide(delay_ms: u32) {
    for alert in dom::query_all(".alert:not(.alert-permanent)") {
        Timeout::new(delay_ms, move || {
            let _ = alert.class_list().remove_1("show");
            Timeout::new(150, move || alert.remove()).forget();
        })
        .forget();
    }
}

fn bind_form_validation(bindings: &mut Bindings) {
    for form in dom::query_all("form.needs-validation") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        bindings.on(&form, "submit", move |ev| {
            if !target.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            let _ = target.class_list().add_1("was-validated");
        });
    }
}

fn bind_search(delay_ms: u32, bindings: &mut Bindings) {
    let Some(input) = dom::query("input[name=\"search\"]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let debouncer = Debouncer::new(delay_ms);
    let source = input.clone();
    bindings.on(&input, "input", move |_| {
        let source = source.clone();
        debouncer.call(move || log::info!("[SEARCH] Search term: {}", source.value()));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hash_has_no_scroll_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#projects"), Some("#projects"));
    }
}
