//! DOM Helpers
//!
//! Lookups on the server-rendered page and listener bindings that clean up
//! after themselves.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, IntersectionObserver, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        log::warn!("[DOM] Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Content of `<meta name="{name}">`, read fresh on every call
pub fn meta_content(name: &str) -> Option<String> {
    query(&format!("meta[name=\"{}\"]", name))?.get_attribute("content")
}

/// `data-user-authenticated` on `<body>`: present and not empty/"false"
pub fn user_authenticated() -> bool {
    body()
        .and_then(|b| b.get_attribute("data-user-authenticated"))
        .map(|v| is_truthy_flag(&v))
        .unwrap_or(false)
}

pub fn is_truthy_flag(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("false") && value != "0"
}

/// Leading integer of an element's text ("3 likes" is 3), 0 if there is none
pub fn parse_count(text: &str) -> i64 {
    let text = text.trim_start();
    let digits_from = usize::from(text.starts_with(['-', '+']));
    let end = text[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + digits_from);
    text[..end].parse().unwrap_or(0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn navigate_to(href: &str) {
    if let Some(win) = window() {
        if win.location().set_href(href).is_err() {
            log::error!("[DOM] Navigation to {} failed", href);
        }
    }
}

pub fn reload_page() {
    if let Some(win) = window() {
        let _ = win.location().reload();
    }
}

/// Readable message out of a thrown JS value
pub fn js_error_message(err: &JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}

/// An event listener attached to a DOM target. Dropping the binding removes
/// the listener.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` and its callback. Dropping disconnects it.
pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverBinding {
    pub fn new<F>(handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(js_sys::Array, IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(handler);
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Collects bindings made during one registration pass
#[derive(Default)]
pub struct Bindings {
    inner: Vec<EventBinding>,
    observers: Vec<ObserverBinding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind and keep the listener; a failed bind is logged and skipped.
    pub fn on<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        match EventBinding::new(target, event, handler) {
            Ok(binding) => self.inner.push(binding),
            Err(e) => log::error!(
                "[DOM] Failed to bind {}: {}",
                event,
                js_error_message(&e, "unknown error")
            ),
        }
    }

    pub fn keep_observer(&mut self, observer: ObserverBinding) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.inner.len() + self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_flag() {
        assert!(is_truthy_flag("true"));
        assert!(is_truthy_flag("1"));
        assert!(is_truthy_flag("yes"));
        assert!(!is_truthy_flag(""));
        assert!(!is_truthy_flag("  "));
        assert!(!is_truthy_flag("False"));
        assert!(!is_truthy_flag("0"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
    }

    #[test]
    fn test_parse_count_reads_leading_integer() {
        assert_eq!(parse_count("3 likes"), 3);
        assert_eq!(parse_count("  42\n"), 42);
        assert_eq!(parse_count("-2x"), -2);
        assert_eq!(parse_count("+"), 0);
        assert_eq!(parse_count("x3"), 0);
    }

    #[test]
    fn test_empty_bindings() {
        let bindings = Bindings::new();
        assert!(bindings.is_empty());
        assert_eq!(bindings.len(), 0);
    }
}
