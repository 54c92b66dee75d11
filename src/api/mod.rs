//! Server API
//!
//! `fetch` wrappers for the portfolio's JSON endpoints, organized by feature.
//! Every mutating request carries the CSRF header read fresh from the page.

mod comment;
mod like;
mod social;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::config::InteractionConfig;
use crate::dom;
use crate::models::ServerReply;

pub use comment::*;
pub use like::*;
pub use social::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch rejected (offline, CORS, aborted by navigation)
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status without a JSON body
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// Body was not the JSON we expected
    #[error("unexpected response: {0}")]
    Decode(String),
    /// `success: false`
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// Text for the error toast: the server's own message when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Request body
pub enum Body {
    Empty,
    /// No payload, but announced as JSON (the like endpoint expects this)
    EmptyJson,
    Form(FormData),
}

/// Check the `success` flag, turning a refusal into an error.
pub fn accept<T: ServerReply>(reply: T) -> Result<T, ApiError> {
    if reply.success() {
        Ok(reply)
    } else {
        Err(ApiError::Rejected(reply.message().map(str::to_string)))
    }
}

/// Send one request and decode the JSON reply.
pub(crate) async fn send<T>(
    config: &InteractionConfig,
    method: &str,
    url: &str,
    body: Body,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + ServerReply,
{
    let request = build_request(config, method, url, body)?;
    let window = dom::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(dom::js_error_message(&e, "network error")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Transport("fetch did not return a Response".to_string()))?;

    let status = response.status();
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(e) => Err(e),
    };
    let json = match json {
        Ok(json) => json,
        Err(_) if !response.ok() => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(dom::js_error_message(&e, "invalid JSON"))),
    };

    let reply: T = serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    log::debug!("[API] {} {} -> {} (success={})", method, url, status, reply.success());
    accept(reply)
}

fn build_request(
    config: &InteractionConfig,
    method: &str,
    url: &str,
    body: Body,
) -> Result<Request, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Body::Form(form) = &body {
        init.set_body(form);
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::Transport(dom::js_error_message(&e, "invalid request")))?;
    let headers = request.headers();

    if matches!(body, Body::EmptyJson) {
        let _ = headers.set("Content-Type", "application/json");
    }
    match dom::meta_content(&config.csrf_meta_name) {
        Some(token) => {
            let _ = headers.set(&config.csrf_header, &token);
        }
        None => log::warn!(
            "[API] No <meta name=\"{}\"> on the page; sending {} {} without CSRF token",
            config.csrf_meta_name,
            method,
            url
        ),
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageResponse;

    fn reply(json: &str) -> MessageResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accept_success() {
        let ok = accept(reply(r#"{"success": true, "message": "Social network added successfully!"}"#));
        assert_eq!(ok.unwrap().message.as_deref(), Some("Social network added successfully!"));
    }

    #[test]
    fn test_accept_refusal_keeps_message() {
        let err = accept(reply(r#"{"success": false, "message": "rate limited"}"#)).unwrap_err();
        assert_eq!(err, ApiError::Rejected(Some("rate limited".to_string())));
        assert_eq!(err.user_message("Error processing like"), "rate limited");
    }

    #[test]
    fn test_user_message_fallbacks() {
        let fallback = "An error occurred";
        assert_eq!(ApiError::Rejected(None).user_message(fallback), fallback);
        assert_eq!(ApiError::Rejected(Some("  ".into())).user_message(fallback), fallback);
        assert_eq!(ApiError::Transport("offline".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::Status(500).user_message(fallback), fallback);
        assert_eq!(ApiError::Decode("eof".into()).user_message(fallback), fallback);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Status(404).to_string(), "server returned HTTP 404");
        assert_eq!(ApiError::Rejected(None).to_string(), "rejected by server: no message");
    }
}
