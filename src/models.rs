//! Frontend Models
//!
//! Client-side state and the JSON shapes the server answers with.

use serde::{Deserialize, Serialize};

/// Like button state as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeState {
    pub liked: bool,
    pub count: i64,
}

impl LikeState {
    /// Optimistic flip: toggle `liked` and move the count with it.
    pub fn toggle(&mut self) {
        self.liked = !self.liked;
        if self.liked {
            self.count += 1;
        } else {
            self.count = (self.count - 1).max(0);
        }
    }

    /// Take whatever the server reported as truth.
    pub fn reconcile(&mut self, reply: &LikeResponse) {
        if let Some(count) = reply.like_count {
            self.count = count.max(0);
        }
        if let Some(liked) = reply.liked {
            self.liked = liked;
        }
    }
}

/// `POST /project/{id}/like`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub liked: Option<bool>,
}

/// Comment form action
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub comment_html: Option<String>,
}

/// Social network add/remove
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Every endpoint reports success the same way
pub trait ServerReply {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_server_reply {
    ($($ty:ty),*) => {
        $(impl ServerReply for $ty {
            fn success(&self) -> bool {
                self.success
            }
            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        })*
    };
}

impl_server_reply!(LikeResponse, CommentResponse, MessageResponse);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Background class for the toast
    pub fn bg_class(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Error => "bg-danger",
            ToastKind::Warning => "bg-warning",
            ToastKind::Info => "bg-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// What gets shared from the current page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareTarget {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Destructive actions that go through the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveSocialNetwork(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like() {
        let mut state = LikeState { liked: false, count: 3 };
        state.toggle();
        assert_eq!(state, LikeState { liked: true, count: 4 });
        state.toggle();
        assert_eq!(state, LikeState { liked: false, count: 3 });
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut state = LikeState { liked: true, count: 0 };
        state.toggle();
        assert_eq!(state, LikeState { liked: false, count: 0 });
    }

    #[test]
    fn test_reconcile_takes_server_count() {
        let reply: LikeResponse =
            serde_json::from_str(r#"{"success": true, "like_count": 5}"#).unwrap();
        let mut state = LikeState { liked: true, count: 4 };
        state.reconcile(&reply);
        assert_eq!(state, LikeState { liked: true, count: 5 });
    }

    #[test]
    fn test_reconcile_adopts_reported_liked() {
        let reply: LikeResponse = serde_json::from_str(
            r#"{"success": true, "liked": false, "like_count": 2, "message": "Project unliked"}"#,
        )
        .unwrap();
        let mut state = LikeState { liked: true, count: 4 };
        state.reconcile(&reply);
        assert_eq!(state, LikeState { liked: false, count: 2 });
        assert_eq!(reply.message(), Some("Project unliked"));
    }

    #[test]
    fn test_comment_response_optional_fields() {
        let reply: CommentResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!reply.success());
        assert_eq!(reply.message(), None);
        assert_eq!(reply.comment_html, None);
    }

    #[test]
    fn test_toast_classes() {
        assert_eq!(ToastKind::Success.bg_class(), "bg-success");
        assert_eq!(ToastKind::Error.bg_class(), "bg-danger");
        assert_eq!(ToastKind::Warning.bg_class(), "bg-warning");
        assert_eq!(ToastKind::Info.bg_class(), "bg-primary");
    }
}
