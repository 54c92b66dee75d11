//! Comment Endpoint

use web_sys::FormData;

use crate::config::InteractionConfig;
use crate::models::CommentResponse;

use super::{send, ApiError, Body};

/// Post the comment form's data to its `action` URL.
pub async fn post_comment(
    config: &InteractionConfig,
    action: &str,
    form: FormData,
) -> Result<CommentResponse, ApiError> {
    send(config, "POST", action, Body::Form(form)).await
}
