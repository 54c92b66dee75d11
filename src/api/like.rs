//! Like Endpoint

use crate::config::InteractionConfig;
use crate::models::LikeResponse;

use super::{send, ApiError, Body};

/// Toggle the current user's like on a project.
pub async fn toggle_like(config: &InteractionConfig, project_id: &str) -> Result<LikeResponse, ApiError> {
    send(config, "POST", &config.like_url(project_id), Body::EmptyJson).await
}
