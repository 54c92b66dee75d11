//! Social Network Endpoints

use web_sys::FormData;

use crate::config::InteractionConfig;
use crate::models::MessageResponse;

use super::{send, ApiError, Body};

pub async fn add_social_network(
    config: &InteractionConfig,
    form: FormData,
) -> Result<MessageResponse, ApiError> {
    send(config, "POST", &config.add_network_endpoint, Body::Form(form)).await
}

pub async fn remove_social_network(
    config: &InteractionConfig,
    network_id: u32,
) -> Result<MessageResponse, ApiError> {
    send(config, "DELETE", &config.remove_network_url(network_id), Body::Empty).await
}
