//! Interaction Configuration
//!
//! Endpoints, storage keys and timings. Every field has a default; a page can
//! override any subset with a JSON block:
//!
//! ```html
//! <script type="application/json" id="interactions-config">
//!   { "toast_lifetime_ms": 8000, "log_level": "debug" }
//! </script>
//! ```

use serde::Deserialize;

/// Id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "interactions-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Like endpoint; `{id}` is replaced with the project id
    pub like_endpoint: String,
    pub add_network_endpoint: String,
    /// Remove endpoint; `{id}` is replaced with the network id
    pub remove_network_endpoint: String,
    pub login_path: String,
    pub csrf_meta_name: String,
    pub csrf_header: String,
    /// localStorage key of the "don't ask again" flag
    pub skip_confirm_key: String,
    pub comment_max_length: usize,
    pub counter_warning_below: i64,
    pub counter_danger_below: i64,
    pub toast_lifetime_ms: u32,
    pub pulse_duration_ms: u32,
    pub navbar_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub anchor_offset: f64,
    pub comment_focus_delay_ms: u32,
    pub flash_hide_ms: u32,
    pub search_debounce_ms: u32,
    pub log_level: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            like_endpoint: "/project/{id}/like".to_string(),
            add_network_endpoint: "/add_social_network".to_string(),
            remove_network_endpoint: "/remove_social_network/{id}".to_string(),
            login_path: "/login".to_string(),
            csrf_meta_name: "csrf-token".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            skip_confirm_key: "skipSocialNetworkConfirmation".to_string(),
            comment_max_length: 500,
            counter_warning_below: 50,
            counter_danger_below: 20,
            toast_lifetime_ms: 5000,
            pulse_duration_ms: 1000,
            navbar_scroll_threshold: 50.0,
            back_to_top_threshold: 300.0,
            anchor_offset: 100.0,
            comment_focus_delay_ms: 500,
            flash_hide_ms: 5000,
            search_debounce_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl InteractionConfig {
    /// Parse an override block. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the page's override block, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not installed yet; go straight to the console.
                web_sys::console::warn_1(
                    &format!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e).into(),
                );
                Self::default()
            }
        }
    }

    pub fn like_url(&self, project_id: &str) -> String {
        self.like_endpoint.replace("{id}", project_id)
    }

    pub fn remove_network_url(&self, network_id: u32) -> String {
        self.remove_network_endpoint
            .replace("{id}", &network_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_server_routes() {
        let config = InteractionConfig::default();
        assert_eq!(config.like_url("42"), "/project/42/like");
        assert_eq!(config.remove_network_url(7), "/remove_social_network/7");
        assert_eq!(config.add_network_endpoint, "/add_social_network");
        assert_eq!(config.comment_max_length, 500);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            InteractionConfig::from_json(r#"{"toast_lifetime_ms": 8000, "log_level": "debug"}"#)
                .unwrap();
        assert_eq!(config.toast_lifetime_ms, 8000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.skip_confirm_key, "skipSocialNetworkConfirmation");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(InteractionConfig::from_json("{ not json").is_err());
        assert!(InteractionConfig::from_json(r#"{"comment_max_length": "lots"}"#).is_err());
    }
}
