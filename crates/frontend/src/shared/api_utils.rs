//! API URL helpers

use super::config::client_config;

/// Base URL for API requests: same-origin base path, or the page's host on
/// the configured port
pub fn api_base() -> String {
    let config = client_config();
    let Some(window) = web_sys::window() else {
        return config.api.base_path.clone();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config.api_base(&protocol, &hostname)
}
