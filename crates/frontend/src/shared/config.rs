//! Client configuration: embedded TOML default, optionally replaced by a
//! TOML document stored in localStorage.

use contracts::shared::config::{self, ClientConfig};
use once_cell::sync::Lazy;

/// localStorage key holding a TOML override
pub const CONFIG_OVERRIDE_KEY: &str = "sales_dashboard_config";

static CONFIG: Lazy<ClientConfig> = Lazy::new(load);

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_OVERRIDE_KEY)
        .ok()?
}

fn load() -> ClientConfig {
    let embedded = config::load_embedded().unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid: {}", e);
        ClientConfig::default()
    });

    match read_override() {
        Some(text) => match config::parse(&text) {
            Ok(cfg) => {
                log::debug!("Using configuration override from localStorage");
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring invalid configuration override: {}", e);
                embedded
            }
        },
        None => embedded,
    }
}

/// Configuration loaded once per page load
pub fn client_config() -> &'static ClientConfig {
    &CONFIG
}
