use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub auth: AuthRoutesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Path prefix of every endpoint, e.g. "/api"
    pub base_path: String,
    /// When set, the API is served from this port on the page's host
    pub port: Option<u16>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
            port: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub page_size: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthRoutesConfig {
    pub login_route: String,
    pub home_route: String,
}

impl Default for AuthRoutesConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            home_route: "/dashboard".to_string(),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[lists]
page_size = 10

[auth]
login_route = "/login"
home_route = "/dashboard"
"#;

/// Parse a TOML configuration document
pub fn parse(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    let mut config: ClientConfig = toml::from_str(contents)?;
    if config.lists.page_size == 0 {
        config.lists.page_size = DEFAULT_PAGE_SIZE;
    }
    Ok(config)
}

/// Load the configuration embedded in the binary
pub fn load_embedded() -> Result<ClientConfig, toml::de::Error> {
    parse(DEFAULT_CONFIG)
}

impl ClientConfig {
    /// Origin and base path for API requests.
    ///
    /// Same-origin ("/api") unless a port is configured, in which case the
    /// page's protocol and hostname are combined with it.
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        let base = self.api.base_path.trim_end_matches('/');
        match self.api.port {
            Some(port) => format!("{}//{}:{}{}", protocol, hostname, port, base),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_embedded().unwrap();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.api.port, None);
        assert_eq!(config.lists.page_size, 10);
        assert_eq!(config.auth.login_route, "/login");
    }

    #[test]
    fn test_api_base_same_origin() {
        let config = load_embedded().unwrap();
        assert_eq!(config.api_base("https:", "sales.example.com"), "/api");
    }

    #[test]
    fn test_api_base_with_port() {
        let config = parse("[api]\nbase_path = \"/api/\"\nport = 8080\n").unwrap();
        assert_eq!(config.api_base("http:", "localhost"), "http://localhost:8080/api");
        assert_eq!(config.lists.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let config = parse("[api]\nbase_path = \"/api\"\n[lists]\npage_size = 0\n").unwrap();
        assert_eq!(config.lists.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_default_matches_embedded() {
        assert_eq!(ClientConfig::default(), load_embedded().unwrap());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse("[api\nbase_path=").is_err());
    }
}
