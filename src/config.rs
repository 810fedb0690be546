//! Runtime configuration.
//!
//! Everything is read once from the environment at startup; builder methods
//! exist for tests and for pointing the client at a local stack.

/// Default catalog API base, matching a locally running backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Default identity provider base.
pub const DEFAULT_IDENTITY_BASE: &str = "https://identity.lookbook.app";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog backend base URL (no trailing slash).
    pub api_base: String,
    /// Identity provider base URL (no trailing slash).
    pub identity_base: String,
    /// API key sent to the identity provider on every call.
    pub identity_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            identity_base: DEFAULT_IDENTITY_BASE.to_string(),
            identity_api_key: String::new(),
        }
    }
}

impl Config {
    /// Build a config from `LOOKBOOK_API_BASE`, `LOOKBOOK_IDENTITY_BASE`
    /// and `LOOKBOOK_IDENTITY_KEY`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("LOOKBOOK_API_BASE") {
            config.api_base = normalize_base(&base);
        }
        if let Ok(base) = std::env::var("LOOKBOOK_IDENTITY_BASE") {
            config.identity_base = normalize_base(&base);
        }
        if let Ok(key) = std::env::var("LOOKBOOK_IDENTITY_KEY") {
            config.identity_api_key = key;
        }
        config
    }

    /// Override the catalog API base.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = normalize_base(&base.into());
        self
    }

    /// Override the identity provider base.
    pub fn with_identity_base(mut self, base: impl Into<String>) -> Self {
        self.identity_base = normalize_base(&base.into());
        self
    }

    /// Override the identity API key.
    pub fn with_identity_api_key(mut self, key: impl Into<String>) -> Self {
        self.identity_api_key = key.into();
        self
    }
}

fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://localhost:5000/api");
    }

    #[test]
    fn builder_overrides_and_trims_trailing_slash() {
        let config = Config::default()
            .with_api_base("http://127.0.0.1:9000/api/")
            .with_identity_base("http://127.0.0.1:9001/")
            .with_identity_api_key("k");
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api");
        assert_eq!(config.identity_base, "http://127.0.0.1:9001");
        assert_eq!(config.identity_api_key, "k");
    }
}
