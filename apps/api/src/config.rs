//! Configuration loaded from environment variables
//!
//! # Environment Variables
//!
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_PORT`: Port to bind to (default: 5000)
//! - `JWT_SECRET`: Secret key for JWT signing (default: development key, with a warning)
//! - `OPENAI_API_KEY`: Completion API key (required)
//! - `OPENAI_BASE_URL`: Completion endpoint (default: https://api.openai.com/v1)
//! - `OPENAI_MODEL`: Model name (default: gpt-4o)
//! - `SEARCH_API_KEY`: Brave Search key; web search is disabled when unset
//! - `SEARCH_BASE_URL`: Search endpoint (default: https://api.search.brave.com)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD`: Admin account created at startup when both are set
//! - `RUST_LOG`: Log filter

use anyhow::Context;

pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.search.brave.com";

/// Sampling temperature sent with every completion request
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Output length cap sent with every completion request
pub const COMPLETION_MAX_TOKENS: u32 = 500;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub jwt_secret: String,
    pub completion: CompletionConfig,
    pub search: SearchConfig,
    /// Admin account to provision at startup
    pub admin: Option<AdminAccount>,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Completion backend configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Web search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// None disables web search
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// A `.env` file is read first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is missing or `API_PORT` is not a port number.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("API_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("API_PORT is not a valid port: {}", raw))?,
            None => 5000,
        };

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let api_key = get("OPENAI_API_KEY")
            .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY environment variable is required"))?;

        let admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminAccount { username, password }),
            (None, None) => None,
            _ => anyhow::bail!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            api: ApiConfig { host, port },
            jwt_secret,
            completion: CompletionConfig {
                api_key,
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                temperature: COMPLETION_TEMPERATURE,
                max_tokens: COMPLETION_MAX_TOKENS,
            },
            search: SearchConfig {
                api_key: get("SEARCH_API_KEY"),
                base_url: get("SEARCH_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string()),
            },
            admin,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.completion.temperature, 0.7);
        assert_eq!(config.completion.max_tokens, 500);
        assert!(config.search.api_key.is_none());
        assert!(config.admin.is_none());
    }

    #[test]
    fn api_key_is_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let err = load(&[("OPENAI_API_KEY", "  ")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "8080"),
            ("JWT_SECRET", "s3cret"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("SEARCH_API_KEY", "brave"),
            ("ADMIN_USERNAME", "root"),
            ("ADMIN_PASSWORD", "hunter22"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.search.api_key.as_deref(), Some("brave"));
        let admin = config.admin.unwrap();
        assert_eq!(admin.username, "root");
        assert_eq!(admin.password, "hunter22");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = load(&[("OPENAI_API_KEY", "sk"), ("API_PORT", "http")]);
        assert!(result.is_err());
    }

    #[test]
    fn half_configured_admin_is_rejected() {
        let result = load(&[("OPENAI_API_KEY", "sk"), ("ADMIN_USERNAME", "root")]);
        assert!(result.is_err());
    }
}
