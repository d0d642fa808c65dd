//! Process-wide client configuration.
//!
//! Built once in `main` and handed to the client by reference. Nothing
//! reads the environment after startup.

use crate::consts::{ASK_PATH, BASE_URL_ENV, DEFAULT_BASE_URL, HEALTH_PATH};

/// Where the agent lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Use the given base URL. A trailing `/` is dropped so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Resolve from an explicit override, then `AGENT_API_URL`, then the default.
    pub fn resolve(override_url: Option<&str>) -> Self {
        Self::resolve_with(override_url, |key| std::env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with an injectable env lookup.
    pub fn resolve_with(
        override_url: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
            return Self::new(url);
        }
        match lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url, ASK_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.ask_url(), "http://localhost:8000/api/ask");
    }

    #[test]
    fn falls_back_to_default_without_env() {
        let config = ClientConfig::resolve_with(None, no_env);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn env_override_wins_over_default() {
        let config = ClientConfig::resolve_with(None, |key| {
            assert_eq!(key, "AGENT_API_URL");
            Some("https://agent.internal:9000".to_string())
        });
        assert_eq!(config.base_url(), "https://agent.internal:9000");
    }

    #[test]
    fn explicit_override_wins_over_env() {
        let config = ClientConfig::resolve_with(Some("http://cli:1"), |_| {
            Some("http://env:2".to_string())
        });
        assert_eq!(config.base_url(), "http://cli:1");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ClientConfig::resolve_with(Some("   "), |_| Some(String::new()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://host:8000/");
        assert_eq!(config.ask_url(), "http://host:8000/api/ask");
        assert_eq!(config.health_url(), "http://host:8000/");
    }
}
