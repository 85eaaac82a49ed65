use std::path::PathBuf;

// ─── Config ────────────────────────────────────────────────────────────────

/// Server configuration, resolved once at startup and handed to the
/// application constructor.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Directory the static file handler serves from.
    pub static_root: PathBuf,

    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_root: PathBuf::from("."),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the chat-completion API being proxied.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_root, PathBuf::from("."));
        assert_eq!(config.upstream.base_url, "https://api.anthropic.com");
        assert_eq!(config.upstream.request_timeout_secs, 30);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Config::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
