//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};

/// Configuration for the Veritier service.
///
/// Can be loaded from a TOML file or built programmatically (e.g. for
/// tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the HTTP API listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL of the upstream accounts service.
    #[serde(default = "default_accounts_url")]
    pub accounts_url: String,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    7090
}

fn default_accounts_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            accounts_url: default_accounts_url(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServiceConfig::default();
        assert_eq!(config.listen_port, 7090);
        assert_eq!(config.accounts_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: ServiceConfig = toml::from_str("listen_port = 9000").unwrap();
        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.accounts_url, default_accounts_url());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn full_toml_overrides_every_field() {
        let config: ServiceConfig = toml::from_str(
            r#"
            listen_port = 8080
            accounts_url = "http://accounts.internal:9000"
            request_timeout_secs = 3
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.accounts_url, "http://accounts.internal:9000");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.log_level, "debug");
    }
}
