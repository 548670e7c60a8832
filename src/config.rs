use std::env;
use std::fmt;
use std::str::FromStr;

use log::warn;

pub const DEFAULT_HTTP_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_API_PORT: u16 = 63100;
pub const DEFAULT_HTTP_API_TIMEOUT_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpScheme {
    Http,
    Https,
}

impl fmt::Display for HttpScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpScheme::Http => write!(f, "http"),
            HttpScheme::Https => write!(f, "https"),
        }
    }
}

/// Backend API address, resolved once at client construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub scheme: HttpScheme,
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: HttpScheme::Http,
            host: DEFAULT_HTTP_API_HOST.to_string(),
            port: DEFAULT_HTTP_API_PORT,
            timeout_ms: DEFAULT_HTTP_API_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Resolve the backend address from the environment (`HTTP_API_HOST`,
    /// `HTTP_API_PORT`, `HTTP_API_USE_HTTPS`, `HTTP_API_TIMEOUT_MS`),
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let scheme = if env::var("HTTP_API_USE_HTTPS").is_ok_and(|v| v == "true") {
            HttpScheme::Https
        } else {
            HttpScheme::Http
        };

        let host = env::var("HTTP_API_HOST")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HTTP_API_HOST.to_string());

        Self {
            scheme,
            host,
            port: parse_var("HTTP_API_PORT", DEFAULT_HTTP_API_PORT),
            timeout_ms: parse_var("HTTP_API_TIMEOUT_MS", DEFAULT_HTTP_API_TIMEOUT_MS),
        }
    }
}

fn parse_var<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}", name, raw);
            default
        }),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_renders_lowercase() {
        assert_eq!(HttpScheme::Http.to_string(), "http");
        assert_eq!(HttpScheme::Https.to_string(), "https");
    }

    #[test]
    fn default_config_matches_backend_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.scheme, HttpScheme::Http);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 63100);
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn env_overrides_and_fallbacks() {
        env::set_var("HTTP_API_HOST", "api.internal");
        env::set_var("HTTP_API_PORT", "8080");
        env::set_var("HTTP_API_USE_HTTPS", "true");
        env::set_var("HTTP_API_TIMEOUT_MS", "not-a-number");

        let config = ApiConfig::from_env();
        assert_eq!(config.scheme, HttpScheme::Https);
        assert_eq!(config.host, "api.internal");
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout_ms, DEFAULT_HTTP_API_TIMEOUT_MS);

        env::remove_var("HTTP_API_HOST");
        env::remove_var("HTTP_API_PORT");
        env::remove_var("HTTP_API_USE_HTTPS");
        env::remove_var("HTTP_API_TIMEOUT_MS");
    }
}
