//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which provider implementations back the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderMode {
    /// Hosted models over HTTP.
    #[default]
    Remote,
    /// Deterministic in-process providers; no network access.
    Mock,
}

impl FromStr for ProviderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "mock" => Ok(Self::Mock),
            other => Err(ConfigError::UnknownProviderMode(other.to_string())),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Provider implementations to use.
    pub providers: ProviderMode,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADAPT_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `ADAPT_PROVIDERS` | `remote` or `mock` | `remote` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ADAPT_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let providers = match env::var("ADAPT_PROVIDERS") {
            Ok(mode) => mode.parse()?,
            Err(_) => ProviderMode::default(),
        };

        Ok(Self { addr, providers })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ADAPT_ADDR format")]
    InvalidAddr,

    #[error("Unknown ADAPT_PROVIDERS value: {0} (expected remote or mock)")]
    UnknownProviderMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_mode_parse() {
        assert_eq!("remote".parse::<ProviderMode>().unwrap(), ProviderMode::Remote);
        assert_eq!(" Mock ".parse::<ProviderMode>().unwrap(), ProviderMode::Mock);
        assert!(matches!(
            "cloud".parse::<ProviderMode>(),
            Err(ConfigError::UnknownProviderMode(_))
        ));
    }

    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::remove_var("ADAPT_ADDR");
        std::env::remove_var("ADAPT_PROVIDERS");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.providers, ProviderMode::Remote);

        std::env::set_var("ADAPT_ADDR", "0.0.0.0:9000");
        std::env::set_var("ADAPT_PROVIDERS", "mock");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.providers, ProviderMode::Mock);

        std::env::set_var("ADAPT_ADDR", "not-an-addr");
        assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidAddr)));

        std::env::remove_var("ADAPT_ADDR");
        std::env::remove_var("ADAPT_PROVIDERS");
    }
}
