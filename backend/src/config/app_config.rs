use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use nonzero_ext::nonzero;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

/// Runtime settings, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub admin_token: Option<String>,
    pub rate_limit_per_minute: NonZeroU32,
    /// Key rate limits on `X-Forwarded-For`. Only safe behind a proxy that sets it.
    pub trust_proxy: bool,
    pub sentry_dsn: Option<String>,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?;

        let rate_limit_per_minute = match get("RATE_LIMIT_PER_MINUTE") {
            Some(raw) => raw
                .parse::<NonZeroU32>()
                .context("RATE_LIMIT_PER_MINUTE must be a positive integer")?,
            None => nonzero!(5u32),
        };

        let trust_proxy = match get("TRUST_PROXY").map(|v| v.to_ascii_lowercase()).as_deref() {
            None | Some("0") | Some("false") | Some("no") => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some(other) => anyhow::bail!("TRUST_PROXY must be true or false, got {}", other),
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            frontend_dist: PathBuf::from(
                get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
            ),
            admin_token: get("ADMIN_TOKEN"),
            rate_limit_per_minute,
            trust_proxy,
            sentry_dsn: get("SENTRY_DSN"),
            // for dev its 'development' and for prod anything else
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "database.db");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.rate_limit_per_minute.get(), 5);
        assert!(config.admin_token.is_none());
        assert!(!config.trust_proxy);
        assert!(config.sentry_dsn.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn blank_admin_token_counts_as_unset() {
        let config = config_from(&[("ADMIN_TOKEN", "  ")]).unwrap();
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("RATE_LIMIT_PER_MINUTE", "12"),
            ("ADMIN_TOKEN", "s3cret"),
            ("ENVIRONMENT", "production"),
            ("TRUST_PROXY", "True"),
        ])
        .unwrap();
        assert!(config.trust_proxy);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.rate_limit_per_minute.get(), 12);
        assert_eq!(config.admin_token.as_deref(), Some("s3cret"));
        assert!(!config.is_development());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config_from(&[("RATE_LIMIT_PER_MINUTE", "0")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_PER_MINUTE", "lots")]).is_err());
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("TRUST_PROXY", "maybe")]).is_err());
    }
}
