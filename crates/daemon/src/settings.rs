//! Daemon configuration
//!
//! Defaults layered under `QUEUEWISE_*` environment variables.

use anyhow::{Context, Result};
use queuewise_core::application::constants::DEFAULT_MAX_ARRIVAL_MINUTES;
use serde::Deserialize;

const ENV_PREFIX: &str = "QUEUEWISE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub rpc_host: String,
    pub rpc_port: u16,

    /// Reject unknown ids and out-of-range arrival offsets
    pub strict: bool,
    pub max_arrival_minutes: u32,

    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Start queues with mock tickets
    pub mock_tickets: bool,

    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("rpc_host", "127.0.0.1")?
            .set_default("rpc_port", 9527_i64)?
            .set_default("strict", false)?
            .set_default("max_arrival_minutes", i64::from(DEFAULT_MAX_ARRIVAL_MINUTES))?
            .set_default("mock_tickets", true)?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::from_source(env(&[])).unwrap();

        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 9527);
        assert!(!config.strict);
        assert_eq!(config.max_arrival_minutes, 120);
        assert!(config.seed.is_none());
        assert!(config.mock_tickets);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_environment_overrides() {
        let config = DaemonConfig::from_source(env(&[
            ("QUEUEWISE_RPC_PORT", "9600"),
            ("QUEUEWISE_STRICT", "true"),
            ("QUEUEWISE_SEED", "42"),
            ("QUEUEWISE_MOCK_TICKETS", "false"),
            ("QUEUEWISE_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.rpc_port, 9600);
        assert!(config.strict);
        assert_eq!(config.seed, Some(42));
        assert!(!config.mock_tickets);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
