//! Host configuration loaded from the environment.

use std::path::PathBuf;

use anyhow::{Context, bail};

pub const RULES_ENABLED_ENV: &str = "STOCKGATE_RULES_ENABLED";
pub const SEED_PATH_ENV: &str = "STOCKGATE_SEED_PATH";
pub const LOG_FILTER_ENV: &str = "STOCKGATE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Initial value of the feature flag when settings are provisioned.
    pub rules_enabled_by_default: bool,
    /// JSON file with rules, items and settings to load at startup.
    pub seed_path: Option<PathBuf>,
    /// Default tracing directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            rules_enabled_by_default: true,
            seed_path: None,
            log_filter: "info".to_owned(),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable source (tests pass a map instead of the process env).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = var(RULES_ENABLED_ENV) {
            config.rules_enabled_by_default =
                parse_flag(&raw).with_context(|| format!("invalid {RULES_ENABLED_ENV}"))?;
        }

        config.seed_path = var(SEED_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(filter) = var(LOG_FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
