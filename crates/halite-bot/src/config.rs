//! Bot configuration, loaded from an optional YAML file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use halite_planner::PlannerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Name sent to the harness during the handshake.
    #[serde(default = "default_name")]
    pub name: String,

    /// Planner tunables; omitted keys keep their defaults.
    pub planner: PlannerConfig,

    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log to this file instead of stderr. Stdout belongs to the harness.
    pub file: Option<PathBuf>,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

fn default_name() -> String {
    "halite-frontier".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            planner: PlannerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
            json: false,
        }
    }
}

impl BotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when no path is given or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
