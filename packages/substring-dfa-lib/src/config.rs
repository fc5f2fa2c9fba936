use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::language::matcher::MatchPolicy;

/// Run configuration, loaded from a TOML file. Every field has a default so
/// partial files and a missing file both work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub policy: MatchPolicy,
    pub log_level: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            policy: MatchPolicy::default(),
            log_level: None,
        }
    }
}

impl RunConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    pub fn from_optional_file(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
