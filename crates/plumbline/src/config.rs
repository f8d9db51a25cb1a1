// File: src/config.rs
// Purpose: Configuration parsing from plumbline.toml

use anyhow::{Context, Result};
use plumbline_router::PatternCompiler;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "plumbline.toml";

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Entry method invoked on handler objects (default: "handle")
    #[serde(default = "default_method")]
    pub method: String,

    /// Named stages, in order (e.g. `["auth", "throttle:60,1"]`)
    #[serde(default)]
    pub stages: Vec<String>,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutingConfig {
    /// Extra placeholder type aliases, tag to regex fragment
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_method() -> String {
    crate::pipeline::DEFAULT_METHOD.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            stages: Vec::new(),
        }
    }
}

impl RoutingConfig {
    /// Pattern compiler with the built-in aliases plus the configured ones
    pub fn compiler(&self) -> PatternCompiler {
        self.aliases
            .iter()
            .fold(PatternCompiler::new(), |compiler, (tag, fragment)| {
                compiler.with_alias(tag, fragment)
            })
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `plumbline.toml` from the current directory
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
