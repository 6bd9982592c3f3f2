use serde::{Deserialize, Serialize};
use std::path::Path;
use stencil_template::CompileOptions;

pub const DEFAULT_CONFIG_NAME: &str = "stencil.config.json";

/// Stencil configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Options passed to every compilation
    #[serde(flatten)]
    pub compile: CompileOptions,

    /// Pretty-print emitted JSON
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }
}
