use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::DistError;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DefaultConfig {
    pub build_root: Option<PathBuf>,

    pub output_root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DistError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&self, args: &mut crate::cli::Args) {
        if args.build_root.is_none() {
            args.build_root = self.default.build_root.clone();
        }

        if args.output_root.is_none() {
            args.output_root = self.default.output_root.clone();
        }
    }
}
