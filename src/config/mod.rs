use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::services::validation::ValidationLimits;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationLimits,
    #[serde(default)]
    pub builder: BuilderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Prefix for every backend path, e.g. `/api`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuilderConfig {
    /// First `orderIndex` the backend expects for a page's components.
    #[serde(default = "default_order_index_base")]
    pub order_index_base: u32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            order_index_base: default_order_index_base(),
        }
    }
}

fn default_base_path() -> String {
    "/api".to_string()
}

fn default_order_index_base() -> u32 {
    1
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api.base_path.starts_with('/') {
            anyhow::bail!("api.base_path must start with '/'");
        }
        if self.builder.order_index_base > 1 {
            anyhow::bail!("builder.order_index_base must be 0 or 1");
        }
        let limits = &self.validation;
        if limits.name_min == 0 {
            anyhow::bail!("validation.name_min must be greater than 0");
        }
        if limits.name_min > limits.name_max {
            anyhow::bail!("validation.name_min must not exceed validation.name_max");
        }
        if limits.slug_max == 0 {
            anyhow::bail!("validation.slug_max must be greater than 0");
        }
        Ok(())
    }
}
