use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration, loaded from `~/.config/stringsync/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Cache root for downloaded repositories. Defaults to
    /// `<data-dir>/stringsync/repos`.
    pub cache_dir: Option<PathBuf>,
    /// Branch raw files are downloaded from. Defaults to `master`.
    pub branch: Option<String>,
}

impl AppConfig {
    /// Resolve the cache root, creating it if needed.
    pub fn cache_root(&self) -> Result<PathBuf> {
        let root = match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .context("could not determine data directory")?
                .join("stringsync")
                .join("repos"),
        };
        std::fs::create_dir_all(&root)
            .with_context(|| format!("failed to create cache directory: {}", root.display()))?;
        Ok(root)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stringsync").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using defaults",
            path.display()
        );
    }

    AppConfig::default()
}
