// Settings service
// Loads and stores the month grid configuration as TOML

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::settings::MonthGridConfig;

pub struct SettingsService;

impl SettingsService {
    /// Read and validate the config at `path`
    pub fn load(path: &Path) -> Result<MonthGridConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid config {}", path.display()))?;
        let config = MonthGridConfig::from_toml(&content)
            .with_context(|| format!("Failed to load grid config {}", path.display()))?;
        log::debug!("Loaded grid config from {}", path.display());
        Ok(config)
    }

    /// Like [`SettingsService::load`], falling back to defaults when the file
    /// does not exist. Invalid files are still an error.
    pub fn load_or_default(path: &Path) -> Result<MonthGridConfig> {
        if !path.exists() {
            log::info!("No grid config at {}, using defaults", path.display());
            return Ok(MonthGridConfig::default());
        }
        Self::load(path)
    }

    pub fn save(config: &MonthGridConfig, path: &Path) -> Result<()> {
        config
            .validate()
            .context("Refusing to save invalid grid config")?;
        let content = config.to_toml().context("Failed to serialize grid config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write grid config {}", path.display()))?;
        Ok(())
    }
}
