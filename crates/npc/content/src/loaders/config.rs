//! Scheduler configuration loader.

use std::path::Path;

use npc_core::SchedulerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for scheduler tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`SchedulerConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SchedulerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SchedulerConfig> {
        let config: SchedulerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.sentinel_name == config.hazard_name {
            anyhow::bail!(
                "sentinel_name and hazard_name must differ (both are \"{}\")",
                config.sentinel_name
            );
        }
        if config.danger_threshold <= 0.0 {
            anyhow::bail!(
                "danger_threshold must be positive, got {}",
                config.danger_threshold
            );
        }
        Ok(config)
    }
}
