//! Scenario loader.
//!
//! A scenario file is a RON [`ScenarioSpec`]: where the actor starts, which
//! actions are queued when, and where the player walks.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::script::{Command, ScenarioSpec};

/// Loader for scenario scripts from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parses and validates a scenario, returning it with commands in time order.
    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let mut scenario: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.actor_speed.is_nan() || scenario.actor_speed <= 0.0 {
            anyhow::bail!("actor_speed must be positive, got {}", scenario.actor_speed);
        }
        for timed in &scenario.commands {
            if !timed.at.is_finite() || timed.at < 0.0 {
                anyhow::bail!("command time {} is not a finite, non-negative value", timed.at);
            }
            if let Command::Enqueue(spec) | Command::EnqueueUnique(spec) = &timed.command {
                spec.build()
                    .map_err(|e| anyhow::anyhow!("action \"{}\": {}", spec.name(), e))?;
            }
        }

        scenario.normalize();
        tracing::debug!(
            "Loaded scenario \"{}\" with {} commands and {} player samples",
            scenario.name,
            scenario.commands.len(),
            scenario.player_track.len()
        );
        Ok(scenario)
    }
}
