//! Content factory for loading scheduler content from a data directory.

use std::path::{Path, PathBuf};

use npc_core::SchedulerConfig;

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};
use crate::script::ScenarioSpec;

/// Content factory that loads all scheduler content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenarios/
///     ├── patrol.ron
///     └── intruder.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load scheduler configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<SchedulerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(
                "No config at {}, using scheduler defaults",
                path.display()
            );
            return Ok(SchedulerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<ScenarioSpec> {
        let path = self.scenario_dir().join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Names of all scenarios in `scenarios/`, sorted.
    pub fn scenario_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.scenario_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn scenario_dir(&self) -> PathBuf {
        self.data_dir.join("scenarios")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), SchedulerConfig::default());
    }

    #[test]
    fn lists_and_loads_scenarios_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let scenarios = dir.path().join("scenarios");
        std::fs::create_dir(&scenarios).unwrap();
        std::fs::write(scenarios.join("b.ron"), "ScenarioSpec(name: \"b\")").unwrap();
        std::fs::write(scenarios.join("a.ron"), "ScenarioSpec(name: \"a\")").unwrap();
        std::fs::write(scenarios.join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("config.toml"), "thought_step = 0.1\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.scenario_names().unwrap(), vec!["a", "b"]);
        assert_eq!(factory.load_scenario("b").unwrap().name, "b");
        assert_eq!(factory.load_config().unwrap().thought_step, 0.1);
        assert!(factory.load_scenario("missing").is_err());
    }
}
