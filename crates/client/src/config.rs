//! Runner configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    pub ticks: usize,
    pub tick_seconds: f32,
}

impl SimConfig {
    pub const DEFAULT_SCENARIO: &'static str = "patrol";
    pub const DEFAULT_TICKS: usize = 240;
    pub const DEFAULT_TICK_SECONDS: f32 = 0.05;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NPC_DATA_DIR` - Content directory (default: the bundled `npc-content` data)
    /// - `NPC_SCENARIO` - Scenario name under `scenarios/` (default: patrol)
    /// - `NPC_TICKS` - Number of ticks to run (default: 240)
    /// - `NPC_TICK_SECONDS` - Seconds per tick (default: 0.05)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("NPC_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(scenario) = env::var("NPC_SCENARIO") {
            config.scenario = scenario;
        }
        if let Some(ticks) = read_env::<usize>("NPC_TICKS") {
            config.ticks = ticks;
        }
        if let Some(seconds) = read_env::<f32>("NPC_TICK_SECONDS") {
            if seconds.is_finite() && seconds > 0.0 {
                config.tick_seconds = seconds;
            } else {
                tracing::warn!(
                    "Ignoring NPC_TICK_SECONDS={}, using {}",
                    seconds,
                    config.tick_seconds
                );
            }
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: npc_content::ContentFactory::bundled().data_dir().to_path_buf(),
            scenario: Self::DEFAULT_SCENARIO.to_owned(),
            ticks: Self::DEFAULT_TICKS,
            tick_seconds: Self::DEFAULT_TICK_SECONDS,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
