//! Data-driven scheduler content.
//!
//! This crate reads the files a level designer edits:
//! - Scheduler tuning (TOML)
//! - Scenarios: timed action commands plus a scripted player track (RON)
//!
//! Everything here decodes into `npc-core` types; nothing is kept at runtime.

pub mod script;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use script::{ActionSpec, Command, PlayerSample, ScenarioSpec, TimedCommand};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ScenarioLoader};
