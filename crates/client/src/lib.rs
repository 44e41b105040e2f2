//! Headless scenario runner for the action scheduler.
//!
//! The binary loads scheduler tuning and a scenario from a content directory,
//! plays it back through [`npc_runtime::Session`], and logs every scheduler
//! event as it happens.
//!
//! # Environment
//!
//! See [`SimConfig::from_env`].

pub mod config;

pub use config::SimConfig;

use npc_core::SchedulerEvent;

/// One-line, human-readable rendering of an event.
pub fn describe(event: &SchedulerEvent) -> String {
    match event {
        SchedulerEvent::Activated { id, name } => format!("{name} ({id}) is now running"),
        SchedulerEvent::Requeued { id, name } => format!("{name} ({id}) paused and requeued"),
        SchedulerEvent::Discarded { id, name } => {
            format!("{name} ({id}) waited too long and was dropped")
        }
        SchedulerEvent::Removed { id, name } => format!("{name} ({id}) was removed"),
        SchedulerEvent::Completed { id, name, kind } => {
            format!("{name} ({id}, {kind}) completed")
        }
        SchedulerEvent::ActorDied => "the actor died".to_owned(),
    }
}
