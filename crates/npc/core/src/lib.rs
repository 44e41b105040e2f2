//! Priority-driven behavior scheduling for a single non-player character.
//!
//! `npc-core` owns the action model and the scheduler that decides which
//! action the actor runs each tick. Everything the actor physically does
//! (navigation, visuals, dying) is reached through the [`ActorBinding`] trait,
//! and the hazard signal arrives through [`HazardOracle`], so the crate stays
//! free of engine dependencies.
//!
//! # Tick order
//!
//! [`ActionScheduler::tick`] runs four phases in a fixed order:
//! hazard admission, preemption, discard sweep, execution.
pub mod action;
pub mod actor;
pub mod config;
pub mod context;
pub mod error;
pub mod scheduler;
pub mod thought;

#[cfg(test)]
mod fixtures;

pub use action::{
    Action, ActionCx, ActionFlags, ActionId, ActionKind, Animation, Behavior, DiscardTimer, MoveTo,
    MoveToPhase, NearPlayer, PathPatrol, PathPhase, Point3, Priority, StandPhase, StandStill,
    Step, ThoughtIcon, Waypoint,
};
pub use actor::{ActorBinding, HazardOracle};
pub use config::SchedulerConfig;
pub use context::{GamePhase, LevelContext, SchedulerEvent};
pub use error::{ActionError, ErrorSeverity, SchedulerError, SchedulerFault};
pub use scheduler::{ActionQueue, ActionScheduler, TickReport};
pub use thought::{BubbleChange, ThoughtBubble};
