//! Reference host for the action scheduler.
//!
//! `npc-core` leaves the actor and the hazard signal abstract. This crate
//! supplies simple implementations of both and a [`Session`] that replays a
//! scenario script tick by tick:
//! - [`actor`] moves a point toward its destination at a fixed speed
//! - [`hazard`] reports the player inside a radius around the actor
//! - [`session`] applies timed commands, ticks the scheduler and collects events
pub mod actor;
pub mod error;
pub mod hazard;
pub mod session;

pub use actor::KinematicActor;
pub use error::{Result, RuntimeError};
pub use hazard::ProximityHazard;
pub use session::{Session, StepOutcome};
