//! Errors surfaced while running a session.

use npc_core::{ActionError, SchedulerError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("scenario command at {at}s failed")]
    Command {
        at: f32,
        #[source]
        source: SchedulerError,
    },

    #[error("invalid action in scenario")]
    Action(#[from] ActionError),

    #[error("tick length must be positive and finite, got {0}")]
    InvalidTick(f32),
}
