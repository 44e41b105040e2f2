//! Error infrastructure for npc-core.
//!
//! Construction errors ([`ActionError`]) and scheduler errors
//! ([`SchedulerError`]) share the [`SchedulerFault`] trait so callers can
//! classify them uniformly before logging or surfacing them.
//!
//! Transient conditions (the hazard flipping, the actor not having arrived
//! yet) are state-machine transitions, never errors. Actor death is a
//! deliberate side effect routed through [`crate::LevelContext::report_death`].

use crate::action::ActionId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with different input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: scheduler bookkeeping went out of sync
/// - **Fatal**: a structural invariant is broken and ticking cannot make progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all npc-core errors.
pub trait SchedulerFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while constructing an action.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// A path action needs at least one waypoint.
    #[error("path action '{name}' has no waypoints")]
    EmptyPath { name: String },
}

impl SchedulerFault for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::EmptyPath { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::EmptyPath { .. } => "ACTION_EMPTY_PATH",
        }
    }
}

/// Errors surfaced by the action scheduler.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    /// The queue lost its sentinel. This is a programming error.
    #[error("action queue is empty; the default stand-still action must always be queued")]
    EmptyQueue,

    /// The active action refers to a queue entry that no longer exists.
    #[error("active action {0} is missing from the queue")]
    DanglingActive(ActionId),

    /// The name is reserved for the sentinel action.
    #[error("action name '{0}' is reserved")]
    ReservedName(String),

    /// Completed actions are never re-enqueued.
    #[error("action '{0}' is already completed")]
    AlreadyCompleted(String),

    /// Priorities must be numbers that rank ahead of the default action.
    #[error("action '{name}' must have a numeric priority below the default action's")]
    InvalidPriority { name: String },

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl SchedulerFault for SchedulerError {
    fn severity(&self) -> ErrorSeverity {
        use SchedulerError::*;
        match self {
            EmptyQueue => ErrorSeverity::Fatal,
            DanglingActive(_) => ErrorSeverity::Internal,
            ReservedName(_) | AlreadyCompleted(_) | InvalidPriority { .. } => {
                ErrorSeverity::Validation
            }
            Action(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SchedulerError::*;
        match self {
            EmptyQueue => "SCHEDULER_EMPTY_QUEUE",
            DanglingActive(_) => "SCHEDULER_DANGLING_ACTIVE",
            ReservedName(_) => "SCHEDULER_RESERVED_NAME",
            AlreadyCompleted(_) => "SCHEDULER_ALREADY_COMPLETED",
            InvalidPriority { .. } => "SCHEDULER_INVALID_PRIORITY",
            Action(error) => error.error_code(),
        }
    }
}
