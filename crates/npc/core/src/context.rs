//! Per-level shared state.
//!
//! [`LevelContext`] replaces the game-wide singletons the scheduler would
//! otherwise reach into: it carries the game phase, the in-danger latch, the
//! actor-death flag and an outbox of [`SchedulerEvent`]s for puzzle logic.
//! Create one at level start and drop it at level end.

use crate::action::{ActionId, ActionKind};
use crate::actor::ActorBinding;

/// Coarse game state. Scheduling only happens while `Playing`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    Menu,
}

/// Notifications raised by the scheduler and its actions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerEvent {
    Activated {
        id: ActionId,
        name: String,
    },
    /// A paused, unfinished action went back into the queue.
    Requeued {
        id: ActionId,
        name: String,
    },
    /// Evicted after waiting longer than its discard limit.
    Discarded {
        id: ActionId,
        name: String,
    },
    /// Removed by name.
    Removed {
        id: ActionId,
        name: String,
    },
    /// Raised exactly once per action.
    Completed {
        id: ActionId,
        name: String,
        kind: ActionKind,
    },
    ActorDied,
}

/// State shared between the scheduler, its actions and puzzle logic.
#[derive(Clone, Debug, Default)]
pub struct LevelContext {
    phase: GamePhase,
    in_danger: bool,
    actor_dead: bool,
    events: Vec<SchedulerEvent>,
}

impl LevelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True while a hazard action has been admitted and not yet resolved.
    pub fn in_danger(&self) -> bool {
        self.in_danger
    }

    pub fn set_in_danger(&mut self, in_danger: bool) {
        self.in_danger = in_danger;
    }

    pub fn is_actor_dead(&self) -> bool {
        self.actor_dead
    }

    /// Kills the actor. Only the first call has any effect.
    ///
    /// Returns true if this call caused the death.
    pub fn report_death(&mut self, actor: &mut dyn ActorBinding) -> bool {
        if self.actor_dead {
            return false;
        }
        self.actor_dead = true;
        tracing::error!("Actor died: the player stayed too close for too long");
        actor.report_death();
        self.events.push(SchedulerEvent::ActorDied);
        true
    }

    pub(crate) fn push_event(&mut self, event: SchedulerEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first.
    pub fn events(&self) -> &[SchedulerEvent] {
        &self.events
    }

    /// Hands pending events to the caller and clears the outbox.
    pub fn drain_events(&mut self) -> Vec<SchedulerEvent> {
        core::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::RecordingActor;

    #[test]
    fn death_is_reported_once() {
        let mut level = LevelContext::new();
        let mut actor = RecordingActor::default();

        assert!(level.report_death(&mut actor));
        assert!(!level.report_death(&mut actor));
        assert_eq!(actor.deaths, 1);
        assert_eq!(level.drain_events(), vec![SchedulerEvent::ActorDied]);
        assert!(level.events().is_empty());
    }

    #[test]
    fn starts_playing() {
        let mut level = LevelContext::new();
        assert!(level.is_playing());
        level.set_phase(GamePhase::Paused);
        assert!(!level.is_playing());
        assert_eq!(level.phase().to_string(), "paused");
    }
}
