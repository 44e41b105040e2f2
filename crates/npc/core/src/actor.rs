//! Capabilities the scheduler consumes from the host game.
//!
//! The scheduler never owns the actor. It commands it through
//! [`ActorBinding`] and asks [`HazardOracle`] whether the player is close
//! enough to be dangerous. Host engines implement both; tests use mocks.

use crate::action::{Point3, ThoughtIcon};

/// Command surface of the controlled actor.
pub trait ActorBinding {
    /// Sends the actor toward `point`.
    fn set_destination(&mut self, point: Point3);

    /// Drops any pending navigation target; the actor stands fast.
    fn clear_destination(&mut self);

    /// Returns true while a path is still being computed.
    fn is_move_pending(&self) -> bool;

    /// Distance left to the current destination.
    fn remaining_distance(&self) -> f32;

    /// Enables or disables deceleration when approaching the destination.
    fn set_braking(&mut self, enabled: bool);

    /// Plays a named animation clip.
    fn play_visual(&mut self, clip: &str);

    /// Shows `icon` in the actor's thought bubble.
    fn show_thought(&mut self, icon: &ThoughtIcon);

    /// Hides the thought bubble.
    fn hide_thought(&mut self);

    /// Signals the actor-lifecycle collaborator that the actor died.
    ///
    /// Called at most once per level by [`crate::LevelContext::report_death`].
    fn report_death(&mut self);

    /// Returns true once no path is pending and the actor is within
    /// `threshold` of its destination.
    fn has_arrived(&self, threshold: f32) -> bool {
        !self.is_move_pending() && self.remaining_distance() < threshold
    }
}

/// Reports whether the player-proximity hazard currently holds.
pub trait HazardOracle {
    fn is_hazard_active(&self) -> bool;
}

impl<F> HazardOracle for F
where
    F: Fn() -> bool,
{
    fn is_hazard_active(&self) -> bool {
        self()
    }
}
