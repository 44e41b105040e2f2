//! Serializable descriptions of actions and scenarios.

use npc_core::{Action, ActionError, Point3, ThoughtIcon, Waypoint};

/// An action as written in a scenario file.
///
/// Hazard actions are absent on purpose: only the scheduler admits them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionSpec {
    StandStill {
        priority: f32,
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        duration: f32,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<Point3>,
        #[cfg_attr(feature = "serde", serde(default))]
        thought: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        discard_after: f32,
    },
    Path {
        priority: f32,
        name: String,
        waypoints: Vec<Waypoint>,
        #[cfg_attr(feature = "serde", serde(default))]
        start_index: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        thought: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        discard_after: f32,
    },
    MoveTo {
        priority: f32,
        name: String,
        goal: Waypoint,
        #[cfg_attr(feature = "serde", serde(default))]
        wait_before: f32,
        #[cfg_attr(feature = "serde", serde(default))]
        thought: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        discard_after: f32,
    },
    Animation {
        priority: f32,
        name: String,
        clip: String,
        #[cfg_attr(feature = "serde", serde(default))]
        length: f32,
        #[cfg_attr(feature = "serde", serde(default))]
        discard_after: f32,
    },
}

impl ActionSpec {
    pub fn name(&self) -> &str {
        match self {
            ActionSpec::StandStill { name, .. }
            | ActionSpec::Path { name, .. }
            | ActionSpec::MoveTo { name, .. }
            | ActionSpec::Animation { name, .. } => name,
        }
    }

    /// Builds a fresh, unscheduled action.
    pub fn build(&self) -> Result<Action, ActionError> {
        let (action, thought, discard_after) = match self {
            ActionSpec::StandStill {
                priority,
                name,
                duration,
                target,
                thought,
                discard_after,
            } => (
                Action::stand_still(*priority, name.clone(), *duration, *target),
                thought,
                *discard_after,
            ),
            ActionSpec::Path {
                priority,
                name,
                waypoints,
                start_index,
                thought,
                discard_after,
            } => (
                Action::path(*priority, name.clone(), waypoints.clone(), *start_index)?,
                thought,
                *discard_after,
            ),
            ActionSpec::MoveTo {
                priority,
                name,
                goal,
                wait_before,
                thought,
                discard_after,
            } => (
                Action::move_to(*priority, name.clone(), *goal, *wait_before),
                thought,
                *discard_after,
            ),
            ActionSpec::Animation {
                priority,
                name,
                clip,
                length,
                discard_after,
            } => (
                Action::animation(*priority, name.clone(), clip.clone(), *length),
                &None,
                *discard_after,
            ),
        };

        let action = action.with_discard_after(discard_after);
        Ok(match thought {
            Some(icon) => action.with_thought(ThoughtIcon::new(icon.clone())),
            None => action,
        })
    }
}

/// Something a scenario does to the scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Enqueue(ActionSpec),
    /// Enqueue unless an action of the same kind and name is already queued.
    EnqueueUnique(ActionSpec),
    Remove(String),
}

/// A command issued once the scenario clock reaches `at`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedCommand {
    #[cfg_attr(feature = "serde", serde(default))]
    pub at: f32,
    pub command: Command,
}

/// Player position from `at` onward, until the next sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSample {
    pub at: f32,
    pub position: Point3,
}

/// A scripted run of one actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actor_start: Point3,
    #[cfg_attr(feature = "serde", serde(default = "ScenarioSpec::default_actor_speed"))]
    pub actor_speed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub commands: Vec<TimedCommand>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_track: Vec<PlayerSample>,
}

impl ScenarioSpec {
    pub const DEFAULT_ACTOR_SPEED: f32 = 2.0;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actor_start: Point3::ORIGIN,
            actor_speed: Self::DEFAULT_ACTOR_SPEED,
            commands: Vec::new(),
            player_track: Vec::new(),
        }
    }

    #[cfg(feature = "serde")]
    fn default_actor_speed() -> f32 {
        Self::DEFAULT_ACTOR_SPEED
    }

    pub fn with_command(mut self, at: f32, command: Command) -> Self {
        self.commands.push(TimedCommand { at, command });
        self
    }

    pub fn with_player_sample(mut self, at: f32, position: Point3) -> Self {
        self.player_track.push(PlayerSample { at, position });
        self
    }

    /// Orders commands and samples by time, keeping file order among ties.
    pub fn normalize(&mut self) {
        self.commands.sort_by(|a, b| a.at.total_cmp(&b.at));
        self.player_track.sort_by(|a, b| a.at.total_cmp(&b.at));
    }

    /// Player position at scenario time `t`, if the player has appeared.
    ///
    /// Expects a normalized track.
    pub fn player_position_at(&self, t: f32) -> Option<Point3> {
        let index = self.player_track.partition_point(|sample| sample.at <= t);
        index
            .checked_sub(1)
            .map(|last| self.player_track[last].position)
    }
}
