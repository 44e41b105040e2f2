//! Action domain - schedulable units of actor behavior.
//!
//! An [`Action`] pairs the lifecycle shared by every action (priority, name,
//! flags, discard timer, thought icon) with a [`Behavior`], the closed set
//! of per-kind state machines.
//!
//! # Module Structure
//!
//! - `priority`: total order over priorities
//! - `waypoint`: points and waypoints handed to movement behaviors
//! - `stand_still`, `path`, `move_to`, `near_player`, `animation`: behaviors
//!
//! # Lifecycle
//!
//! ```text
//! constructed (FRESH) ── start ──▶ ACTIVE ── stop ──▶ paused ── start ──▶ ...
//!                                    │
//!                                    └── behavior completes ──▶ COMPLETED (terminal)
//! ```

mod animation;
mod move_to;
mod near_player;
mod path;
mod priority;
mod stand_still;
mod waypoint;

pub use animation::Animation;
pub use move_to::{MoveTo, MoveToPhase};
pub use near_player::NearPlayer;
pub use path::{PathPatrol, PathPhase};
pub use priority::Priority;
pub use stand_still::{StandPhase, StandStill};
pub use waypoint::{Point3, Waypoint};

use bitflags::bitflags;

use crate::actor::{ActorBinding, HazardOracle};
use crate::config::SchedulerConfig;
use crate::context::{LevelContext, SchedulerEvent};
use crate::error::ActionError;

/// Identifier assigned by the scheduler when an action is first enqueued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u64);

impl ActionId {
    /// Placeholder carried by actions that were never enqueued.
    pub const UNASSIGNED: Self = Self(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl core::fmt::Display for ActionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static tag describing what an action does. Never changes after construction.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    StandStill,
    Path,
    MoveTo,
    NearPlayer,
}

bitflags! {
    /// Lifecycle flags shared by every action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ActionFlags: u8 {
        /// Between `start` and `stop`.
        const ACTIVE    = 1 << 0;
        /// Never started.
        const FRESH     = 1 << 1;
        /// Terminal. Never re-activated or re-enqueued.
        const COMPLETED = 1 << 2;
    }
}

impl Default for ActionFlags {
    fn default() -> Self {
        Self::FRESH
    }
}

/// Icon displayed in the actor's thought bubble while an action runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThoughtIcon(String);

impl ThoughtIcon {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Age an action has accumulated while waiting in the queue.
///
/// A limit of zero disables eviction entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiscardTimer {
    elapsed: f32,
    limit: f32,
}

impl DiscardTimer {
    pub const NEVER: Self = Self::new(0.0);

    pub const fn new(limit: f32) -> Self {
        Self {
            elapsed: 0.0,
            limit,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.limit == 0.0 {
            return;
        }
        self.elapsed += dt;
    }

    pub fn is_expired(&self) -> bool {
        self.limit != 0.0 && self.elapsed > self.limit
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }
}

/// Everything a behavior may touch while it runs.
pub struct ActionCx<'a> {
    pub actor: &'a mut dyn ActorBinding,
    pub hazard: &'a dyn HazardOracle,
    pub level: &'a mut LevelContext,
    pub config: &'a SchedulerConfig,
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
}

/// Result of one behavior tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Complete,
}

/// Per-kind state machine driven by an [`Action`].
#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    StandStill(StandStill),
    Path(PathPatrol),
    MoveTo(MoveTo),
    NearPlayer(NearPlayer),
    Animation(Animation),
}

impl Behavior {
    /// Static kind tag. Animations report as stand-still actions.
    pub fn kind(&self) -> ActionKind {
        match self {
            Behavior::StandStill(_) | Behavior::Animation(_) => ActionKind::StandStill,
            Behavior::Path(_) => ActionKind::Path,
            Behavior::MoveTo(_) => ActionKind::MoveTo,
            Behavior::NearPlayer(_) => ActionKind::NearPlayer,
        }
    }

    fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        match self {
            Behavior::StandStill(b) => b.on_start(cx),
            Behavior::Path(b) => b.on_start(cx),
            Behavior::MoveTo(b) => b.on_start(cx),
            Behavior::NearPlayer(b) => b.on_start(cx),
            Behavior::Animation(b) => b.on_start(cx),
        }
    }

    fn on_stop(&mut self, actor: &mut dyn ActorBinding) {
        match self {
            Behavior::StandStill(_) | Behavior::Path(_) | Behavior::MoveTo(_) => {
                actor.clear_destination()
            }
            Behavior::NearPlayer(_) | Behavior::Animation(_) => {}
        }
    }

    fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        match self {
            Behavior::StandStill(b) => b.execute(cx),
            Behavior::Path(b) => b.execute(cx),
            Behavior::MoveTo(b) => b.execute(cx),
            Behavior::NearPlayer(b) => b.execute(cx),
            Behavior::Animation(b) => b.execute(cx),
        }
    }
}

/// A schedulable unit of actor behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    id: ActionId,
    priority: Priority,
    name: String,
    flags: ActionFlags,
    discard: DiscardTimer,
    thought: Option<ThoughtIcon>,
    behavior: Behavior,
}

impl Action {
    fn with_behavior(priority: f32, name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            id: ActionId::UNASSIGNED,
            priority: Priority::new(priority),
            name: name.into(),
            flags: ActionFlags::default(),
            discard: DiscardTimer::NEVER,
            thought: None,
            behavior,
        }
    }

    /// Stand in place, optionally after walking to `target`.
    ///
    /// A `duration` of zero or less never completes.
    pub fn stand_still(
        priority: f32,
        name: impl Into<String>,
        duration: f32,
        target: Option<Point3>,
    ) -> Self {
        Self::with_behavior(
            priority,
            name,
            Behavior::StandStill(StandStill::new(duration, target)),
        )
    }

    /// Walk a cyclic sequence of waypoints, starting at `start_index`.
    ///
    /// Out-of-range start indices fall back to the first waypoint.
    pub fn path(
        priority: f32,
        name: impl Into<String>,
        waypoints: Vec<Waypoint>,
        start_index: usize,
    ) -> Result<Self, ActionError> {
        let name = name.into();
        let patrol = PathPatrol::new(waypoints, start_index).ok_or_else(|| {
            ActionError::EmptyPath {
                name: name.clone(),
            }
        })?;
        Ok(Self::with_behavior(priority, name, Behavior::Path(patrol)))
    }

    /// Walk to `goal` after waiting `wait_before` seconds, then complete.
    pub fn move_to(
        priority: f32,
        name: impl Into<String>,
        goal: Waypoint,
        wait_before: f32,
    ) -> Self {
        Self::with_behavior(
            priority,
            name,
            Behavior::MoveTo(MoveTo::new(goal, wait_before)),
        )
    }

    /// Hazard response. Fixed priority zero and never discarded.
    pub fn near_player(name: impl Into<String>, thought: Option<ThoughtIcon>) -> Self {
        let mut action = Self::with_behavior(
            Priority::HAZARD.value(),
            name,
            Behavior::NearPlayer(NearPlayer::new()),
        );
        action.thought = thought;
        action
    }

    /// Play `clip` for `length` seconds. A length of zero never completes.
    pub fn animation(
        priority: f32,
        name: impl Into<String>,
        clip: impl Into<String>,
        length: f32,
    ) -> Self {
        Self::with_behavior(
            priority,
            name,
            Behavior::Animation(Animation::new(clip, length)),
        )
    }

    /// Attaches a thought bubble icon (builder pattern).
    #[must_use]
    pub fn with_thought(mut self, icon: ThoughtIcon) -> Self {
        self.thought = Some(icon);
        self
    }

    /// Evicts the action after `limit` seconds in the queue. Zero disables eviction.
    #[must_use]
    pub fn with_discard_after(mut self, limit: f32) -> Self {
        self.discard = DiscardTimer::new(limit);
        self
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: ActionId) {
        self.id = id;
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActionKind {
        self.behavior.kind()
    }

    pub fn flags(&self) -> ActionFlags {
        self.flags
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(ActionFlags::ACTIVE)
    }

    pub fn is_fresh(&self) -> bool {
        self.flags.contains(ActionFlags::FRESH)
    }

    pub fn is_completed(&self) -> bool {
        self.flags.contains(ActionFlags::COMPLETED)
    }

    pub fn thought(&self) -> Option<&ThoughtIcon> {
        self.thought.as_ref()
    }

    pub fn discard_timer(&self) -> &DiscardTimer {
        &self.discard
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Two actions are duplicates when they share kind and name.
    pub fn same_identity(&self, other: &Action) -> bool {
        self.kind() == other.kind() && self.name == other.name
    }

    /// Activates the action and runs its start hook.
    pub fn start(&mut self, cx: &mut ActionCx<'_>) {
        self.flags.insert(ActionFlags::ACTIVE);
        self.flags.remove(ActionFlags::FRESH);

        match &self.thought {
            Some(icon) => cx.actor.show_thought(icon),
            None => cx.actor.hide_thought(),
        }

        self.behavior.on_start(cx);
    }

    /// Deactivates the action and runs its stop hook.
    pub fn stop(&mut self, actor: &mut dyn ActorBinding) {
        self.flags.remove(ActionFlags::ACTIVE);
        if self.thought.is_some() {
            actor.hide_thought();
        }
        self.behavior.on_stop(actor);
    }

    /// Advances the behavior by one tick. No-op unless active and incomplete.
    pub fn execute(&mut self, cx: &mut ActionCx<'_>) {
        if !self.is_active() || self.is_completed() {
            return;
        }
        if self.behavior.execute(cx) == Step::Complete {
            self.complete(cx.level);
        }
    }

    /// Ages the discard timer. Called only while the action is queued.
    pub fn tick_discard(&mut self, dt: f32) {
        self.discard.tick(dt);
    }

    pub fn is_discard_due(&self) -> bool {
        self.discard.is_expired()
    }

    fn complete(&mut self, level: &mut LevelContext) {
        if self.is_completed() {
            return;
        }
        self.flags.insert(ActionFlags::COMPLETED);
        tracing::info!("Action \"{}\" ({}) completed", self.name, self.id);
        level.push_event(SchedulerEvent::Completed {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind(),
        });
    }
}
