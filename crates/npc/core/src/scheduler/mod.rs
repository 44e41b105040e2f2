//! Action scheduling for the controlled actor.
//!
//! The [`ActionScheduler`] is the single owner of the pending queue and the
//! active action. An action is either active or queued, never both; the one
//! exception is the sentinel, which stays queued while it stands in as the
//! fallback.

mod queue;

pub use queue::ActionQueue;

use crate::action::{
    Action, ActionCx, ActionId, ActionKind, Point3, Priority, ThoughtIcon, Waypoint,
};
use crate::actor::{ActorBinding, HazardOracle};
use crate::config::SchedulerConfig;
use crate::context::{LevelContext, SchedulerEvent};
use crate::error::SchedulerError;

/// Where the active action lives.
#[derive(Clone, Debug)]
enum Current {
    /// Still in the queue. Only ever the sentinel.
    Queued(ActionId),
    /// Taken out of the queue while it runs.
    Owned(Action),
}

/// Summary of one [`ActionScheduler::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// False when the tick was skipped (not playing, or actor dead).
    pub ran: bool,
    /// A hazard action was admitted this tick.
    pub admitted_hazard: bool,
    /// The active action was replaced this tick.
    pub replaced: bool,
    /// Actions evicted by the discard sweep.
    pub discarded: Vec<ActionId>,
    /// The action executed this tick.
    pub active: Option<ActionId>,
}

/// Priority scheduler driving a single actor.
///
/// Each tick runs four phases in a fixed order:
/// 1. hazard admission
/// 2. preemption check and replacement
/// 3. discard sweep over queued actions
/// 4. execution of the active action
pub struct ActionScheduler {
    config: SchedulerConfig,
    queue: ActionQueue,
    current: Option<Current>,
    sentinel: ActionId,
    next_id: u64,
    /// Scratch list for batched eviction.
    expired: Vec<ActionId>,
}

impl ActionScheduler {
    /// Creates a scheduler whose queue holds only the sentinel, which is active.
    pub fn new(config: SchedulerConfig) -> Self {
        let mut scheduler = Self {
            config,
            queue: ActionQueue::new(),
            current: None,
            sentinel: ActionId::UNASSIGNED,
            next_id: 0,
            expired: Vec::new(),
        };

        let mut sentinel = Action::stand_still(
            Priority::SENTINEL.value(),
            scheduler.config.sentinel_name.clone(),
            0.0,
            None,
        );
        let id = scheduler.allocate_id();
        sentinel.assign_id(id);
        scheduler.queue.push(sentinel);
        scheduler.sentinel = id;
        scheduler.current = Some(Current::Queued(id));
        scheduler
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    /// The active action, if any.
    pub fn current(&self) -> Option<&Action> {
        match self.current.as_ref()? {
            Current::Owned(action) => Some(action),
            Current::Queued(id) => self.queue.get(*id),
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current().map(Action::name)
    }

    /// True if the sentinel is the active action.
    pub fn is_idle(&self) -> bool {
        self.current_name() == Some(self.config.sentinel_name.as_str())
    }

    fn allocate_id(&mut self) -> ActionId {
        self.next_id += 1;
        ActionId(self.next_id)
    }

    fn queued_active_id(&self) -> Option<ActionId> {
        match self.current {
            Some(Current::Queued(id)) => Some(id),
            _ => None,
        }
    }

    // ========================================================================
    // Queue mutation
    // ========================================================================

    fn admit(&mut self, mut action: Action) -> Result<Action, SchedulerError> {
        // Everything must run ahead of the fallback, which stays last in the queue
        let priority = action.priority();
        if priority.is_nan() || !priority.outranks(Priority::SENTINEL) {
            return Err(SchedulerError::InvalidPriority {
                name: action.name().to_owned(),
            });
        }
        if action.is_completed() {
            return Err(SchedulerError::AlreadyCompleted(action.name().to_owned()));
        }
        if action.name() == self.config.sentinel_name {
            return Err(SchedulerError::ReservedName(action.name().to_owned()));
        }
        if !action.id().is_assigned() {
            let id = self.allocate_id();
            action.assign_id(id);
        }
        Ok(action)
    }

    /// Adds an action to the queue.
    pub fn enqueue(&mut self, action: Action) -> Result<ActionId, SchedulerError> {
        let action = self.admit(action)?;
        let id = action.id();
        tracing::debug!(
            "Enqueued action \"{}\" {} at priority {}",
            action.name(),
            id,
            action.priority()
        );
        self.queue.push(action);
        Ok(id)
    }

    /// Adds an action unless one with the same kind and name is already queued.
    ///
    /// Returns `Ok(None)` when the insert was suppressed.
    pub fn enqueue_without_duplicate(
        &mut self,
        action: Action,
    ) -> Result<Option<ActionId>, SchedulerError> {
        let action = self.admit(action)?;
        let id = action.id();
        match self.queue.push_unique(action) {
            Ok(()) => {
                tracing::debug!("Enqueued unique action {}", id);
                Ok(Some(id))
            }
            Err(duplicate) => {
                tracing::debug!(
                    "Skipped duplicate action \"{}\"; an equivalent one is queued",
                    duplicate.name()
                );
                Ok(None)
            }
        }
    }

    pub fn add_stand_still(
        &mut self,
        priority: f32,
        name: impl Into<String>,
        duration: f32,
        target: Option<Point3>,
        thought: Option<ThoughtIcon>,
        discard_after: f32,
    ) -> Result<ActionId, SchedulerError> {
        let action = Action::stand_still(priority, name, duration, target);
        self.enqueue(decorate(action, thought, discard_after))
    }

    pub fn add_path(
        &mut self,
        priority: f32,
        name: impl Into<String>,
        waypoints: Vec<Waypoint>,
        start_index: usize,
        thought: Option<ThoughtIcon>,
        discard_after: f32,
    ) -> Result<ActionId, SchedulerError> {
        let action = Action::path(priority, name, waypoints, start_index)?;
        self.enqueue(decorate(action, thought, discard_after))
    }

    pub fn add_move_to(
        &mut self,
        priority: f32,
        name: impl Into<String>,
        goal: Waypoint,
        wait_before: f32,
        thought: Option<ThoughtIcon>,
        discard_after: f32,
    ) -> Result<ActionId, SchedulerError> {
        let action = Action::move_to(priority, name, goal, wait_before);
        self.enqueue(decorate(action, thought, discard_after))
    }

    pub fn add_animation(
        &mut self,
        priority: f32,
        name: impl Into<String>,
        clip: impl Into<String>,
        length: f32,
        discard_after: f32,
    ) -> Result<ActionId, SchedulerError> {
        let action = Action::animation(priority, name, clip, length);
        self.enqueue(decorate(action, None, discard_after))
    }

    /// Removes the first queued action named `name`.
    ///
    /// Linear scan; meant for rare corrective use. The active action and the
    /// sentinel are never removed.
    pub fn remove_by_name(&mut self, level: &mut LevelContext, name: &str) -> Option<ActionId> {
        if name == self.config.sentinel_name {
            tracing::warn!("Refusing to remove the default action \"{}\"", name);
            return None;
        }
        let id = self.queue.find_by_name(name, self.queued_active_id())?;
        let action = self.queue.remove(id)?;
        tracing::info!("The action \"{}\" has been removed from the queue", name);
        release_hazard_latch(level, &action);
        level.push_event(SchedulerEvent::Removed {
            id,
            name: action.name().to_owned(),
        });
        Some(id)
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advances the scheduler by `dt` seconds.
    ///
    /// Skipped while the game is not playing or after the actor died.
    /// An empty queue is reported as [`SchedulerError::EmptyQueue`] and the
    /// tick does nothing else.
    pub fn tick(
        &mut self,
        level: &mut LevelContext,
        actor: &mut dyn ActorBinding,
        hazard: &dyn HazardOracle,
        dt: f32,
    ) -> Result<TickReport, SchedulerError> {
        let mut report = TickReport::default();
        if !level.is_playing() || level.is_actor_dead() {
            return Ok(report);
        }
        if self.queue.is_empty() {
            tracing::error!(
                "Action queue is empty. The default stand-still action must always be queued"
            );
            return Err(SchedulerError::EmptyQueue);
        }
        report.ran = true;

        report.admitted_hazard = self.admit_hazard(level, hazard)?;

        if self.needs_replacement()? {
            self.assign_next(level, actor)?;
            report.replaced = true;
        }

        report.discarded = self.sweep_discards(level, dt);

        report.active = self.execute_current(level, actor, hazard, dt)?;
        Ok(report)
    }

    fn admit_hazard(
        &mut self,
        level: &mut LevelContext,
        hazard: &dyn HazardOracle,
    ) -> Result<bool, SchedulerError> {
        if !hazard.is_hazard_active() || level.in_danger() {
            return Ok(false);
        }
        let icon = self.config.hazard_icon.clone().map(ThoughtIcon::new);
        let action = Action::near_player(self.config.hazard_name.clone(), icon);
        let admitted = self.enqueue_without_duplicate(action)?.is_some();
        level.set_in_danger(true);
        if admitted {
            tracing::debug!("Player is near; hazard action admitted");
        }
        Ok(admitted)
    }

    /// Replacement happens iff there is no active action, it is completed,
    /// or the queue holds something strictly more important.
    fn needs_replacement(&self) -> Result<bool, SchedulerError> {
        let first = self.queue.peek().ok_or(SchedulerError::EmptyQueue)?;
        let Some(current) = self.current.as_ref() else {
            return Ok(true);
        };
        let action = match current {
            Current::Owned(action) => action,
            Current::Queued(id) => self
                .queue
                .get(*id)
                .ok_or(SchedulerError::DanglingActive(*id))?,
        };
        Ok(action.is_completed() || first.priority().outranks(action.priority()))
    }

    fn assign_next(
        &mut self,
        level: &mut LevelContext,
        actor: &mut dyn ActorBinding,
    ) -> Result<(), SchedulerError> {
        let previous_id = match self.current.take() {
            None => None,
            Some(Current::Owned(mut action)) => {
                action.stop(actor);
                let id = action.id();
                if !action.is_completed() && !self.queue.contains(id) {
                    tracing::debug!(
                        "The action \"{}\" has been put back into the queue",
                        action.name()
                    );
                    level.push_event(SchedulerEvent::Requeued {
                        id,
                        name: action.name().to_owned(),
                    });
                    self.queue.push(action);
                }
                Some(id)
            }
            Some(Current::Queued(id)) => {
                let completed = match self.queue.get_mut(id) {
                    Some(action) => {
                        action.stop(actor);
                        action.is_completed()
                    }
                    None => false,
                };
                if completed {
                    self.queue.remove(id);
                }
                Some(id)
            }
        };

        let first = self.queue.peek().ok_or(SchedulerError::EmptyQueue)?;
        let next = if first.id() == self.sentinel {
            // Keep the fallback queued while it stands in
            Current::Queued(self.sentinel)
        } else {
            let action = self.queue.pop().ok_or(SchedulerError::EmptyQueue)?;
            Current::Owned(action)
        };

        let (next_id, next_name) = match &next {
            Current::Owned(action) => (action.id(), action.name().to_owned()),
            Current::Queued(id) => (
                *id,
                self.queue
                    .get(*id)
                    .map(|action| action.name().to_owned())
                    .unwrap_or_default(),
            ),
        };
        self.current = Some(next);

        if previous_id != Some(next_id) {
            tracing::debug!(
                "The action \"{}\" has become the actor's current action",
                next_name
            );
            level.push_event(SchedulerEvent::Activated {
                id: next_id,
                name: next_name,
            });
        }
        Ok(())
    }

    fn sweep_discards(&mut self, level: &mut LevelContext, dt: f32) -> Vec<ActionId> {
        let active = self.queued_active_id();
        self.expired.clear();
        for action in self.queue.iter_mut() {
            if Some(action.id()) == active {
                continue;
            }
            action.tick_discard(dt);
            if action.is_discard_due() {
                self.expired.push(action.id());
            }
        }

        let mut discarded = Vec::with_capacity(self.expired.len());
        for id in self.expired.drain(..) {
            if let Some(action) = self.queue.remove(id) {
                tracing::info!(
                    "The action \"{}\" has been removed from the queue",
                    action.name()
                );
                release_hazard_latch(level, &action);
                level.push_event(SchedulerEvent::Discarded {
                    id,
                    name: action.name().to_owned(),
                });
                discarded.push(id);
            }
        }
        discarded
    }

    fn execute_current(
        &mut self,
        level: &mut LevelContext,
        actor: &mut dyn ActorBinding,
        hazard: &dyn HazardOracle,
        dt: f32,
    ) -> Result<Option<ActionId>, SchedulerError> {
        let action = match self.current.as_mut() {
            None => return Ok(None),
            Some(Current::Owned(action)) => action,
            Some(Current::Queued(id)) => {
                let id = *id;
                self.queue
                    .get_mut(id)
                    .ok_or(SchedulerError::DanglingActive(id))?
            }
        };

        let mut cx = ActionCx {
            actor,
            hazard,
            level,
            config: &self.config,
            dt,
        };
        if action.is_fresh() || !action.is_active() {
            action.start(&mut cx);
        }
        action.execute(&mut cx);
        Ok(Some(action.id()))
    }
}

fn decorate(action: Action, thought: Option<ThoughtIcon>, discard_after: f32) -> Action {
    let action = action.with_discard_after(discard_after);
    match thought {
        Some(icon) => action.with_thought(icon),
        None => action,
    }
}

/// A hazard action leaving the queue unresolved must not block readmission.
fn release_hazard_latch(level: &mut LevelContext, action: &Action) {
    if action.kind() == ActionKind::NearPlayer && !action.is_completed() {
        level.set_in_danger(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Hazard, RecordingActor};

    struct Rig {
        scheduler: ActionScheduler,
        level: LevelContext,
        actor: RecordingActor,
        hazard: Hazard,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                scheduler: ActionScheduler::new(SchedulerConfig::default()),
                level: LevelContext::new(),
                actor: RecordingActor::default(),
                hazard: Hazard::default(),
            }
        }

        fn tick(&mut self, dt: f32) -> TickReport {
            self.scheduler
                .tick(&mut self.level, &mut self.actor, &self.hazard, dt)
                .unwrap()
        }
    }

    #[test]
    fn starts_with_sentinel_active_and_queued() {
        let rig = Rig::new();
        assert_eq!(rig.scheduler.queue().len(), 1);
        assert!(rig.scheduler.is_idle());
        assert_eq!(
            rig.scheduler.current().map(|a| a.priority()),
            Some(Priority::SENTINEL)
        );
    }

    #[test]
    fn sentinel_stays_put_when_alone() {
        let mut rig = Rig::new();
        for _ in 0..10 {
            let report = rig.tick(1.0);
            assert!(!report.replaced);
        }
        assert!(rig.scheduler.is_idle());
        assert_eq!(rig.scheduler.queue().len(), 1);
        assert!(rig.scheduler.current().unwrap().is_active());
    }

    #[test]
    fn reserved_and_invalid_actions_are_refused() {
        let mut rig = Rig::new();
        let reserved = Action::stand_still(1.0, SchedulerConfig::DEFAULT_SENTINEL_NAME, 0.0, None);
        assert!(matches!(
            rig.scheduler.enqueue(reserved),
            Err(SchedulerError::ReservedName(_))
        ));

        let nan = Action::stand_still(f32::NAN, "nan", 0.0, None);
        assert!(matches!(
            rig.scheduler.enqueue(nan),
            Err(SchedulerError::InvalidPriority { .. })
        ));
        assert_eq!(rig.scheduler.queue().len(), 1);
    }

    #[test]
    fn priorities_not_ahead_of_sentinel_are_refused() {
        let mut rig = Rig::new();
        for value in [f32::MAX, f32::INFINITY, -f32::NAN] {
            let action = Action::stand_still(value, "tail", 0.0, None);
            assert!(matches!(
                rig.scheduler.enqueue(action),
                Err(SchedulerError::InvalidPriority { .. })
            ));
        }
        assert!(rig
            .scheduler
            .add_stand_still(f32::MAX, "tail", 0.0, None, None, 0.0)
            .is_err());
        assert_eq!(rig.scheduler.queue().len(), 1);

        // The largest accepted priority still queues ahead of the sentinel
        let tail = rig
            .scheduler
            .add_stand_still(1e38, "tail", 0.0, None, None, 0.0)
            .unwrap();
        assert_eq!(rig.scheduler.queue().peek().map(Action::id), Some(tail));
        rig.tick(0.1);
        assert_eq!(rig.scheduler.current().map(Action::id), Some(tail));
        assert_eq!(rig.scheduler.queue().len(), 1);
        assert!(rig.scheduler.queue().contains(rig.scheduler.sentinel));
    }

    #[test]
    fn remove_by_name_spares_sentinel() {
        let mut rig = Rig::new();
        rig.scheduler
            .add_stand_still(20.0, "wait", 1.0, None, None, 0.0)
            .unwrap();

        assert!(rig
            .scheduler
            .remove_by_name(&mut rig.level, SchedulerConfig::DEFAULT_SENTINEL_NAME)
            .is_none());
        assert!(rig.scheduler.remove_by_name(&mut rig.level, "wait").is_some());
        assert!(rig.scheduler.remove_by_name(&mut rig.level, "wait").is_none());
        assert_eq!(rig.scheduler.queue().len(), 1);
    }

    #[test]
    fn paused_game_skips_tick() {
        let mut rig = Rig::new();
        rig.scheduler
            .add_stand_still(20.0, "wait", 1.0, None, None, 0.0)
            .unwrap();
        rig.level.set_phase(crate::GamePhase::Paused);

        let report = rig.tick(1.0);
        assert!(!report.ran);
        assert!(rig.scheduler.is_idle());
    }

    #[test]
    fn completed_action_is_dropped_and_sentinel_resumes() {
        let mut rig = Rig::new();
        let id = rig
            .scheduler
            .add_stand_still(20.0, "wait", 0.5, None, None, 0.0)
            .unwrap();

        rig.tick(0.5);
        assert_eq!(rig.scheduler.current().map(Action::id), Some(id));
        rig.tick(0.5);
        assert!(rig.scheduler.current().unwrap().is_completed());

        rig.tick(0.5);
        assert!(rig.scheduler.is_idle());
        assert!(!rig.scheduler.queue().contains(id));

        let completions = rig
            .level
            .events()
            .iter()
            .filter(|e| matches!(e, SchedulerEvent::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn removing_queued_hazard_releases_latch() {
        let mut rig = Rig::new();
        rig.scheduler
            .add_stand_still(-5.0, "urgent", 0.0, None, None, 0.0)
            .unwrap();
        rig.tick(0.1);

        rig.hazard.set(true);
        let report = rig.tick(0.1);
        assert!(report.admitted_hazard);
        assert!(rig.level.in_danger());
        assert_eq!(rig.scheduler.current_name(), Some("urgent"));

        rig.scheduler.remove_by_name(&mut rig.level, "NearPlayer");
        assert!(!rig.level.in_danger());
    }

    #[test]
    fn failed_hazard_admission_leaves_latch_clear() {
        let config = SchedulerConfig {
            hazard_name: SchedulerConfig::DEFAULT_SENTINEL_NAME.to_owned(),
            ..SchedulerConfig::default()
        };
        let mut rig = Rig::new();
        rig.scheduler = ActionScheduler::new(config);
        rig.hazard.set(true);

        let result = rig
            .scheduler
            .tick(&mut rig.level, &mut rig.actor, &rig.hazard, 0.1);
        assert!(matches!(result, Err(SchedulerError::ReservedName(_))));
        assert!(!rig.level.in_danger());
        assert_eq!(rig.scheduler.queue().len(), 1);
    }

    #[test]
    fn hazard_uses_configured_icon_and_threshold() {
        let config = SchedulerConfig::new()
            .with_hazard_icon(None)
            .with_danger_threshold(0.2);
        let mut rig = Rig::new();
        rig.scheduler = ActionScheduler::new(config);
        rig.actor.thought = Some(ThoughtIcon::new("stale"));
        rig.hazard.set(true);

        let report = rig.tick(0.1);
        assert!(report.admitted_hazard);
        assert_eq!(rig.scheduler.current().map(Action::kind), Some(ActionKind::NearPlayer));
        assert_eq!(rig.actor.thought, None);
        assert_eq!(rig.actor.deaths, 0);

        rig.tick(0.1);
        assert_eq!(rig.actor.deaths, 1);
        assert!(rig.level.is_actor_dead());
    }
}
