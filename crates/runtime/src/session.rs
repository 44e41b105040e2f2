//! Scenario playback.
//!
//! A [`Session`] owns one level's worth of state: the scheduler, the level
//! context, the actor and the scenario clock. Each [`Session::step`] runs:
//! 1. commands whose time has come
//! 2. hazard sampling from the player track
//! 3. one scheduler tick
//! 4. actor movement and thought bubble animation

use npc_content::{Command, ScenarioSpec};
use npc_core::{
    ActionScheduler, BubbleChange, GamePhase, HazardOracle, LevelContext, SchedulerConfig,
    SchedulerEvent, TickReport,
};

use crate::actor::KinematicActor;
use crate::error::{Result, RuntimeError};
use crate::hazard::ProximityHazard;

/// What happened during one [`Session::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// Scenario time at the start of the step.
    pub at: f32,
    pub report: TickReport,
    /// Events raised during the step, oldest first.
    pub events: Vec<SchedulerEvent>,
    pub bubble: Option<BubbleChange>,
    pub hazard_active: bool,
}

pub struct Session {
    scenario: ScenarioSpec,
    scheduler: ActionScheduler,
    level: LevelContext,
    actor: KinematicActor,
    clock: f32,
    next_command: usize,
}

impl Session {
    /// Starts a session at time zero. The scenario is normalized first.
    pub fn new(config: SchedulerConfig, mut scenario: ScenarioSpec) -> Self {
        scenario.normalize();
        let actor = KinematicActor::new(scenario.actor_start, scenario.actor_speed)
            .with_thought_step(config.thought_step);
        tracing::info!(
            "Starting scenario \"{}\" with {} commands",
            scenario.name,
            scenario.commands.len()
        );
        Self {
            scenario,
            scheduler: ActionScheduler::new(config),
            level: LevelContext::new(),
            actor,
            clock: 0.0,
            next_command: 0,
        }
    }

    pub fn with_actor(mut self, actor: KinematicActor) -> Self {
        self.actor = actor;
        self
    }

    pub fn scenario(&self) -> &ScenarioSpec {
        &self.scenario
    }

    pub fn scheduler(&self) -> &ActionScheduler {
        &self.scheduler
    }

    pub fn level(&self) -> &LevelContext {
        &self.level
    }

    pub fn actor(&self) -> &KinematicActor {
        &self.actor
    }

    /// Scenario time in seconds.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        tracing::info!("Game phase changed to {}", phase);
        self.level.set_phase(phase);
    }

    /// True once the actor has died; later steps do nothing.
    pub fn is_over(&self) -> bool {
        self.level.is_actor_dead()
    }

    /// Advances the session by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> Result<StepOutcome> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(RuntimeError::InvalidTick(dt));
        }
        let at = self.clock;
        self.apply_due_commands()?;

        let hazard = ProximityHazard::new(
            self.actor.position(),
            self.scenario.player_position_at(at),
            self.scheduler.config().detection_radius,
        );
        let hazard_active = hazard.is_hazard_active();
        let report = self
            .scheduler
            .tick(&mut self.level, &mut self.actor, &hazard, dt)?;

        let bubble = if self.level.is_playing() {
            self.actor.advance(dt)
        } else {
            None
        };
        self.clock += dt;

        Ok(StepOutcome {
            at,
            report,
            events: self.level.drain_events(),
            bubble,
            hazard_active,
        })
    }

    /// Steps `ticks` times or until the actor dies, returning every event raised.
    pub fn run(&mut self, ticks: usize, dt: f32) -> Result<Vec<SchedulerEvent>> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            if self.is_over() {
                break;
            }
            events.extend(self.step(dt)?.events);
        }
        Ok(events)
    }

    fn apply_due_commands(&mut self) -> Result<()> {
        while let Some(timed) = self.scenario.commands.get(self.next_command) {
            if timed.at > self.clock {
                break;
            }
            let at = timed.at;
            let command = timed.command.clone();
            self.next_command += 1;
            self.apply(at, command)?;
        }
        Ok(())
    }

    fn apply(&mut self, at: f32, command: Command) -> Result<()> {
        match command {
            Command::Enqueue(spec) => {
                let action = spec.build()?;
                self.scheduler
                    .enqueue(action)
                    .map_err(|source| RuntimeError::Command { at, source })?;
            }
            Command::EnqueueUnique(spec) => {
                let action = spec.build()?;
                self.scheduler
                    .enqueue_without_duplicate(action)
                    .map_err(|source| RuntimeError::Command { at, source })?;
            }
            Command::Remove(name) => {
                if self.scheduler.remove_by_name(&mut self.level, &name).is_none() {
                    tracing::warn!("No queued action named \"{}\" to remove", name);
                }
            }
        }
        Ok(())
    }
}
