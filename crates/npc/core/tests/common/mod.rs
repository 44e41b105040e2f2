//! Shared harness for scheduler integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use npc_core::{
    Action, ActionScheduler, ActorBinding, LevelContext, Point3, SchedulerConfig, ThoughtIcon,
    TickReport,
};

/// Actor whose navigation only finishes when the test says so.
#[derive(Debug, Default)]
pub struct ScriptedActor {
    pub destination: Option<Point3>,
    pub remaining: f32,
    pub thought: Option<ThoughtIcon>,
    pub clips: Vec<String>,
    pub deaths: usize,
}

impl ScriptedActor {
    pub fn arrive(&mut self) {
        self.remaining = 0.0;
    }
}

impl ActorBinding for ScriptedActor {
    fn set_destination(&mut self, point: Point3) {
        self.destination = Some(point);
        self.remaining = 10.0;
    }

    fn clear_destination(&mut self) {
        self.destination = None;
        self.remaining = 0.0;
    }

    fn is_move_pending(&self) -> bool {
        false
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn set_braking(&mut self, _enabled: bool) {}

    fn play_visual(&mut self, clip: &str) {
        self.clips.push(clip.to_owned());
    }

    fn show_thought(&mut self, icon: &ThoughtIcon) {
        self.thought = Some(icon.clone());
    }

    fn hide_thought(&mut self) {
        self.thought = None;
    }

    fn report_death(&mut self) {
        self.deaths += 1;
    }
}

pub struct Rig {
    pub scheduler: ActionScheduler,
    pub level: LevelContext,
    pub actor: ScriptedActor,
    pub hazard: Cell<bool>,
    pub elapsed: f32,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            scheduler: ActionScheduler::new(config),
            level: LevelContext::new(),
            actor: ScriptedActor::default(),
            hazard: Cell::new(false),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) -> TickReport {
        let hazard = || self.hazard.get();
        let report = self
            .scheduler
            .tick(&mut self.level, &mut self.actor, &hazard, dt)
            .expect("tick should succeed");
        self.elapsed += dt;
        assert_single_active(&self.scheduler);
        report
    }

    pub fn current(&self) -> &Action {
        self.scheduler.current().expect("an action is always active")
    }
}

/// At most one action is active, and the queue is never empty.
pub fn assert_single_active(scheduler: &ActionScheduler) {
    let queue = scheduler.queue();
    assert!(!queue.is_empty(), "queue must hold the default action");

    let mut active = queue.iter().filter(|action| action.is_active()).count();
    if let Some(current) = scheduler.current() {
        if current.is_active() && !queue.contains(current.id()) {
            active += 1;
        }
    }
    assert!(active <= 1, "{active} actions active at once");
}
