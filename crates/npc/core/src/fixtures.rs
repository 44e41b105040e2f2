//! Test doubles shared by the unit tests.

use core::cell::Cell;

use crate::action::{ActionCx, Point3, ThoughtIcon};
use crate::actor::{ActorBinding, HazardOracle};
use crate::config::SchedulerConfig;
use crate::context::LevelContext;

/// Distance reported right after a destination is set.
pub(crate) const FAR: f32 = 10.0;

/// Actor that records every command and only arrives when told to.
#[derive(Debug, Default)]
pub(crate) struct RecordingActor {
    pub destination: Option<Point3>,
    pub destinations: Vec<Point3>,
    pub remaining: f32,
    pub pending: bool,
    pub braking: Option<bool>,
    pub thought: Option<ThoughtIcon>,
    pub clips: Vec<String>,
    pub clears: usize,
    pub deaths: usize,
}

impl RecordingActor {
    pub fn arrive(&mut self) {
        self.remaining = 0.0;
        self.pending = false;
    }
}

impl ActorBinding for RecordingActor {
    fn set_destination(&mut self, point: Point3) {
        self.destination = Some(point);
        self.destinations.push(point);
        self.remaining = FAR;
    }

    fn clear_destination(&mut self) {
        self.destination = None;
        self.remaining = 0.0;
        self.clears += 1;
    }

    fn is_move_pending(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn set_braking(&mut self, enabled: bool) {
        self.braking = Some(enabled);
    }

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

/// Hazard signal the test flips between ticks.
#[derive(Debug, Default)]
pub(crate) struct Hazard(pub Cell<bool>);

impl Hazard {
    pub fn set(&self, value: bool) {
        self.0.set(value);
    }
}

impl HazardOracle for Hazard {
    fn is_hazard_active(&self) -> bool {
        self.0.get()
    }
}

/// Bundles the collaborators an action needs.
#[derive(Debug, Default)]
pub(crate) struct Harness {
    pub actor: RecordingActor,
    pub hazard: Hazard,
    pub level: LevelContext,
    pub config: SchedulerConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cx(&mut self, dt: f32) -> ActionCx<'_> {
        ActionCx {
            actor: &mut self.actor,
            hazard: &self.hazard,
            level: &mut self.level,
            config: &self.config,
            dt,
        }
    }
}
