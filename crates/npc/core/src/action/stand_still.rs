use super::{ActionCx, Point3, Step};

/// Phase of a [`StandStill`] behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandPhase {
    /// Heading to the stand point. Only entered when one was supplied.
    Walking,
    Standing,
}

/// Stand in place for a while, optionally after walking to a point.
#[derive(Clone, Debug, PartialEq)]
pub struct StandStill {
    duration: f32,
    target: Option<Point3>,
    phase: StandPhase,
    timer: f32,
}

impl StandStill {
    pub fn new(duration: f32, target: Option<Point3>) -> Self {
        let phase = if target.is_some() {
            StandPhase::Walking
        } else {
            StandPhase::Standing
        };
        Self {
            duration,
            target,
            phase,
            timer: 0.0,
        }
    }

    pub fn phase(&self) -> StandPhase {
        self.phase
    }

    pub fn target(&self) -> Option<Point3> {
        self.target
    }

    /// Seconds spent standing so far.
    pub fn elapsed(&self) -> f32 {
        self.timer
    }

    pub(super) fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        if let Some(target) = self.target {
            cx.actor.set_braking(true);
            cx.actor.set_destination(target);
        }
    }

    pub(super) fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        match self.phase {
            StandPhase::Walking => {
                if cx.actor.has_arrived(cx.config.arrival_threshold) {
                    self.phase = StandPhase::Standing;
                }
                Step::Continue
            }
            StandPhase::Standing => {
                // Non-positive durations stand forever
                if self.duration <= 0.0 {
                    return Step::Continue;
                }
                self.timer += cx.dt;
                if self.timer > self.duration {
                    Step::Complete
                } else {
                    Step::Continue
                }
            }
        }
    }
}
