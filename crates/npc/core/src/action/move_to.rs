use super::{ActionCx, Step, Waypoint};

/// Phase of a [`MoveTo`] behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveToPhase {
    /// Only entered when a positive pre-move delay is configured.
    WaitingBefore,
    WalkingTo,
    /// Only entered when the goal has a positive post-arrival wait.
    WaitingAt,
}

/// Walk to a single goal, optionally pausing before and after, then complete.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveTo {
    goal: Waypoint,
    wait_before: f32,
    phase: MoveToPhase,
    timer: f32,
}

impl MoveTo {
    pub fn new(goal: Waypoint, wait_before: f32) -> Self {
        let phase = if wait_before > 0.0 {
            MoveToPhase::WaitingBefore
        } else {
            MoveToPhase::WalkingTo
        };
        Self {
            goal,
            wait_before,
            phase,
            timer: 0.0,
        }
    }

    pub fn phase(&self) -> MoveToPhase {
        self.phase
    }

    pub fn goal(&self) -> &Waypoint {
        &self.goal
    }

    pub(super) fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        if self.phase == MoveToPhase::WalkingTo {
            self.head_for_goal(cx);
        }
    }

    pub(super) fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        match self.phase {
            MoveToPhase::WaitingBefore => {
                self.timer += cx.dt;
                if self.timer > self.wait_before {
                    self.phase = MoveToPhase::WalkingTo;
                    self.head_for_goal(cx);
                }
                Step::Continue
            }
            MoveToPhase::WalkingTo => {
                if !cx.actor.has_arrived(cx.config.arrival_threshold) {
                    return Step::Continue;
                }
                if self.goal.has_wait() {
                    self.timer = 0.0;
                    self.phase = MoveToPhase::WaitingAt;
                    Step::Continue
                } else {
                    Step::Complete
                }
            }
            MoveToPhase::WaitingAt => {
                self.timer += cx.dt;
                if self.timer > self.goal.wait_after_reaching {
                    Step::Complete
                } else {
                    Step::Continue
                }
            }
        }
    }

    fn head_for_goal(&self, cx: &mut ActionCx<'_>) {
        cx.actor.set_braking(self.goal.has_wait());
        cx.actor.set_destination(self.goal.position);
    }
}
