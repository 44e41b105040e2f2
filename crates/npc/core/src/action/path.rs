use super::{ActionCx, Step, Waypoint};

/// Phase of a [`PathPatrol`] behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPhase {
    Walking,
    Waiting,
}

/// Walk a cyclic sequence of waypoints forever.
///
/// Never completes on its own; it runs until preempted or discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPatrol {
    waypoints: Vec<Waypoint>,
    target: usize,
    phase: PathPhase,
    wait_timer: f32,
}

impl PathPatrol {
    /// Returns `None` for an empty waypoint list.
    pub fn new(waypoints: Vec<Waypoint>, start_index: usize) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        let target = if start_index < waypoints.len() {
            start_index
        } else {
            tracing::warn!(
                "Path start index {} out of range for {} waypoints, starting at 0",
                start_index,
                waypoints.len()
            );
            0
        };
        Some(Self {
            waypoints,
            target,
            phase: PathPhase::Walking,
            wait_timer: 0.0,
        })
    }

    pub fn phase(&self) -> PathPhase {
        self.phase
    }

    /// Index of the waypoint being walked toward or waited at.
    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The waypoint currently being walked toward or waited at.
    pub fn current_waypoint(&self) -> &Waypoint {
        &self.waypoints[self.target]
    }

    /// The point the actor heads for next: the current target while
    /// walking, the following waypoint while waiting.
    pub fn upcoming_waypoint(&self) -> &Waypoint {
        match self.phase {
            PathPhase::Walking => &self.waypoints[self.target],
            PathPhase::Waiting => &self.waypoints[self.next_index()],
        }
    }

    fn next_index(&self) -> usize {
        (self.target + 1) % self.waypoints.len()
    }

    pub(super) fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        self.head_for_target(cx);
    }

    pub(super) fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        match self.phase {
            PathPhase::Walking => {
                if cx.actor.has_arrived(cx.config.arrival_threshold) {
                    if self.current_waypoint().has_wait() {
                        self.wait_timer = 0.0;
                        self.phase = PathPhase::Waiting;
                    } else {
                        self.advance(cx);
                    }
                }
            }
            PathPhase::Waiting => {
                self.wait_timer += cx.dt;
                if self.wait_timer > self.current_waypoint().wait_after_reaching {
                    self.phase = PathPhase::Walking;
                    self.advance(cx);
                }
            }
        }
        Step::Continue
    }

    fn advance(&mut self, cx: &mut ActionCx<'_>) {
        self.target = self.next_index();
        self.head_for_target(cx);
    }

    fn head_for_target(&self, cx: &mut ActionCx<'_>) {
        let waypoint = self.current_waypoint();
        cx.actor.set_braking(waypoint.has_wait());
        cx.actor.set_destination(waypoint.position);
    }
}
