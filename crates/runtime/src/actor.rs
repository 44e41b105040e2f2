//! Straight-line actor used by the reference host.

use npc_core::{ActorBinding, BubbleChange, Point3, ThoughtBubble, ThoughtIcon};

/// Distance from the destination at which a braking actor starts slowing down.
const BRAKE_DISTANCE: f32 = 1.0;
/// Slowest fraction of full speed while braking.
const MIN_BRAKE_FACTOR: f32 = 0.25;

/// An actor that walks in a straight line toward its destination.
///
/// Newly set destinations stay "pending" for `path_delay` seconds, standing
/// in for path computation in a real navigation system.
#[derive(Clone, Debug)]
pub struct KinematicActor {
    position: Point3,
    destination: Option<Point3>,
    speed: f32,
    braking: bool,
    path_delay: f32,
    pending_for: f32,
    thought: Option<ThoughtIcon>,
    bubble: ThoughtBubble,
    clip: Option<String>,
    dead: bool,
}

impl KinematicActor {
    pub fn new(position: Point3, speed: f32) -> Self {
        Self {
            position,
            destination: None,
            speed,
            braking: false,
            path_delay: 0.0,
            pending_for: 0.0,
            thought: None,
            bubble: ThoughtBubble::default(),
            clip: None,
            dead: false,
        }
    }

    pub fn with_path_delay(mut self, delay: f32) -> Self {
        self.path_delay = delay;
        self
    }

    pub fn with_thought_step(mut self, step: f32) -> Self {
        self.bubble = ThoughtBubble::new(step);
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn destination(&self) -> Option<Point3> {
        self.destination
    }

    pub fn is_braking(&self) -> bool {
        self.braking
    }

    /// Icon of the thought being shown, if any.
    pub fn thought(&self) -> Option<&ThoughtIcon> {
        self.thought.as_ref()
    }

    pub fn bubble(&self) -> &ThoughtBubble {
        &self.bubble
    }

    /// Last clip played.
    pub fn clip(&self) -> Option<&str> {
        self.clip.as_deref()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Moves the actor and steps the thought bubble by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<BubbleChange> {
        let change = self.bubble.advance(dt);
        if self.dead {
            return change;
        }

        if self.pending_for > 0.0 {
            self.pending_for = (self.pending_for - dt).max(0.0);
            return change;
        }

        let Some(destination) = self.destination else {
            return change;
        };
        let remaining = self.position.distance(destination);
        let mut step = self.speed * dt;
        if self.braking && remaining < BRAKE_DISTANCE {
            step *= (remaining / BRAKE_DISTANCE).max(MIN_BRAKE_FACTOR);
        }

        if step >= remaining {
            self.position = destination;
        } else {
            let t = step / remaining;
            self.position = Point3::new(
                self.position.x + (destination.x - self.position.x) * t,
                self.position.y + (destination.y - self.position.y) * t,
                self.position.z + (destination.z - self.position.z) * t,
            );
        }
        change
    }
}

impl ActorBinding for KinematicActor {
    fn set_destination(&mut self, point: Point3) {
        self.destination = Some(point);
        self.pending_for = self.path_delay;
    }

    fn clear_destination(&mut self) {
        self.destination = None;
        self.pending_for = 0.0;
    }

    fn is_move_pending(&self) -> bool {
        self.pending_for > 0.0
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map_or(0.0, |destination| self.position.distance(destination))
    }

    fn set_braking(&mut self, enabled: bool) {
        self.braking = enabled;
    }

    fn play_visual(&mut self, clip: &str) {
        tracing::debug!("Playing clip \"{}\"", clip);
        self.clip = Some(clip.to_owned());
    }

    fn show_thought(&mut self, icon: &ThoughtIcon) {
        self.thought = Some(icon.clone());
        self.bubble.reveal();
    }

    fn hide_thought(&mut self) {
        self.thought = None;
        self.bubble.hide();
    }

    fn report_death(&mut self) {
        self.dead = true;
        self.destination = None;
    }
}
