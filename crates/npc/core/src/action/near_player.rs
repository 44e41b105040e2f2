use super::{ActionCx, Step};

/// Hazard response: stand fast while the player is close.
///
/// Completes when the hazard clears. The actor dies once the timer reaches
/// `danger_threshold`, including on the tick the hazard clears.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NearPlayer {
    danger_timer: f32,
}

impl NearPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds the hazard has been active while this action ran.
    pub fn danger_elapsed(&self) -> f32 {
        self.danger_timer
    }

    pub(super) fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        cx.actor.clear_destination();
    }

    pub(super) fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        if cx.level.is_actor_dead() {
            return Step::Continue;
        }

        self.danger_timer += cx.dt;

        let cleared = !cx.hazard.is_hazard_active();
        if cleared {
            cx.level.set_in_danger(false);
        }

        if self.danger_timer >= cx.config.danger_threshold {
            cx.level.report_death(cx.actor);
        }

        if cleared { Step::Complete } else { Step::Continue }
    }
}
