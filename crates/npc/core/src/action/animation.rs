use super::{ActionCx, Step};

/// Play a clip and wait for it to finish.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    clip: String,
    /// Zero plays forever.
    length: f32,
    timer: f32,
}

impl Animation {
    pub fn new(clip: impl Into<String>, length: f32) -> Self {
        Self {
            clip: clip.into(),
            length,
            timer: 0.0,
        }
    }

    pub fn clip(&self) -> &str {
        &self.clip
    }

    pub(super) fn on_start(&mut self, cx: &mut ActionCx<'_>) {
        cx.actor.play_visual(&self.clip);
        self.timer = 0.0;
    }

    pub(super) fn execute(&mut self, cx: &mut ActionCx<'_>) -> Step {
        if self.length == 0.0 {
            return Step::Continue;
        }
        if self.timer < self.length {
            self.timer += cx.dt;
            Step::Continue
        } else {
            Step::Complete
        }
    }
}
