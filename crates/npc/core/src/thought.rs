//! Staged thought bubble animation.
//!
//! A thought appears as a chain of small bubbles that pop in one after the
//! other, and disappears in reverse order. [`ThoughtBubble`] tracks the
//! stepping only; hosts apply each [`BubbleChange`] to their visuals.

/// Number of bubbles in the chain.
pub const BUBBLE_COUNT: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Reveal,
    Hide,
}

/// One visible step of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleChange {
    /// Bubble at this index became visible.
    Shown(u8),
    /// Bubble at this index was hidden.
    Hidden(u8),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThoughtBubble {
    step: f32,
    timer: f32,
    visible: u8,
    direction: Direction,
}

impl ThoughtBubble {
    /// Creates a hidden bubble chain advancing every `step` seconds.
    pub fn new(step: f32) -> Self {
        Self {
            step,
            timer: 0.0,
            visible: 0,
            direction: Direction::Hide,
        }
    }

    /// Starts popping bubbles in. Bubbles already shown stay shown.
    pub fn reveal(&mut self) {
        self.direction = Direction::Reveal;
        self.timer = 0.0;
    }

    /// Starts hiding bubbles, last shown first.
    pub fn hide(&mut self) {
        self.direction = Direction::Hide;
        self.timer = 0.0;
    }

    pub fn visible_count(&self) -> u8 {
        self.visible
    }

    /// True when every bubble is shown, or (while hiding) every bubble is gone.
    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Reveal => self.visible == BUBBLE_COUNT,
            Direction::Hide => self.visible == 0,
        }
    }

    /// Whether the full thought (all bubbles) is on screen.
    pub fn is_fully_shown(&self) -> bool {
        self.visible == BUBBLE_COUNT
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// At most one bubble changes per call.
    pub fn advance(&mut self, dt: f32) -> Option<BubbleChange> {
        if self.is_settled() {
            return None;
        }
        self.timer += dt;
        if self.timer <= self.step {
            return None;
        }
        self.timer -= self.step;

        match self.direction {
            Direction::Reveal => {
                let index = self.visible;
                self.visible += 1;
                Some(BubbleChange::Shown(index))
            }
            Direction::Hide => {
                self.visible -= 1;
                Some(BubbleChange::Hidden(self.visible))
            }
        }
    }
}

impl Default for ThoughtBubble {
    fn default() -> Self {
        Self::new(crate::SchedulerConfig::DEFAULT_THOUGHT_STEP)
    }
}
