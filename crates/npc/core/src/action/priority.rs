use core::cmp::Ordering;

/// Rank of an action. Lower values are more important.
///
/// Ordering is [`f32::total_cmp`], so the queue and the preemption check
/// agree on a single total order. NaN is rejected at enqueue time.
/// Negative zero is stored as zero so it ties with [`Priority::HAZARD`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32", into = "f32"))]
pub struct Priority(f32);

impl Priority {
    /// Priority of hazard responses.
    pub const HAZARD: Self = Self(0.0);
    /// Priority of the permanent fallback action.
    pub const SENTINEL: Self = Self(f32::MAX);

    pub const fn new(value: f32) -> Self {
        if value == 0.0 { Self(0.0) } else { Self(value) }
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Returns true if `self` should run before `other`.
    pub fn outranks(self, other: Priority) -> bool {
        self < other
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Priority> for f32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_value_outranks_higher() {
        assert!(Priority::new(10.0).outranks(Priority::new(30.0)));
        assert!(!Priority::new(30.0).outranks(Priority::new(10.0)));
        assert!(!Priority::new(10.0).outranks(Priority::new(10.0)));
    }

    #[test]
    fn sentinel_is_last_and_hazard_beats_positive() {
        assert!(Priority::new(1e30).outranks(Priority::SENTINEL));
        assert!(Priority::HAZARD.outranks(Priority::new(0.5)));
        assert!(Priority::new(-1.0).outranks(Priority::HAZARD));
    }

    #[test]
    fn negative_zero_ties_with_hazard() {
        let negative = Priority::new(-0.0);
        assert_eq!(negative, Priority::HAZARD);
        assert!(!negative.outranks(Priority::HAZARD));
        assert!(!Priority::HAZARD.outranks(negative));
        assert!(Priority::from(-0.0).value().is_sign_positive());
        assert!(Priority::new(-0.5).outranks(Priority::HAZARD));
    }
}
