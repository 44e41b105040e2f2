/// Scheduler tuning constants and reserved names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    /// Remaining distance below which the actor counts as arrived.
    pub arrival_threshold: f32,
    /// Seconds the player may stay near the actor before it dies.
    pub danger_threshold: f32,
    /// Seconds between thought bubble steps.
    pub thought_step: f32,
    /// Radius around the actor that counts as "player nearby".
    pub detection_radius: f32,
    /// Name of the permanent fallback action. Reserved.
    pub sentinel_name: String,
    /// Name given to admitted hazard actions.
    pub hazard_name: String,
    /// Icon shown while the hazard action runs.
    pub hazard_icon: Option<String>,
}

impl SchedulerConfig {
    pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 0.3;
    pub const DEFAULT_DANGER_THRESHOLD: f32 = 0.75;
    pub const DEFAULT_THOUGHT_STEP: f32 = 0.05;
    pub const DEFAULT_DETECTION_RADIUS: f32 = 3.0;
    pub const DEFAULT_SENTINEL_NAME: &'static str = "DefaultStandStill";
    pub const DEFAULT_HAZARD_NAME: &'static str = "NearPlayer";
    pub const DEFAULT_HAZARD_ICON: &'static str = "exclamation";

    pub fn new() -> Self {
        Self {
            arrival_threshold: Self::DEFAULT_ARRIVAL_THRESHOLD,
            danger_threshold: Self::DEFAULT_DANGER_THRESHOLD,
            thought_step: Self::DEFAULT_THOUGHT_STEP,
            detection_radius: Self::DEFAULT_DETECTION_RADIUS,
            sentinel_name: Self::DEFAULT_SENTINEL_NAME.to_owned(),
            hazard_name: Self::DEFAULT_HAZARD_NAME.to_owned(),
            hazard_icon: Some(Self::DEFAULT_HAZARD_ICON.to_owned()),
        }
    }

    pub fn with_danger_threshold(mut self, danger_threshold: f32) -> Self {
        self.danger_threshold = danger_threshold;
        self
    }

    pub fn with_hazard_icon(mut self, hazard_icon: Option<String>) -> Self {
        self.hazard_icon = hazard_icon;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
