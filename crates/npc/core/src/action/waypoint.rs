//! Spatial data handed to movement actions.

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A destination plus how long to linger once it is reached.
///
/// A `wait_after_reaching` of zero or less means "move on immediately".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Point3,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wait_after_reaching: f32,
}

impl Waypoint {
    pub const fn new(position: Point3, wait_after_reaching: f32) -> Self {
        Self {
            position,
            wait_after_reaching,
        }
    }

    /// Waypoint with no pause on arrival.
    pub const fn passing(position: Point3) -> Self {
        Self::new(position, 0.0)
    }

    /// Returns true if the actor should pause after reaching this point.
    ///
    /// Also decides whether braking is enabled on approach.
    pub fn has_wait(&self) -> bool {
        self.wait_after_reaching > 0.0
    }
}
