//! Player proximity as a hazard signal.

use npc_core::{HazardOracle, Point3};

/// Reports a hazard while the player is within `radius` of the actor.
///
/// A snapshot taken once per tick; an absent player is never a hazard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityHazard {
    pub actor: Point3,
    pub player: Option<Point3>,
    pub radius: f32,
}

impl ProximityHazard {
    pub fn new(actor: Point3, player: Option<Point3>, radius: f32) -> Self {
        Self {
            actor,
            player,
            radius,
        }
    }
}

impl HazardOracle for ProximityHazard {
    fn is_hazard_active(&self) -> bool {
        self.player
            .is_some_and(|player| self.actor.distance(player) <= self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_only_inside_radius() {
        let actor = Point3::ORIGIN;
        let near = ProximityHazard::new(actor, Some(Point3::new(2.0, 0.0, 0.0)), 3.0);
        let edge = ProximityHazard::new(actor, Some(Point3::new(3.0, 0.0, 0.0)), 3.0);
        let far = ProximityHazard::new(actor, Some(Point3::new(3.5, 0.0, 0.0)), 3.0);
        let absent = ProximityHazard::new(actor, None, 3.0);

        assert!(near.is_hazard_active());
        assert!(edge.is_hazard_active());
        assert!(!far.is_hazard_active());
        assert!(!absent.is_hazard_active());
    }
}
