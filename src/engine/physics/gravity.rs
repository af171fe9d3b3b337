use glam::Vec2;

use crate::simulation::SimulationConfig;

/// Fixed point source of gravity at the middle of the viewport.
///
/// Particles are test particles: their own mass never enters the force, only
/// `gravitational_constant * mass / distance²` toward `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralMass {
    pub position: Vec2,
    pub mass: f32,
    pub gravitational_constant: f32,
    pub absorption_radius: f32,
    pub event_horizon_radius: f32, // rendering only
    pub min_distance: f32,
}

impl CentralMass {
    /// Radii and distance floor come from [`SimulationConfig::default`].
    pub fn new(position: Vec2, gravitational_constant: f32, mass: f32) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            position,
            mass,
            gravitational_constant,
            absorption_radius: defaults.absorption_radius,
            event_horizon_radius: defaults.event_horizon_radius,
            min_distance: defaults.min_distance,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        let center = Vec2::new(config.viewport_width / 2.0, config.viewport_height / 2.0);
        Self {
            absorption_radius: config.absorption_radius,
            event_horizon_radius: config.event_horizon_radius,
            min_distance: config.min_distance,
            ..Self::new(center, config.gravitational_constant, config.central_mass)
        }
    }

    pub fn with_absorption_radius(mut self, radius: f32) -> Self {
        self.absorption_radius = radius;
        self
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        (self.position - point).length()
    }

    /// Inverse-square pull toward the center. The distance is floored at
    /// `min_distance` so a particle sitting on the center stays finite.
    pub fn acceleration_at(&self, point: Vec2) -> Vec2 {
        let to_center = self.position - point;
        let distance = to_center.length().max(self.min_distance);
        let force = self.gravitational_constant * self.mass / (distance * distance);
        (to_center / distance) * force
    }

    pub fn absorbs(&self, point: Vec2) -> bool {
        self.distance_to(point) < self.absorption_radius
    }
}
