//! Construction-time configuration for the particle field.
//!
//! Every value here is fixed for the lifetime of a [`ParticleField`](super::ParticleField).
//! Defaults reproduce the classic 1200x800 black hole scene. A config can be
//! built in code with the `with_*` builders or loaded from TOML:
//!
//! ```toml
//! viewport_width = 1200.0
//! viewport_height = 800.0
//! gravitational_constant = 1000.0
//! central_mass = 50000.0
//! absorption_radius = 30.0
//! event_horizon_radius = 50.0
//! target_population = 100
//! seed = 42
//! ```
//!
//! Missing keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Upper bound accepted for `target_population` and `initial_population`.
pub const MAX_POPULATION: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub gravitational_constant: f32, // scaled for visualization, not SI
    pub central_mass: f32,
    /// Particles closer than this to the center are killed on the spot.
    pub absorption_radius: f32,
    /// Drawn as the black disk. Cosmetic only, the integrator never reads it.
    pub event_horizon_radius: f32,
    pub min_distance: f32, // floor for the gravity distance

    pub target_population: usize,
    pub initial_population: usize,
    pub spawn_probability: f64, // per replenish check

    pub spawn_distance_min: f32,
    pub spawn_distance_extent: f32, // distance = min + U[0, extent)
    pub speed_min: f32,
    pub speed_max: f32,
    pub mass_min: f32,
    pub mass_max: f32,
    pub radial_scatter_scale: f32,
    pub radial_scatter_offset: f32,

    pub hue_distance_scale: f32, // distance that maps to a full 360° hue turn
    pub color_saturation: f32,
    pub color_value: f32,

    /// Counted down by `dt` every step, not by wall-clock frames.
    pub max_lifetime: f32,

    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            viewport_height: 800.0,
            gravitational_constant: 1000.0,
            central_mass: 50000.0,
            absorption_radius: 30.0,
            event_horizon_radius: 50.0,
            min_distance: 0.1,
            target_population: 100,
            initial_population: 100,
            spawn_probability: 1.0 / 60.0,
            spawn_distance_min: 200.0,
            spawn_distance_extent: 300.0,
            speed_min: 50.0,
            speed_max: 200.0,
            mass_min: 1.0,
            mass_max: 5.0,
            radial_scatter_scale: 0.3,
            radial_scatter_offset: 30.0,
            hue_distance_scale: 500.0,
            color_saturation: 1.0,
            color_value: 1.0,
            max_lifetime: 1000.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_gravity(mut self, gravitational_constant: f32, central_mass: f32) -> Self {
        self.gravitational_constant = gravitational_constant;
        self.central_mass = central_mass;
        self
    }

    pub fn with_absorption_radius(mut self, radius: f32) -> Self {
        self.absorption_radius = radius;
        self
    }

    pub fn with_event_horizon_radius(mut self, radius: f32) -> Self {
        self.event_horizon_radius = radius;
        self
    }

    pub fn with_target_population(mut self, target: usize) -> Self {
        self.target_population = target;
        self
    }

    pub fn with_initial_population(mut self, count: usize) -> Self {
        self.initial_population = count;
        self
    }

    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = probability;
        self
    }

    pub fn with_max_lifetime(mut self, lifetime: f32) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn spawn_distance_range(&self) -> Range<f32> {
        self.spawn_distance_min..self.spawn_distance_min + self.spawn_distance_extent
    }

    pub fn speed_range(&self) -> Range<f32> {
        self.speed_min..self.speed_max
    }

    pub fn mass_range(&self) -> Range<f32> {
        self.mass_min..self.mass_max
    }

    /// Checks everything sampling and integration rely on.
    /// A zero gravitational constant is allowed and gives straight-line motion.
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0)
            || !(self.viewport_height.is_finite() && self.viewport_height > 0.0)
        {
            return invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            ));
        }

        let non_negative = [
            ("gravitational_constant", self.gravitational_constant),
            ("central_mass", self.central_mass),
            ("absorption_radius", self.absorption_radius),
            ("event_horizon_radius", self.event_horizon_radius),
            ("radial_scatter_scale", self.radial_scatter_scale),
            ("hue_distance_scale", self.hue_distance_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{name} must be finite and >= 0, got {value}"));
            }
        }

        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return invalid(format!("min_distance must be > 0, got {}", self.min_distance));
        }
        if !(self.max_lifetime.is_finite() && self.max_lifetime > 0.0) {
            return invalid(format!("max_lifetime must be > 0, got {}", self.max_lifetime));
        }
        if self.hue_distance_scale == 0.0 {
            return invalid("hue_distance_scale must be > 0".to_string());
        }
        if self.absorption_radius > self.event_horizon_radius {
            return invalid(format!(
                "absorption_radius ({}) must not exceed event_horizon_radius ({})",
                self.absorption_radius, self.event_horizon_radius
            ));
        }

        let ranges = [
            ("spawn distance", self.spawn_distance_range()),
            ("speed", self.speed_range()),
            ("mass", self.mass_range()),
        ];
        for (name, range) in ranges {
            if !(range.start.is_finite() && range.end.is_finite()) || range.start >= range.end {
                return invalid(format!("{name} range {range:?} is empty"));
            }
        }
        if self.spawn_distance_min < 0.0 || self.speed_min < 0.0 || self.mass_min < 0.0 {
            return invalid("spawn distance, speed and mass must be >= 0".to_string());
        }

        if self.target_population > MAX_POPULATION || self.initial_population > MAX_POPULATION {
            return invalid(format!(
                "populations must be <= {MAX_POPULATION}, got target {} and initial {}",
                self.target_population, self.initial_population
            ));
        }

        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return invalid(format!(
                "spawn_probability must be within [0, 1], got {}",
                self.spawn_probability
            ));
        }
        if !(0.0..=1.0).contains(&self.color_saturation) || !(0.0..=1.0).contains(&self.color_value) {
            return invalid("color saturation and value must be within [0, 1]".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.viewport_width, 1200.0);
        assert_eq!(config.viewport_height, 800.0);
        assert_eq!(config.target_population, 100);
        assert!(config.absorption_radius < config.event_horizon_radius);
    }

    #[test]
    fn toml_overrides_and_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            "target_population = 25\nseed = 7\ngravitational_constant = 0.0\n",
        )
        .unwrap();
        assert_eq!(config.target_population, 25);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.gravitational_constant, 0.0);
        assert_eq!(config.central_mass, 50000.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SimulationConfig::from_toml_str("target_population = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_absorption_beyond_horizon() {
        let config = SimulationConfig::default()
            .with_absorption_radius(80.0)
            .with_event_horizon_radius(50.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_bad_probability_and_ranges() {
        let config = SimulationConfig::default().with_spawn_probability(1.5);
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.speed_max = config.speed_min;
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_viewport(0.0, 800.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_populations() {
        let err = SimulationConfig::from_toml_str("target_population = 1000000000000000000\ninitial_population = 0")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = SimulationConfig::default().with_initial_population(MAX_POPULATION + 1);
        assert!(config.validate().is_err());
        assert!(SimulationConfig::default().with_target_population(MAX_POPULATION).validate().is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
