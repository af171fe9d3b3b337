use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::debug_print;
use crate::engine::physics::gravity::CentralMass;
use crate::simulation::color::{hsv_to_rgb, hue_for_distance};
use crate::simulation::{Particle, RenderRecord, SimulationConfig};

/// Largest `dt` the frame loop may hand to [`ParticleField::step`].
/// The field does not clamp on its own; bigger steps tunnel through the absorption radius.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Live particles orbiting a single central mass.
pub struct ParticleField {
    particles: Vec<Particle>,
    central_mass: CentralMass,
    config: SimulationConfig,
    rng: StdRng,
}

impl ParticleField {
    /// Seeds from `config.seed` when set, OS entropy otherwise.
    ///
    /// # Panics
    ///
    /// If the spawn distance, speed or mass range is empty. Configs that pass
    /// [`SimulationConfig::validate`] never do.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            central_mass: CentralMass::from_config(&config),
            config,
            rng,
        };

        for _ in 0..field.config.initial_population {
            field.spawn();
        }

        debug_print!(
            "particle field ready: {} particles around {:?}",
            field.particles.len(),
            field.central_mass.position
        );
        field
    }

    /// Spawns one particle on a ring around the center with a roughly
    /// tangential velocity plus some radial scatter.
    pub fn spawn(&mut self) {
        let angle = self.rng.random_range(0.0..TAU);
        let distance = self.config.spawn_distance_min
            + self.rng.random_range(0.0..self.config.spawn_distance_extent);
        let speed = self.rng.random_range(self.config.speed_range());
        let mass = self.rng.random_range(self.config.mass_range());

        let radial = Vec2::new(angle.cos(), angle.sin());
        let tangent = Vec2::new(-angle.sin(), angle.cos());

        let position = self.central_mass.position + radial * distance;

        let scatter = self.rng.random_range(self.config.speed_range()) * self.config.radial_scatter_scale
            - self.config.radial_scatter_offset;
        let velocity = tangent * speed + radial * scatter;

        let hue = hue_for_distance(distance, self.config.hue_distance_scale);
        let color = hsv_to_rgb(hue, self.config.color_saturation, self.config.color_value);

        self.particles.push(Particle::new(position, velocity, mass, color, self.config.max_lifetime));
    }

    /// Drops every particle whose lifetime ran out. Survivors keep their order.
    pub fn prune(&mut self) {
        self.particles.retain(|p| !p.is_dead());
    }

    /// One randomized spawn attempt while below the target population.
    /// Returns whether a particle was added.
    pub fn replenish(&mut self) -> bool {
        if self.particles.len() >= self.config.target_population {
            return false;
        }
        // random_bool panics outside [0, 1]
        let p = self.config.spawn_probability;
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if self.rng.random_bool(p) {
            self.spawn();
            return true;
        }
        false
    }

    /// Advances every particle by `dt` without pruning or spawning.
    ///
    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    /// A particle that ends up inside the absorption radius gets its lifetime
    /// forced to zero.
    pub fn integrate(&mut self, dt: f32) {
        let center = &self.central_mass;

        for particle in &mut self.particles {
            let acceleration = center.acceleration_at(particle.position);
            particle.velocity += acceleration * dt;
            particle.position += particle.velocity * dt;
            particle.lifetime -= dt;

            if center.absorbs(particle.position) {
                particle.lifetime = 0.0;
            }
        }
    }

    /// The per-frame tick: integrate, prune, replenish.
    pub fn step(&mut self, dt: f32) {
        self.integrate(dt);

        let before = self.particles.len();
        self.prune();
        let removed = before - self.particles.len();

        let spawned = self.replenish();
        if removed > 0 || spawned {
            debug_print!(
                "step dt={:.4}: {} removed, spawned={}, {} live",
                dt,
                removed,
                spawned,
                self.particles.len()
            );
        }
    }

    /// Fresh render snapshot; call again each frame to restart.
    pub fn render_records(&self) -> impl Iterator<Item = RenderRecord> + '_ {
        self.particles.iter().map(Particle::render_record)
    }

    /// Adds an externally built particle, e.g. for scripted scenarios.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn central_mass(&self) -> &CentralMass {
        &self.central_mass
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
