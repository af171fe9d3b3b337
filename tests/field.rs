use blackhole::simulation::{Particle, ParticleField, SimulationConfig, MAX_FRAME_DT, MAX_POPULATION};
use glam::{Vec2, Vec3};

/// Field with no particles and no trickle spawning, for scripted scenarios.
pub fn quiet_field(config: SimulationConfig) -> ParticleField {
    let config = config.with_initial_population(0).with_spawn_probability(0.0);
    ParticleField::with_seed(config, 42)
}

pub fn particle_at(position: Vec2, velocity: Vec2) -> Particle {
    Particle::new(position, velocity, 3.0, Vec3::ONE, 1000.0)
}

// ==================================================================================
// Lifetime and absorption
// ==================================================================================

#[test]
fn lifetime_counts_down_by_dt_unless_absorbed() {
    let mut field = ParticleField::with_seed(SimulationConfig::default(), 7);

    for dt in [0.0, 0.016, 0.05, MAX_FRAME_DT] {
        let before: Vec<f32> = field.particles().iter().map(|p| p.lifetime).collect();
        field.integrate(dt);

        for (p, life) in field.particles().iter().zip(before) {
            let absorbed = field.central_mass().absorbs(p.position);
            if absorbed {
                assert_eq!(p.lifetime, 0.0);
            } else {
                assert!((p.lifetime - (life - dt)).abs() < 1e-3, "{} vs {}", p.lifetime, life - dt);
            }
        }
        field.prune();
    }
}

#[test]
fn absorbed_particles_vanish_after_the_step() {
    let mut field = quiet_field(SimulationConfig::default());
    let center = field.central_mass().position;
    field.push(particle_at(center + Vec2::new(31.0, 0.0), Vec2::ZERO));
    field.push(particle_at(center + Vec2::new(400.0, 0.0), Vec2::ZERO));

    field.step(0.016);

    assert_eq!(field.len(), 1);
    let survivor = &field.particles()[0];
    assert!(field.central_mass().distance_to(survivor.position) > 300.0);
    assert!(field.particles().iter().all(|p| !field.central_mass().absorbs(p.position)));
}

#[test]
fn particle_at_absorption_radius_is_pulled_inward() {
    let mut field = quiet_field(SimulationConfig::default());
    let center = field.central_mass().position;
    let radius = field.central_mass().absorption_radius;
    field.push(particle_at(center + Vec2::new(0.0, radius), Vec2::ZERO));

    field.integrate(0.001);

    let p = &field.particles()[0];
    assert!(field.central_mass().distance_to(p.position) < radius);
    assert!((p.position.x - center.x).abs() < 1e-4);
    assert_eq!(p.lifetime, 0.0);
}

#[test]
fn natural_expiry_removes_particle() {
    let config = SimulationConfig::default().with_max_lifetime(0.05);
    let mut field = quiet_field(config);
    field.spawn();

    field.step(0.03);
    assert_eq!(field.len(), 1);
    assert!(field.render_records().next().unwrap().a < 255);

    field.step(0.03);
    assert!(field.is_empty());
}

// ==================================================================================
// Population
// ==================================================================================

#[test]
fn zero_target_never_spawns() {
    let config = SimulationConfig::default()
        .with_initial_population(0)
        .with_target_population(0)
        .with_spawn_probability(1.0);
    let mut field = ParticleField::with_seed(config, 3);

    for _ in 0..200 {
        field.step(MAX_FRAME_DT);
        assert!(field.is_empty());
    }
}

#[test]
fn population_grows_by_at_most_one_per_step() {
    let config = SimulationConfig::default()
        .with_initial_population(0)
        .with_target_population(5)
        .with_spawn_probability(1.0);
    let mut field = ParticleField::with_seed(config, 3);

    let mut previous = field.len();
    for _ in 0..50 {
        field.step(0.001);
        assert!(field.len() <= previous + 1);
        assert!(field.len() <= 5);
        previous = field.len();
    }
    assert_eq!(field.len(), 5);
}

#[test]
fn default_trickle_refills_slowly() {
    let mut field = ParticleField::with_seed(SimulationConfig::default().with_initial_population(0), 8);
    let spawned = (0..600).filter(|_| field.replenish()).count();

    // expected ~10 spawns at 1/60 per check
    assert!(spawned > 0 && spawned < 40, "got {spawned}");
    assert_eq!(field.len(), spawned);
}

#[test]
fn largest_target_starts_empty_and_grows_one_at_a_time() {
    let config = SimulationConfig::default()
        .with_target_population(MAX_POPULATION)
        .with_initial_population(0)
        .with_spawn_probability(1.0);
    assert!(config.validate().is_ok());

    let mut field = ParticleField::with_seed(config, 5);
    assert!(field.is_empty());
    for _ in 0..10 {
        field.step(0.0);
    }
    assert_eq!(field.len(), 10);
}

#[test]
fn out_of_range_probability_spawns_instead_of_panicking() {
    let config = SimulationConfig::default()
        .with_initial_population(0)
        .with_spawn_probability(1.5);
    let mut field = ParticleField::with_seed(config, 3);
    assert!(field.replenish());
    assert_eq!(field.len(), 1);

    let config = SimulationConfig::default()
        .with_initial_population(0)
        .with_spawn_probability(f64::NAN);
    let mut field = ParticleField::with_seed(config, 3);
    assert!(!field.replenish());
    assert!(field.is_empty());
}

// ==================================================================================
// Dynamics
// ==================================================================================

#[test]
fn zero_gravity_moves_in_straight_lines() {
    let config = SimulationConfig::default()
        .with_gravity(0.0, 50000.0)
        .with_initial_population(20)
        .with_spawn_probability(0.0);
    let mut field = ParticleField::with_seed(config, 12);

    let start: Vec<(Vec2, Vec2)> = field.particles().iter().map(|p| (p.position, p.velocity)).collect();
    let dt = 0.01;
    let steps = 100;
    for _ in 0..steps {
        field.step(dt);
    }

    let t = dt * steps as f32;
    for (p, (x0, v0)) in field.particles().iter().zip(&start) {
        let expected = *x0 + *v0 * t;
        assert!((p.position - expected).length() < 1e-2, "{:?} vs {:?}", p.position, expected);
        assert_eq!(p.velocity, *v0);
    }
}

#[test]
fn mass_does_not_change_trajectory() {
    let mut field = quiet_field(SimulationConfig::default());
    let center = field.central_mass().position;
    let start = center + Vec2::new(250.0, 0.0);
    let velocity = Vec2::new(0.0, 120.0);

    let mut light = particle_at(start, velocity);
    light.mass = 1.0;
    let mut heavy = particle_at(start, velocity);
    heavy.mass = 1.0e6;
    field.push(light);
    field.push(heavy);

    for _ in 0..30 {
        field.integrate(0.016);
    }

    let p = field.particles();
    assert_eq!(p[0].position, p[1].position);
    assert_eq!(p[0].velocity, p[1].velocity);
    assert!(p[1].render_record().radius > p[0].render_record().radius);
}

// ==================================================================================
// Render snapshot
// ==================================================================================

#[test]
fn render_records_are_read_only_and_restartable() {
    let field = ParticleField::with_seed(SimulationConfig::default(), 4);
    let first: Vec<_> = field.render_records().collect();
    let second: Vec<_> = field.render_records().collect();

    assert_eq!(first.len(), field.len());
    assert_eq!(first, second);
    for (record, p) in first.iter().zip(field.particles()) {
        assert_eq!(record.radius, 2.0 + p.mass);
        assert_eq!(record.a, 255);
    }
}

#[test]
fn spawn_colors_follow_distance() {
    let field = ParticleField::with_seed(SimulationConfig::default(), 9);
    let center = field.central_mass().position;

    for p in field.particles() {
        let distance = (p.position - center).length();
        let hue = (distance / 500.0 * 360.0).rem_euclid(360.0);
        let expected = blackhole::simulation::hsv_to_rgb(hue, 1.0, 1.0);
        assert!((p.color - expected).abs().max_element() < 1e-2);
    }
}
