use blackhole::blackhole_game::BlackHoleGame;
use blackhole::engine::{init_logging, App};
use blackhole::simulation::SimulationConfig;

/// Usage: `blackhole_sim [config.toml]`. `BLACKHOLE_SEED` pins the RNG.
fn main() {
    init_logging();

    let mut config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_toml_file(&path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {path}: {e}. Using defaults.");
            SimulationConfig::default()
        }),
        None => SimulationConfig::default(),
    };

    if let Ok(seed) = std::env::var("BLACKHOLE_SEED") {
        match seed.parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => tracing::warn!("Ignoring BLACKHOLE_SEED={seed}, not an integer"),
        }
    }

    App::new(BlackHoleGame::new(config)).run();
}
