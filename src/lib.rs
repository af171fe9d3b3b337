pub mod blackhole_game;
pub mod engine;
pub mod simulation;
