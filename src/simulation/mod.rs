//! Frame-driven particle simulation around a fixed central mass.
//!
//! Per tick the host clamps `dt` to [`MAX_FRAME_DT`], calls
//! [`ParticleField::step`], then reads [`ParticleField::render_records`].
//! Stepping and reading never overlap.

pub mod color;
pub mod config;
pub mod field;
pub mod particle;

pub use color::*;
pub use config::*;
pub use field::*;
pub use particle::*;
