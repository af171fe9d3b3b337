use glam::{Vec2, Vec4};
use sokol::{app as sapp, gfx as sg};

use crate::debug_print;
use crate::engine::{toggle_debug_text, Circle, Game, GameConfig, InputManager, Renderer};
use crate::simulation::{ParticleField, SimulationConfig};

const GLOW_RINGS: usize = 3;
const PARTICLE_SEGMENTS: u32 = 12;

/// Near-black space background.
pub const BACKGROUND: sg::Color = sg::Color {
    r: 5.0 / 255.0,
    g: 5.0 / 255.0,
    b: 15.0 / 255.0,
    a: 1.0,
};

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}

/// The black hole scene: owns the particle field and draws it with the
/// accretion glow, horizon and body on top of each other.
pub struct BlackHoleGame {
    field: ParticleField,
    last_count: usize,
}

impl BlackHoleGame {
    pub fn new(config: SimulationConfig) -> Self {
        let field = ParticleField::new(config);
        let last_count = field.len();
        Self { field, last_count }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn hud_text(&self) -> String {
        format!("Black Hole Simulation | Particles: {}", self.field.len())
    }

    /// Everything drawn in a frame, back to front.
    pub fn scene(&self) -> Vec<Circle> {
        let center = self.field.central_mass();
        let (cx, cy) = (center.position.x, center.position.y);
        let mut circles = Vec::with_capacity(GLOW_RINGS + 2 + self.field.len());

        // Accretion glow, each ring drawn over the previous smaller one
        for i in 0..GLOW_RINGS as u8 {
            let radius = center.event_horizon_radius + i as f32 * 10.0;
            let color = rgba(100 + i * 20, 50 + i * 10, 150 + i * 30, 100);
            circles.push(Circle::new(cx, cy, radius, color).with_segments(64));
        }

        circles.push(
            Circle::new(cx, cy, center.event_horizon_radius, Vec4::new(0.0, 0.0, 0.0, 1.0)).with_segments(64),
        );
        circles.push(Circle::new(cx, cy, center.absorption_radius, rgba(20, 20, 30, 255)).with_segments(64));

        circles.extend(self.field.render_records().map(|record| {
            Circle::new(record.x, record.y, record.radius, record.color()).with_segments(PARTICLE_SEGMENTS)
        }));

        circles
    }
}

impl Game for BlackHoleGame {
    /// Window settings matching the simulation viewport.
    fn config(&self) -> GameConfig {
        let config = self.field.config();
        GameConfig::new()
            .with_title("Black Hole Simulation")
            .with_size(config.viewport_width as i32, config.viewport_height as i32)
            .with_background(BACKGROUND)
            .with_samples(4)
    }

    fn init(&mut self, config: &GameConfig) {
        tracing::info!(
            "{}x{} window, {} particles, central mass at {:?}",
            config.window_width,
            config.window_height,
            self.field.len(),
            self.field.central_mass().position
        );
    }

    fn update(&mut self, dt: f32, input: &InputManager) {
        if input.is_key_pressed(sapp::Keycode::Escape) {
            sapp::request_quit();
            return;
        }
        if input.is_key_pressed(sapp::Keycode::F1) {
            toggle_debug_text();
        }

        self.field.step(dt);

        let count = self.field.len();
        if count != self.last_count {
            debug_print!("particles: {} -> {}", self.last_count, count);
            self.last_count = count;
        }
    }

    fn render(&mut self, renderer: &mut Renderer) {
        for circle in self.scene() {
            renderer.draw_circle(&circle);
        }
    }

    fn background_color(&self) -> Option<sg::Color> {
        Some(BACKGROUND)
    }

    fn window_title(&self) -> Option<String> {
        Some(self.hud_text())
    }

    fn camera_focus(&self) -> Option<Vec2> {
        Some(self.field.central_mass().position)
    }
}
