pub mod app;
pub mod camera;
pub mod debug;
pub mod graphics;
pub mod input;
pub mod physics;

use glam::Vec2;
use sokol::gfx as sg;
pub use app::*;
pub use camera::*;
pub use debug::*;
pub use graphics::*;
pub use input::*;

#[derive(Clone)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub background_color: sg::Color,
    pub sample_count: i32,
    pub high_dpi: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "My new Game".to_string(),
            window_width: 800,
            window_height: 600,
            background_color: sg::Color { r: 0.6, g: 0.6, b: 0.6, a: 1.0 },
            sample_count: 1,
            high_dpi: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.window_title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_background(mut self, color: sg::Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_samples(mut self, samples: i32) -> Self {
        self.sample_count = samples;
        self
    }
}

// Trait that games must implement
pub trait Game {
    /// Window settings, read once by [`App::new`].
    fn config(&self) -> GameConfig;

    fn init(&mut self, config: &GameConfig);

    /// `dt` is already clamped to the simulation's maximum step.
    fn update(&mut self, dt: f32, input: &InputManager);

    fn render(&mut self, renderer: &mut Renderer);

    fn handle_event(&mut self, _event: &sokol::app::Event) {}

    fn background_color(&self) -> Option<sg::Color> {
        None
    }

    /// Polled every frame; the window title only changes when this does.
    fn window_title(&self) -> Option<String> {
        None
    }

    /// World point the camera should look at after `init`.
    fn camera_focus(&self) -> Option<Vec2> {
        None
    }
}
