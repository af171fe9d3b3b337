use glam::{Vec2, Vec3, Vec4};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32, // only affects the drawn radius
    pub color: Vec3,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, color: Vec3, lifetime: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
            color,
            lifetime,
            max_lifetime: lifetime,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.lifetime <= 0.0
    }

    pub fn render_radius(&self) -> f32 {
        2.0 + self.mass
    }

    /// Alpha fades linearly with the remaining share of the lifetime budget.
    pub fn alpha(&self) -> u8 {
        let fraction = if self.max_lifetime > 0.0 { self.lifetime / self.max_lifetime } else { 0.0 };
        (255.0 * fraction).clamp(0.0, 255.0) as u8
    }

    pub fn render_record(&self) -> RenderRecord {
        let rgb = (self.color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).to_array();
        RenderRecord {
            x: self.position.x,
            y: self.position.y,
            radius: self.render_radius(),
            r: rgb[0] as u8,
            g: rgb[1] as u8,
            b: rgb[2] as u8,
            a: self.alpha(),
        }
    }
}

/// Read-only per-particle snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRecord {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RenderRecord {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Normalized color for the GPU vertex format.
    pub fn color(&self) -> Vec4 {
        Vec4::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32) / 255.0
    }
}
