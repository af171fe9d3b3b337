use glam::{Mat4, Vec2};

/// Orthographic camera over screen-style coordinates (origin top-left, y down).
///
/// The simulation works in viewport pixels, so by default the camera looks at
/// the middle of the viewport with zoom 1 and a world point maps to the same
/// screen pixel.
pub struct Camera2D {
    pub position: Vec2, // World position the camera is looking at
    pub zoom: f32,      // Zoom level (1.0 = normal, 2.0 = zoomed in 2x)

    view_projection: Mat4,

    // Internal state
    transform_dirty: bool,
    viewport_width: f32,
    viewport_height: f32,
}

/// Engine functions for camera
impl Camera2D {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(400.0, 300.0),
            zoom: 1.0,
            view_projection: Mat4::IDENTITY,
            transform_dirty: true,
            viewport_width: 800.0, // Default size
            viewport_height: 600.0,
        }
    }

    // Engine calls this when window size changes
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if self.viewport_width != width || self.viewport_height != height {
            self.viewport_width = width;
            self.viewport_height = height;
            self.transform_dirty = true;
        }
    }

    // Engine calls this to get the matrix for rendering
    pub fn get_view_projection_matrix(&mut self) -> Mat4 {
        if self.transform_dirty {
            self.update_matrices();
        }
        self.view_projection
    }

    fn update_matrices(&mut self) {
        let half_width = self.viewport_width * 0.5 / self.zoom;
        let half_height = self.viewport_height * 0.5 / self.zoom;

        // top/bottom swapped so +y points down the screen
        let projection = Mat4::orthographic_rh(
            -half_width,
            half_width,
            half_height,
            -half_height,
            -1.0,
            1.0,
        );

        let translation = Mat4::from_translation(glam::Vec3::new(-self.position.x, -self.position.y, 0.0));

        self.view_projection = projection * translation;
        self.transform_dirty = false;
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    pub fn set_position(&mut self, position: Vec2) {
        if self.position != position {
            self.position = position;
            self.transform_dirty = true;
        }
    }

    /// Looks at the middle of the current viewport.
    pub fn center_on_viewport(&mut self) {
        self.set_position(Vec2::new(self.viewport_width * 0.5, self.viewport_height * 0.5));
    }
}
