use glam::{Mat4, Vec3};

/// Which shared geometry a mesh draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Unit cube centred on the origin.
    Cube,
    /// Unit sphere centred on the origin.
    Sphere,
}

/// One placed, scaled and colored instance of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    /// Geometry to draw.
    pub shape: Shape,
    /// World-space translation.
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Diffuse RGB color.
    pub color: Vec3,
}

impl Mesh {
    /// A black mesh at the origin at half size.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            position: Vec3::ZERO,
            scale: Vec3::splat(0.5),
            color: Vec3::ZERO,
        }
    }

    /// Set the translation.
    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Set the per-axis scale.
    #[must_use]
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Vec3::new(r, g, b);
        self
    }

    /// Translate, then scale.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale)
    }
}
