use glam::{Vec2, Vec3};

use crate::error::ViewerError;

/// Pixel size of the render surface and the arcball radius derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    radius: f32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// [`ViewerError::InvalidViewport`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidViewport { width, height });
        }
        Ok(Self {
            width,
            height,
            radius: (width + height) as f32 / 4.0,
        })
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per unit of arcball space.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a pixel position to screen space: origin at the canvas center,
    /// y pointing up, one unit per `radius` pixels.
    #[must_use]
    pub fn to_screen(&self, mouse: Vec2) -> Vec2 {
        Vec2::new(
            (mouse.x - self.width as f32 * 0.5) / self.radius,
            (self.height as f32 * 0.5 - mouse.y) / self.radius,
        )
    }

    /// Map a pixel position onto the unit arcball in view space.
    ///
    /// Points inside the ball get `z = sqrt(1 - x² - y²)`; points outside are
    /// pulled onto its equator (`z = 0`).
    #[must_use]
    pub fn to_ball(&self, mouse: Vec2) -> Vec3 {
        let screen = self.to_screen(mouse);
        let len = screen.length();
        if len > 1.0 {
            screen.normalize().extend(0.0)
        } else {
            screen.extend((1.0 - len * len).sqrt())
        }
    }
}
