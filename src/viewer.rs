//! Per-frame driver tying the trackball camera to the scene.
//!
//! The host owns the canvas and GPU; it forwards pointer events and calls
//! [`Viewer::frame`] once per animation frame. A frame is only produced
//! when the view changed, so the host can skip clearing and drawing
//! otherwise.
//!
//! ```
//! # use trackball_viewer::{InputEvent, Viewer};
//! let mut viewer = Viewer::builder().with_size(640, 480).build().unwrap();
//!
//! // The first poll always draws.
//! assert!(viewer.frame().is_some());
//! assert!(viewer.frame().is_none());
//!
//! viewer.handle_event(InputEvent::Wheel { delta: 120.0 });
//! let frame = viewer.frame().unwrap();
//! assert_eq!(frame.meshes.len(), 4);
//! ```

use glam::{Mat4, Vec3};
use web_time::Instant;

use crate::{
    camera::{CameraUniform, Click, TrackballCamera, Viewport},
    error::ViewerError,
    input::InputEvent,
    options::Options,
    scene::{Scene, Shape},
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    size: (u32, u32),
    options: Option<Options>,
    scene: Option<Scene>,
}

impl ViewerBuilder {
    /// Create a builder with defaults (300x150 surface, default options,
    /// the default scene).
    fn new() -> Self {
        Self {
            size: (300, 150),
            options: None,
            scene: None,
        }
    }

    /// Set the render surface size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Replace the default scene.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    ///
    /// # Errors
    ///
    /// [`ViewerError::InvalidViewport`] when the surface size has a zero
    /// dimension, [`ViewerError::OptionsParse`] when the options fail
    /// [`Options::validate`].
    pub fn build(self) -> Result<Viewer, ViewerError> {
        let (width, height) = self.size;
        let viewport = Viewport::new(width, height)?;
        let options = self.options.unwrap_or_default();
        options.validate()?;
        let scene = self.scene.unwrap_or_else(Scene::default_scene);
        log::info!("viewer {width}x{height} with {} meshes", scene.len());

        Ok(Viewer {
            camera: TrackballCamera::new(viewport, &options.camera),
            scene,
            options,
            uniform: CameraUniform::new(),
            needs_redraw: true,
        })
    }
}

// ── Frame ────────────────────────────────────────────────────────────────

/// Everything the host needs to draw one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshDraw {
    /// Geometry to bind.
    pub shape: Shape,
    /// Object-to-world matrix.
    pub model: Mat4,
    /// Object-to-view matrix (`view * model`).
    pub model_view: Mat4,
    /// Diffuse RGB color.
    pub color: Vec3,
}

/// Draw data for one frame where the view changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Camera matrices in GPU layout.
    pub camera: CameraUniform,
    /// World-to-view matrix.
    pub view: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    /// Ambient light color, premultiplied by its strength.
    pub ambient_color: [f32; 3],
    /// Directional light color.
    pub directional_color: [f32; 3],
    /// Direction of the directional light.
    pub light_direction: [f32; 3],
    /// Meshes in draw order.
    pub meshes: Vec<MeshDraw>,
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// Owns the camera, scene and options for one canvas.
///
/// Construct via [`Viewer::builder`].
pub struct Viewer {
    camera: TrackballCamera,
    scene: Scene,
    options: Options,
    uniform: CameraUniform,
    /// Set when something other than a camera operation changed the image.
    needs_redraw: bool,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Read-only access to the camera.
    #[must_use]
    pub fn camera(&self) -> &TrackballCamera {
        &self.camera
    }

    /// Read-only access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene. The next frame is redrawn.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.needs_redraw = true;
        &mut self.scene
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. The camera keeps its current view.
    ///
    /// # Errors
    ///
    /// [`ViewerError::OptionsParse`] when `options` fail
    /// [`Options::validate`]; the current options are kept.
    pub fn set_options(
        &mut self,
        options: Options,
    ) -> Result<(), ViewerError> {
        options.validate()?;
        self.camera.set_options(&options.camera);
        self.options = options;
        self.needs_redraw = true;
        Ok(())
    }

    /// Track a resized canvas.
    ///
    /// # Errors
    ///
    /// [`ViewerError::InvalidViewport`] for a zero-sized canvas; the old
    /// size is kept.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), ViewerError> {
        self.camera.resize(Viewport::new(width, height)?);
        self.needs_redraw = true;
        Ok(())
    }

    /// Put the camera back at its initial view.
    pub fn reset_camera(&mut self) {
        self.camera.reset();
        self.needs_redraw = true;
    }

    /// Forward a pointer event to the camera.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Click> {
        self.camera.handle_event(event)
    }

    /// Forward a pointer event that happened at `now`.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<Click> {
        self.camera.handle_event_at(event, now)
    }

    /// Poll once per animation frame.
    pub fn frame(&mut self) -> Option<Frame> {
        self.frame_at(Instant::now())
    }

    /// [`frame`](Self::frame) with an explicit clock.
    ///
    /// Runs at most one camera operation and returns draw data only if the
    /// view changed since the last frame.
    pub fn frame_at(&mut self, now: Instant) -> Option<Frame> {
        let camera_changed = self.camera.update_at(now);
        if !camera_changed && !self.needs_redraw {
            return None;
        }
        self.needs_redraw = false;
        Some(self.build_frame())
    }

    fn build_frame(&mut self) -> Frame {
        let camera = self.camera.camera();
        self.uniform.update_view_proj(&camera);

        let view = camera.build_view();
        let meshes = self
            .scene
            .meshes()
            .iter()
            .map(|mesh| {
                let model = mesh.model_matrix();
                MeshDraw {
                    shape: mesh.shape,
                    model,
                    model_view: view * model,
                    color: mesh.color,
                }
            })
            .collect();

        let scene = &self.options.scene;
        let ambient =
            Vec3::from(scene.ambient_color) * scene.ambient_strength;

        Frame {
            camera: self.uniform,
            view,
            projection: camera.build_projection(),
            clear_color: scene.clear_color,
            ambient_color: ambient.to_array(),
            directional_color: scene.directional_color,
            light_direction: scene.light_direction,
            meshes,
        }
    }
}
