use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::ViewerError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and trackball control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Squared pixel distance a pressed pointer must travel before the
    /// gesture counts as a drag.
    #[schemars(skip)]
    pub drag_threshold_px2: f32,
    /// How long a motionless pressed button waits before the gesture is
    /// treated as a drag, in milliseconds.
    #[schemars(skip)]
    pub click_timeout_ms: u64,
    /// Zoom factor change per unit of wheel delta.
    #[schemars(title = "Zoom Speed", range(min = 0.00005, max = 0.001), extend("step" = 0.00005))]
    pub wheel_sensitivity: f32,
    /// Pan distance per unit of screen motion, relative to the eye
    /// distance.
    #[schemars(title = "Pan Speed", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub pan_factor: f32,
    /// Eye distance used when zooming in past the near limit.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Eye distance used when zooming out past the far limit.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Rebuild `up`/`right` from `eye` after each rotation.
    #[schemars(title = "Re-orthonormalize")]
    pub reorthonormalize: bool,
}

impl CameraOptions {
    /// Click timeout as a [`Duration`].
    #[must_use]
    pub fn click_timeout(&self) -> Duration {
        Duration::from_millis(self.click_timeout_ms)
    }

    /// Reject parameters that would leave the camera degenerate: a
    /// non-positive zoom band or near plane, or a non-finite tunable.
    ///
    /// # Errors
    ///
    /// [`ViewerError::OptionsParse`] naming the offending field.
    pub fn validate(&self) -> Result<(), ViewerError> {
        let invalid = |field: &str, value: f32, rule: &str| {
            Err(ViewerError::OptionsParse(format!(
                "camera.{field} = {value}: {rule}"
            )))
        };

        for (field, value) in [
            ("fovy", self.fovy),
            ("drag_threshold_px2", self.drag_threshold_px2),
            ("wheel_sensitivity", self.wheel_sensitivity),
            ("pan_factor", self.pan_factor),
        ] {
            if !value.is_finite() {
                return invalid(field, value, "must be finite");
            }
        }
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return invalid("fovy", self.fovy, "must be in (0, 180) degrees");
        }
        if !(self.znear.is_finite() && self.znear > 0.0) {
            return invalid("znear", self.znear, "must be positive");
        }
        if !(self.zfar.is_finite() && self.zfar > self.znear) {
            return invalid("zfar", self.zfar, "must exceed znear");
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return invalid(
                "min_distance",
                self.min_distance,
                "must be positive",
            );
        }
        if !(self.max_distance.is_finite()
            && self.max_distance > self.min_distance)
        {
            return invalid(
                "max_distance",
                self.max_distance,
                "must exceed min_distance",
            );
        }
        Ok(())
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            drag_threshold_px2: 60.0,
            click_timeout_ms: 250,
            wheel_sensitivity: 0.0002,
            pan_factor: 0.3,
            min_distance: 0.3,
            max_distance: 100.0,
            reorthonormalize: false,
        }
    }
}
