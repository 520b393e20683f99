use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Clear color and light settings handed to the shader each frame.
pub struct SceneOptions {
    #[schemars(skip)]
    /// Color the canvas is cleared to before drawing.
    pub clear_color: [f32; 4],
    #[schemars(skip)]
    /// Ambient light color.
    pub ambient_color: [f32; 3],
    #[schemars(skip)]
    /// Directional light color.
    pub directional_color: [f32; 3],
    #[schemars(skip)]
    /// Direction the directional light comes from (not normalized).
    pub light_direction: [f32; 3],
    /// Uniform multiplier on the ambient term.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub ambient_strength: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            ambient_color: [1.0, 1.0, 1.0],
            directional_color: [1.0, 1.0, 1.0],
            light_direction: [0.4, 0.3, 0.5],
            ambient_strength: 1.0,
        }
    }
}
