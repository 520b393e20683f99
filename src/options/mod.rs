//! Centralized viewer options with TOML preset support.
//!
//! Camera controls and scene lighting are consolidated here. Options
//! serialize to/from TOML so a page can ship a preset next to the canvas.

mod camera;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and trackball control parameters.
    pub camera: CameraOptions,
    /// Clear color and lighting.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema rendered as a string, for handing to a web UI.
    ///
    /// # Errors
    ///
    /// [`ViewerError::OptionsParse`] if serialization fails.
    pub fn json_schema_string() -> Result<String, ViewerError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Check that the options describe a usable camera.
    ///
    /// # Errors
    ///
    /// [`ViewerError::OptionsParse`] from [`CameraOptions::validate`].
    pub fn validate(&self) -> Result<(), ViewerError> {
        self.camera.validate()
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ViewerError::OptionsParse`] on malformed TOML or values that fail
    /// [`validate`](Self::validate).
    pub fn from_toml(content: &str) -> Result<Self, ViewerError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Io`] if the file cannot be read,
    /// [`ViewerError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`ViewerError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }
}
