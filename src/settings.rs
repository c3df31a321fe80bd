//! Optional TOML settings shared by every demo.
//!
//! All sections use `#[serde(default)]`, so a file that only overrides
//! `[camera]` leaves everything else at its default.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{camera::CameraConfig, input::KeyBindings, Error, Result};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "GL_TUTORIALS_CONFIG";
/// File looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "tutorials.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.01,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    /// Directory searched for `<name>.vs.glsl` / `<name>.fs.glsl` before the
    /// built-in shaders.
    pub shader_dir: Option<PathBuf>,
    /// Directory holding `crate.png`, `crate_diffuse.png` and
    /// `crate_specular.png`. Without it the textures are generated.
    pub texture_dir: Option<PathBuf>,
    pub window: WindowSettings,
    pub camera: CameraConfig,
    pub projection: ProjectionSettings,
    /// Key name to control name overrides, e.g. `Up = "forward"`.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            shader_dir: None,
            texture_dir: None,
            window: WindowSettings::default(),
            camera: CameraConfig::default(),
            projection: ProjectionSettings::default(),
            keybindings: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads from [`CONFIG_ENV`] if set, else [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else returns the defaults.
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }

    pub fn key_bindings(&self) -> Result<KeyBindings> {
        KeyBindings::default().with_overrides(&self.keybindings)
    }

    fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config("window dimensions must be non-zero".to_owned()));
        }

        let projection = &self.projection;
        if !(projection.fov > 0.0 && projection.fov < 180.0) {
            return Err(Error::Config(format!(
                "field of view {} must lie strictly between 0 and 180 degrees",
                projection.fov
            )));
        }
        if !(projection.near > 0.0 && projection.near < projection.far) {
            return Err(Error::Config(format!(
                "clip planes must satisfy 0 < near ({}) < far ({})",
                projection.near, projection.far
            )));
        }

        let camera = &self.camera;
        for (name, value) in [
            ("mouse_sensitivity", camera.mouse_sensitivity),
            ("rotation_sensitivity", camera.rotation_sensitivity),
            ("move_speed", camera.move_speed),
        ] {
            if !value.is_finite() {
                return Err(Error::Config(format!("camera {name} must be finite, got {value}")));
            }
        }
        if camera.move_speed < 0.0 {
            return Err(Error::Config(format!(
                "camera move_speed must not be negative, got {}",
                camera.move_speed
            )));
        }

        // Reject unknown control names early rather than at window creation.
        self.key_bindings().map(|_| ())
    }
}
