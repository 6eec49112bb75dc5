use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a viewer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "Terra Engine".into(),
        }
    }
}

/// Initial camera placement and responsiveness.
///
/// Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pixel of cursor travel.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

/// Perspective projection parameters. Aspect ratio comes from the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Mouse handling options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Negate the vertical cursor delta before it reaches the camera.
    /// Off by default: the raw screen-space delta is passed through.
    pub flip_y: bool,
}

/// Top-level viewer configuration, loadable from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub input: InputConfig,
    /// Optional WGSL file replacing the embedded shader.
    pub shader_path: Option<PathBuf>,
}

impl ViewerConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Reject values the viewer cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let p = &self.projection;
        if !(p.fov_y_degrees > 0.0 && p.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_y_degrees must be in (0, 180), got {}",
                p.fov_y_degrees
            )));
        }
        if !(p.near > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "near plane must be positive, got {}",
                p.near
            )));
        }
        if !(p.far > p.near) {
            return Err(ConfigError::Invalid(format!(
                "far plane ({}) must be beyond near plane ({})",
                p.far, p.near
            )));
        }

        let c = &self.camera;
        let finite = c.position.is_finite()
            && c.world_up.is_finite()
            && c.yaw.is_finite()
            && c.pitch.is_finite()
            && c.speed.is_finite()
            && c.sensitivity.is_finite();
        if !finite {
            return Err(ConfigError::Invalid("camera values must be finite".into()));
        }
        if c.world_up.length_squared() == 0.0 {
            return Err(ConfigError::Invalid("camera world_up must be non-zero".into()));
        }
        // The camera derives `right` from front x world_up; parallel vectors leave no basis.
        let (yaw, pitch) = (c.yaw.to_radians(), c.pitch.clamp(-89.0, 89.0).to_radians());
        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        if front.cross(c.world_up.normalize()).length_squared() < 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "camera world_up {:?} is parallel to the view direction at yaw={} pitch={}",
                c.world_up, c.yaw, c.pitch
            )));
        }

        Ok(())
    }
}
