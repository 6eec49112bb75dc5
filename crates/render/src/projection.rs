use glam::Mat4;
use terra_common::ProjectionConfig;

/// Perspective projection. Aspect ratio tracks the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(&ProjectionConfig::default(), 1920, 1080)
    }
}

impl Projection {
    pub fn new(config: &ProjectionConfig, width: u32, height: u32) -> Self {
        Self {
            fov_y_degrees: config.fov_y_degrees,
            aspect: aspect_ratio(width, height),
            near: config.near,
            far: config.far,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Right-handed perspective with a [0, 1] depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
