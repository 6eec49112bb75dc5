use crate::projection::Projection;
use glam::Mat4;
use terra_camera::Camera;

/// The three transforms uploaded each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransforms {
    /// Transforms for the current camera with an identity model matrix.
    pub fn new(camera: &Camera, projection: &Projection) -> Self {
        Self::with_model(Mat4::IDENTITY, camera, projection)
    }

    pub fn with_model(model: Mat4, camera: &Camera, projection: &Projection) -> Self {
        Self {
            model,
            view: camera.view_matrix(),
            projection: projection.matrix(),
        }
    }

    /// Combined clip-space transform, `projection * view * model`.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}
