use crate::movement::CameraMovement;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use terra_common::CameraConfig;

/// Pitch limit in degrees. Looking straight up or down would make `front`
/// parallel to world-up and collapse the `right` vector.
pub const PITCH_LIMIT: f32 = 89.0;

const DEFAULT_SPEED: f32 = 2.5;
const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Fly camera with position, yaw/pitch orientation and a derived basis.
///
/// Camera motion lives entirely in the frame-update step; the render step
/// only reads [`Camera::view_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
}

/// Serializable snapshot of a camera, used for logs and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    /// Create a camera at `position` looking along the direction given by
    /// `yaw`/`pitch` (degrees). The basis is derived before returning.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let clamped = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if clamped != pitch {
            tracing::warn!(pitch, clamped, "initial camera pitch out of range");
        }

        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: clamped,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.position, config.world_up, config.yaw, config.pitch)
            .with_speed(config.speed)
            .with_sensitivity(config.sensitivity)
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees. Unbounded; it accumulates mouse input without wrapping.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, within [-89, 89].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            front: self.front,
            up: self.up,
            right: self.right,
            speed: self.speed,
            sensitivity: self.sensitivity,
        }
    }

    /// Right-handed look-at transform from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate along the camera basis by `speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Like [`Camera::process_keyboard`], but takes a direction token such as
    /// `"FORWARD"`. Tokens that name no direction are ignored.
    pub fn process_keyboard_token(&mut self, token: &str, delta_time: f32) {
        match token.parse::<CameraMovement>() {
            Ok(direction) => self.process_keyboard(direction, delta_time),
            Err(e) => tracing::trace!("ignoring movement: {e}"),
        }
    }

    /// Apply a cursor delta in pixels: scale by sensitivity, accumulate into
    /// yaw/pitch, clamp pitch, and rebuild the basis.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.update_camera_vectors();
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn start_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
    }

    fn assert_orthonormal(cam: &Camera) {
        for v in [cam.front(), cam.right(), cam.up()] {
            assert!(
                (v.length() - 1.0).abs() < EPS,
                "not unit length: {v:?} (yaw={}, pitch={})",
                cam.yaw(),
                cam.pitch()
            );
        }
        assert!(cam.front().dot(cam.right()).abs() < EPS);
        assert!(cam.front().dot(cam.up()).abs() < EPS);
        assert!(cam.right().dot(cam.up()).abs() < EPS);
    }

    #[test]
    fn initial_front_faces_negative_z() {
        let cam = start_camera();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn default_uses_standard_constants() {
        let cam = Camera::default();
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(cam.speed(), 2.5);
        assert_eq!(cam.sensitivity(), 0.1);
        assert_eq!(cam.world_up(), Vec3::Y);
    }

    #[test]
    fn basis_is_orthonormal_across_orientations() {
        let mut yaw = -720.0_f32;
        while yaw <= 720.0 {
            let mut pitch = -89.0_f32;
            while pitch <= 89.0 {
                let cam = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_orthonormal(&cam);
                pitch += 7.5;
            }
            yaw += 17.3;
        }
    }

    #[test]
    fn basis_stays_orthonormal_after_mouse_input() {
        let mut cam = start_camera();
        for i in 0..200 {
            let dx = ((i * 37) % 91) as f32 - 45.0;
            let dy = ((i * 53) % 71) as f32 - 35.0;
            cam.process_mouse_movement(dx * 10.0, dy * 10.0);
            assert_orthonormal(&cam);
        }
    }

    #[test]
    fn front_matches_yaw_pitch() {
        let mut cam = start_camera();
        cam.process_mouse_movement(300.0, 200.0);
        let (yaw, pitch) = (cam.yaw().to_radians(), cam.pitch().to_radians());
        let expected = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        assert!(cam.front().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn mouse_movement_scales_by_sensitivity() {
        let mut cam = start_camera();
        cam.process_mouse_movement(100.0, -50.0);
        assert!((cam.yaw() - (-80.0)).abs() < EPS);
        assert!((cam.pitch() - (-5.0)).abs() < EPS);
    }

    #[test]
    fn pitch_clamps_at_upper_limit() {
        let mut cam = start_camera();
        for _ in 0..10 {
            cam.process_mouse_movement(0.0, 10_000.0);
        }
        assert_eq!(cam.pitch(), 89.0);
        assert_orthonormal(&cam);
    }

    #[test]
    fn pitch_clamps_at_lower_limit() {
        let mut cam = start_camera();
        for _ in 0..10 {
            cam.process_mouse_movement(0.0, -10_000.0);
        }
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn initial_pitch_is_clamped() {
        let cam = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 120.0);
        assert_eq!(cam.pitch(), 89.0);
        assert_orthonormal(&cam);
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut cam = start_camera();
        cam.process_mouse_movement(5_000.0, 0.0);
        assert!((cam.yaw() - 410.0).abs() < 1e-3);
    }

    #[test]
    fn forward_moves_by_front_times_velocity() {
        let mut cam = start_camera();
        cam.process_mouse_movement(123.0, 45.0);
        let start = cam.position();
        let dt = 0.016;
        let velocity = cam.speed() * dt;

        cam.process_keyboard(CameraMovement::Forward, dt);
        assert_eq!(cam.position(), start + cam.front() * velocity);
    }

    #[test]
    fn backward_negates_forward() {
        let mut fwd = start_camera();
        fwd.process_mouse_movement(-77.0, 12.0);
        let mut back = fwd.clone();
        let start = fwd.position();
        let velocity = fwd.speed() * 0.5;

        fwd.process_keyboard(CameraMovement::Forward, 0.5);
        back.process_keyboard(CameraMovement::Backward, 0.5);
        assert_eq!(fwd.position(), start + fwd.front() * velocity);
        assert_eq!(back.position(), start - back.front() * velocity);
        assert!((fwd.position() - start).abs_diff_eq(start - back.position(), EPS));
    }

    #[test]
    fn left_and_right_negate_along_right() {
        let mut left = start_camera();
        let mut right = left.clone();
        let start = left.position();
        let velocity = left.speed() * 0.25;

        left.process_keyboard(CameraMovement::Left, 0.25);
        right.process_keyboard(CameraMovement::Right, 0.25);
        assert_eq!(left.position(), start - left.right() * velocity);
        assert_eq!(right.position(), start + right.right() * velocity);
        assert!(right.position().x > start.x);
        assert!(left.position().x < start.x);
    }

    #[test]
    fn keyboard_does_not_change_orientation() {
        let mut cam = start_camera();
        let before = (cam.front(), cam.right(), cam.up(), cam.yaw(), cam.pitch());
        for m in CameraMovement::ALL {
            cam.process_keyboard(m, 1.0);
        }
        assert_eq!(
            before,
            (cam.front(), cam.right(), cam.up(), cam.yaw(), cam.pitch())
        );
    }

    #[test]
    fn token_movement_matches_enum_movement() {
        let mut by_token = start_camera();
        let mut by_enum = by_token.clone();
        by_token.process_keyboard_token("FORWARD", 0.1);
        by_enum.process_keyboard(CameraMovement::Forward, 0.1);
        assert_eq!(by_token.position(), by_enum.position());
    }

    #[test]
    fn unknown_token_leaves_position_unchanged() {
        let mut cam = start_camera();
        let before = cam.clone();
        cam.process_keyboard_token("UP", 1.0);
        cam.process_keyboard_token("", 1.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn view_matrix_matches_standard_look_at() {
        let cam = start_camera();
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut cam = start_camera();
        cam.process_mouse_movement(250.0, -130.0);
        cam.process_keyboard(CameraMovement::Forward, 2.0);
        let eye = cam.view_matrix().transform_point3(cam.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-4));
        let ahead = cam
            .view_matrix()
            .transform_point3(cam.position() + cam.front());
        assert!(ahead.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn view_matrix_is_pure() {
        let cam = start_camera();
        let before = cam.clone();
        let a = cam.view_matrix();
        let b = cam.view_matrix();
        assert_eq!(a, b);
        assert_eq!(cam, before);
    }

    #[test]
    fn from_config_applies_speed_and_sensitivity() {
        let config = CameraConfig {
            speed: 7.0,
            sensitivity: 0.5,
            ..CameraConfig::default()
        };
        let cam = Camera::from_config(&config);
        assert_eq!(cam.speed(), 7.0);
        assert_eq!(cam.sensitivity(), 0.5);
        assert_eq!(cam.position(), config.position);
    }

    #[test]
    fn state_serializes_to_json() {
        let state = start_camera().state();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"yaw\":-90.0"));
        let back: CameraState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
