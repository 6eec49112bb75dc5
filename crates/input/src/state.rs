use crate::action::Action;
use crate::bindings::MovementBindings;
use glam::Vec2;
use std::collections::BTreeSet;
use terra_camera::{Camera, CameraMovement};
use terra_common::InputConfig;
use winit::keyboard::KeyCode;

/// Turns absolute cursor positions into per-frame deltas.
///
/// The first position after construction or [`MouseTracker::reset`] only
/// primes the tracker, so the camera never sees the jump from wherever the
/// cursor happened to be.
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
    pending: Vec2,
    flip_y: bool,
}

impl MouseTracker {
    pub fn new(flip_y: bool) -> Self {
        Self {
            flip_y,
            ..Self::default()
        }
    }

    /// Record a cursor position in window pixels.
    pub fn observe(&mut self, position: Vec2) {
        if let Some(last) = self.last {
            self.pending += position - last;
        }
        self.last = Some(position);
    }

    /// Forget the last position; the next observation yields no delta.
    pub fn reset(&mut self) {
        self.last = None;
        self.pending = Vec2::ZERO;
    }

    /// Take the delta accumulated since the previous call.
    pub fn take_delta(&mut self) -> Vec2 {
        let mut delta = std::mem::take(&mut self.pending);
        if self.flip_y {
            delta.y = -delta.y;
        }
        delta
    }
}

/// Input gathered between frames: held movement keys, cursor motion, focus.
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: MovementBindings,
    held: BTreeSet<CameraMovement>,
    mouse: MouseTracker,
    /// Unbounded cursor position built from raw motion while the real
    /// cursor is locked.
    virtual_cursor: Vec2,
    focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(MovementBindings::default(), &InputConfig::default())
    }
}

impl InputState {
    pub fn new(bindings: MovementBindings, config: &InputConfig) -> Self {
        Self {
            bindings,
            held: BTreeSet::new(),
            mouse: MouseTracker::new(config.flip_y),
            virtual_cursor: Vec2::ZERO,
            focused: true,
        }
    }

    /// Feed a key press or release. Returns one-shot actions (quit, HUD
    /// toggle) on press; movement keys only update the held set.
    /// Ignored while unfocused.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<Action> {
        if !self.focused {
            return None;
        }
        let action = self.bindings.classify(key)?;
        match action {
            Action::Move(direction) => {
                if pressed {
                    self.held.insert(direction);
                } else {
                    self.held.remove(&direction);
                }
                None
            }
            _ if pressed => Some(action),
            _ => None,
        }
    }

    /// Feed an absolute cursor position in window pixels.
    pub fn handle_cursor(&mut self, position: Vec2) {
        if !self.focused {
            return;
        }
        self.mouse.observe(position);
    }

    /// Feed relative pointer motion, as reported while the cursor is locked.
    pub fn handle_mouse_motion(&mut self, delta: Vec2) {
        if !self.focused {
            return;
        }
        self.virtual_cursor += delta;
        self.mouse.observe(self.virtual_cursor);
    }

    /// Track window focus. Losing focus releases every held key and
    /// re-primes the mouse tracker.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.held.clear();
            self.mouse.reset();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held.contains(&direction)
    }

    /// Per-frame update: one keyboard step per held direction, then the
    /// accumulated cursor delta. Does nothing while unfocused.
    pub fn apply(&mut self, camera: &mut Camera, delta_time: f32) {
        if !self.focused {
            return;
        }

        for direction in CameraMovement::ALL {
            if self.held.contains(&direction) {
                camera.process_keyboard(direction, delta_time);
            }
        }

        let delta = self.mouse.take_delta();
        camera.process_mouse_movement(delta.x, delta.y);
        if delta != Vec2::ZERO {
            tracing::trace!(dx = delta.x, dy = delta.y, "mouse look");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
    }

    #[test]
    fn first_observation_yields_zero_delta() {
        let mut mouse = MouseTracker::default();
        mouse.observe(Vec2::new(960.0, 540.0));
        assert_eq!(mouse.take_delta(), Vec2::ZERO);
    }

    #[test]
    fn deltas_accumulate_until_taken() {
        let mut mouse = MouseTracker::default();
        mouse.observe(Vec2::new(10.0, 10.0));
        mouse.observe(Vec2::new(15.0, 8.0));
        mouse.observe(Vec2::new(20.0, 12.0));
        assert_eq!(mouse.take_delta(), Vec2::new(10.0, 2.0));
        assert_eq!(mouse.take_delta(), Vec2::ZERO);
    }

    #[test]
    fn flip_y_negates_vertical_delta() {
        let mut mouse = MouseTracker::new(true);
        mouse.observe(Vec2::ZERO);
        mouse.observe(Vec2::new(3.0, 4.0));
        assert_eq!(mouse.take_delta(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn reset_drops_pending_motion() {
        let mut mouse = MouseTracker::default();
        mouse.observe(Vec2::ZERO);
        mouse.observe(Vec2::new(50.0, 50.0));
        mouse.reset();
        mouse.observe(Vec2::new(500.0, 500.0));
        assert_eq!(mouse.take_delta(), Vec2::ZERO);
    }

    #[test]
    fn held_keys_move_camera_each_frame() {
        let mut input = InputState::default();
        let mut cam = camera();
        assert_eq!(input.handle_key(KeyCode::KeyW, true), None);
        assert!(input.is_held(CameraMovement::Forward));

        input.apply(&mut cam, 1.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));

        input.handle_key(KeyCode::KeyW, false);
        let after = cam.position();
        input.apply(&mut cam, 1.0);
        assert_eq!(cam.position(), after);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.handle_key(KeyCode::KeyA, true);
        input.handle_key(KeyCode::KeyD, true);
        input.apply(&mut cam, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-5));
    }

    #[test]
    fn cursor_motion_rotates_camera() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.handle_cursor(Vec2::new(100.0, 100.0));
        input.apply(&mut cam, 0.016);
        assert_eq!(cam.yaw(), -90.0);

        input.handle_cursor(Vec2::new(200.0, 100.0));
        input.apply(&mut cam, 0.016);
        assert!((cam.yaw() - (-80.0)).abs() < 1e-4);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn raw_motion_skips_first_sample_then_accumulates() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.handle_mouse_motion(Vec2::new(40.0, 0.0));
        input.apply(&mut cam, 0.016);
        assert_eq!(cam.yaw(), -90.0);

        input.handle_mouse_motion(Vec2::new(30.0, 10.0));
        input.handle_mouse_motion(Vec2::new(20.0, 10.0));
        input.apply(&mut cam, 0.016);
        assert!((cam.yaw() - (-85.0)).abs() < 1e-4);
        assert!((cam.pitch() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn one_shot_actions_fire_on_press_only() {
        let mut input = InputState::default();
        assert_eq!(input.handle_key(KeyCode::Escape, true), Some(Action::Quit));
        assert_eq!(input.handle_key(KeyCode::Escape, false), None);
        assert_eq!(input.handle_key(KeyCode::F1, true), Some(Action::ToggleHud));
        assert_eq!(input.handle_key(KeyCode::KeyZ, true), None);
    }

    #[test]
    fn unfocused_input_is_ignored() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.handle_key(KeyCode::KeyW, true);
        input.set_focused(false);
        assert!(!input.is_held(CameraMovement::Forward));

        input.handle_key(KeyCode::KeyW, true);
        input.handle_cursor(Vec2::ZERO);
        input.handle_cursor(Vec2::new(300.0, 300.0));
        let before = cam.clone();
        input.apply(&mut cam, 1.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn input_while_unfocused_is_dropped_after_refocus() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.set_focused(false);
        assert_eq!(input.handle_key(KeyCode::KeyW, true), None);
        assert_eq!(input.handle_key(KeyCode::Escape, true), None);
        input.handle_cursor(Vec2::ZERO);
        input.handle_cursor(Vec2::new(300.0, 300.0));
        input.handle_mouse_motion(Vec2::new(120.0, -40.0));
        input.set_focused(true);

        assert!(!input.is_held(CameraMovement::Forward));
        let before = cam.clone();
        input.apply(&mut cam, 1.0);
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
        assert_eq!(cam.position(), before.position());
    }

    #[test]
    fn refocus_does_not_jump() {
        let mut input = InputState::default();
        let mut cam = camera();
        input.handle_cursor(Vec2::ZERO);
        input.set_focused(false);
        input.set_focused(true);
        input.handle_cursor(Vec2::new(800.0, 600.0));
        input.apply(&mut cam, 0.016);
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
    }
}
