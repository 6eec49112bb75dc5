//! Key bindings as data, so the shell never hardcodes key matches.

use crate::action::Action;
use terra_camera::CameraMovement;
use winit::keyboard::KeyCode;

/// Keyboard bindings for the viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub quit: KeyCode,
    pub toggle_hud: KeyCode,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            quit: KeyCode::Escape,
            toggle_hud: KeyCode::F1,
        }
    }
}

impl MovementBindings {
    /// Map a physical key to the action bound to it, if any.
    pub fn classify(&self, key: KeyCode) -> Option<Action> {
        if key == self.forward {
            Some(Action::Move(CameraMovement::Forward))
        } else if key == self.backward {
            Some(Action::Move(CameraMovement::Backward))
        } else if key == self.left {
            Some(Action::Move(CameraMovement::Left))
        } else if key == self.right {
            Some(Action::Move(CameraMovement::Right))
        } else if key == self.quit {
            Some(Action::Quit)
        } else if key == self.toggle_hud {
            Some(Action::ToggleHud)
        } else {
            None
        }
    }
}
