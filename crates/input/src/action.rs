use terra_camera::CameraMovement;

/// A high-level action produced from raw key input.
///
/// The frame-update step consumes actions, never raw key codes, so bindings
/// can change without touching camera or shell logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Translate the camera while the key is held.
    Move(CameraMovement),
    /// Close the viewer.
    Quit,
    /// Show or hide the camera HUD.
    ToggleHud,
}
