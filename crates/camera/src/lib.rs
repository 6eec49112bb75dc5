//! Free-look fly camera for the terra viewer.
//!
//! Orientation is stored as yaw/pitch in degrees. The `front`/`right`/`up`
//! basis is derived from those angles and a fixed world-up vector, and is
//! rebuilt as a whole whenever orientation changes.
//!
//! # Invariants
//! - `front`, `right` and `up` are an orthonormal basis consistent with the
//!   current yaw/pitch after every mutation.
//! - Pitch stays within [-89, 89] degrees.
//! - `process_mouse_movement` is the only path that changes orientation.

mod camera;
mod movement;

pub use camera::{Camera, CameraState, PITCH_LIMIT};
pub use movement::{CameraMovement, ParseMovementError};
