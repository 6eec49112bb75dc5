//! Desktop input: key bindings, actions, and the per-frame camera update.
//!
//! # Invariants
//! - The camera only sees typed movements and cursor deltas, never key codes.
//! - The first cursor sample after startup or refocus never moves the camera.

pub mod action;
pub mod bindings;
mod state;

pub use action::Action;
pub use bindings::MovementBindings;
pub use state::{InputState, MouseTracker};
