//! Rendering adapter: renderer-agnostic frame data.
//!
//! Holds everything a backend needs to draw one frame that does not depend
//! on a graphics API: the pyramid mesh, the perspective projection and the
//! model/view/projection triple derived from the camera.
//!
//! # Invariants
//! - Renderers read the camera; they never mutate it.
//! - The view matrix is taken from the camera after the frame's input update.

mod frame;
mod mesh;
mod projection;
mod renderer;

pub use frame::FrameTransforms;
pub use mesh::{ColorVertex, Mesh, pyramid};
pub use projection::Projection;
pub use renderer::{DebugTextRenderer, Renderer};
