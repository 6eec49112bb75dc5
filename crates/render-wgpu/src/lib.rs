//! wgpu render backend for the terra viewer.
//!
//! Uploads one vertex-coloured mesh and draws it each frame with the
//! model/view/projection transforms supplied by the caller.
//!
//! # Invariants
//! - The renderer never touches the camera; it only consumes `FrameTransforms`.
//! - Depth is cleared to 1.0 each frame and tested with `Less`.

mod context;
mod error;
mod gpu;
mod shaders;

pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::WgpuRenderer;
pub use shaders::{PYRAMID_SHADER, load_shader_source};
