use crate::error::RenderError;
use std::borrow::Cow;
use std::path::Path;

/// WGSL shader for the vertex-coloured pyramid.
///
/// Entry points: `vs_main`, `fs_main`. Vertex inputs: position at
/// location 0, colour at location 1.
pub const PYRAMID_SHADER: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> transforms: Transforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.projection
        * transforms.view
        * transforms.model
        * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Resolve the pyramid shader source: the file at `path` if given, else the
/// embedded shader. A replacement must keep the same entry points and
/// bindings.
pub fn load_shader_source(path: Option<&Path>) -> Result<Cow<'static, str>, RenderError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(PYRAMID_SHADER));
    };
    let source = std::fs::read_to_string(path).map_err(|source| RenderError::ShaderIo {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("using shader from {}", path.display());
    Ok(Cow::Owned(source))
}
