use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: position then RGB colour.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed triangle mesh held on the CPU before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Square-based pyramid: unit base on the XZ plane, apex at y = 0.5.
pub fn pyramid() -> Mesh {
    #[rustfmt::skip]
    let vertices = vec![
        // Base
        ColorVertex { position: [-0.5, 0.0, -0.5], color: [1.0, 0.0, 0.0] },
        ColorVertex { position: [ 0.5, 0.0, -0.5], color: [0.0, 1.0, 0.0] },
        ColorVertex { position: [ 0.5, 0.0,  0.5], color: [0.0, 0.0, 1.0] },
        ColorVertex { position: [-0.5, 0.0,  0.5], color: [1.0, 1.0, 0.0] },
        // Apex
        ColorVertex { position: [ 0.0, 0.5,  0.0], color: [1.0, 1.0, 1.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0, // base
        0,1,4,        // sides
        1,2,4,
        2,3,4,
        3,0,4,
    ];
    Mesh { vertices, indices }
}
