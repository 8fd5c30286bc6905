//! Cube geometry: 36 vertices with position and per-face normal.

/// Vertex with position and normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl CubeVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const fn vertex(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

/// Unit cube centered at the origin, two triangles per face.
pub const CUBE_VERTICES: [CubeVertex; 36] = [
    // Back face (Z-)
    vertex([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    vertex([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    vertex([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    vertex([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    vertex([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    vertex([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    // Front face (Z+)
    vertex([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    vertex([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    vertex([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    vertex([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    // Left face (X-)
    vertex([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    vertex([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    vertex([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    vertex([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    vertex([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    vertex([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    // Right face (X+)
    vertex([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    vertex([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    vertex([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    vertex([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    vertex([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    vertex([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    // Bottom face (Y-)
    vertex([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    vertex([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    vertex([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    vertex([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    vertex([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    vertex([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    // Top face (Y+)
    vertex([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    vertex([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    vertex([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    vertex([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
];

pub fn vertex_count() -> u32 {
    CUBE_VERTICES.len() as u32
}
