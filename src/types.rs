use glam::{Mat3, Mat4, Vec3};

/// Per-scene uniform buffer data for GPU.
///
/// Field order and padding match the WGSL struct layout: vec3 fields are
/// padded out to 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_position: [f32; 3],
    pub _pad1: f32,
    pub light_color: [f32; 3],
    pub _pad2: f32,
    pub view_position: [f32; 3],
    pub _pad3: f32,
}

impl SceneUniform {
    pub fn new(
        view: Mat4,
        projection: Mat4,
        light_position: Vec3,
        light_color: Vec3,
        view_position: Vec3,
    ) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            light_position: light_position.to_array(),
            _pad1: 0.0,
            light_color: light_color.to_array(),
            _pad2: 0.0,
            view_position: view_position.to_array(),
            _pad3: 0.0,
        }
    }
}

/// Per-object uniform buffer data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    // mat3x3 columns are padded to vec4 in WGSL uniform layout
    pub normal_matrix: [[f32; 4]; 3],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        let normal = Mat3::from_mat4(model).inverse().transpose();

        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: [
                [normal.x_axis.x, normal.x_axis.y, normal.x_axis.z, 0.0],
                [normal.y_axis.x, normal.y_axis.y, normal.y_axis.z, 0.0],
                [normal.z_axis.x, normal.z_axis.y, normal.z_axis.z, 0.0],
            ],
        }
    }
}
