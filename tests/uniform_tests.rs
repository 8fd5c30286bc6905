use glam::{Mat4, Vec3};

use cube_light::renderer::{cube_model_matrix, lamp_model_matrix};
use cube_light::types::{ModelUniform, SceneUniform};

#[test]
fn uniform_sizes_are_16_byte_multiples() {
    // WGSL uniform structs round up to 16-byte alignment
    assert_eq!(std::mem::size_of::<SceneUniform>() % 16, 0);
    assert_eq!(std::mem::size_of::<ModelUniform>() % 16, 0);
}

#[test]
fn scene_uniform_layout() {
    // view + projection + three padded vec3s
    assert_eq!(std::mem::size_of::<SceneUniform>(), 64 + 64 + 3 * 16);
}

#[test]
fn model_uniform_layout() {
    // model + mat3x3 stored as three vec4 columns
    assert_eq!(std::mem::size_of::<ModelUniform>(), 64 + 48);
}

#[test]
fn normal_matrix_of_uniform_scale_is_inverse_scale() {
    let uniform = ModelUniform::new(Mat4::from_scale(Vec3::splat(2.0)));

    for (column, axis) in uniform.normal_matrix.iter().zip(0..3) {
        for (i, value) in column.iter().take(3).enumerate() {
            let expected = if i == axis { 0.5 } else { 0.0 };
            assert!((value - expected).abs() < 1e-6);
        }
        assert_eq!(column[3], 0.0);
    }
}

#[test]
fn normal_matrix_of_rotation_is_the_rotation() {
    let rotation = Mat4::from_rotation_y(0.7);
    let uniform = ModelUniform::new(rotation);

    let expected = glam::Mat3::from_mat4(rotation);
    let columns = [expected.x_axis, expected.y_axis, expected.z_axis];

    for (column, expected) in uniform.normal_matrix.iter().zip(columns) {
        for (value, want) in column.iter().take(3).zip(expected.to_array()) {
            assert!((value - want).abs() < 1e-6);
        }
    }
}

#[test]
fn cube_model_places_cube_in_scene() {
    let model = cube_model_matrix();
    let center = model.transform_point3(Vec3::ZERO);

    assert!((center - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);

    // corners end up 0.4 times their original distance from the center
    let corner = model.transform_point3(Vec3::splat(0.5)) - center;
    assert!((corner.length() - Vec3::splat(0.2).length()).abs() < 1e-5);
}

#[test]
fn lamp_model_follows_light_position() {
    let light_position = Vec3::new(1.5, 0.0, 0.0);
    let model = lamp_model_matrix(light_position);

    assert!((model.transform_point3(Vec3::ZERO) - light_position).length() < 1e-6);

    // marker is scaled to a fifth of the cube
    let edge = model.transform_vector3(Vec3::X);
    assert!((edge.length() - 0.2).abs() < 1e-6);
}

#[test]
fn scene_uniform_round_trips_matrices() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);

    let uniform = SceneUniform::new(
        view,
        projection,
        Vec3::new(1.5, 0.0, 0.0),
        Vec3::ONE,
        Vec3::new(0.0, 0.0, 3.0),
    );

    assert_eq!(Mat4::from_cols_array_2d(&uniform.view), view);
    assert_eq!(Mat4::from_cols_array_2d(&uniform.projection), projection);
    assert_eq!(uniform.light_color, [1.0, 1.0, 1.0]);
}
