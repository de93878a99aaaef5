//! GPU-ready camera data.

use glam::Mat4;

use crate::camera::CameraModel;

/// GPU-compatible camera uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Perspective transform onto the view plane.
    pub perspective: [[f32; 4]; 4],
    /// Half extents of the captured image on the view plane.
    pub image_plane_extent: [f32; 2],
    /// Distance to the view plane in logical units.
    pub distance_to_view_plane: f32,
    /// Largest angle of view in radians.
    pub angle_of_view: f32,
}

impl CameraUniforms {
    /// Converts a camera model to single precision uniforms.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_camera(camera: &CameraModel) -> Self {
        Self {
            perspective: camera.perspective_transform().as_mat4().to_cols_array_2d(),
            image_plane_extent: camera.image_plane_extent().as_vec2().to_array(),
            distance_to_view_plane: camera.distance_to_view_plane() as f32,
            angle_of_view: camera.angle_of_view() as f32,
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            perspective: Mat4::IDENTITY.to_cols_array_2d(),
            image_plane_extent: [1.0, 1.0],
            distance_to_view_plane: 1.0,
            angle_of_view: std::f32::consts::FRAC_PI_2,
        }
    }
}
