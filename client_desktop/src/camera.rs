//! Camera for Pong game
//!
//! Orthographic pixel-space camera: (0, 0) is the top-left corner of the
//! window and y grows downward, matching the simulation.

use glam::Mat4;

pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    pub fn pixel_space(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_pixel_corners_map_to_clip_space() {
        let camera = Camera::pixel_space(800.0, 600.0);
        let top_left = camera.projection.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let bottom_right = camera.projection.project_point3(Vec3::new(800.0, 600.0, 0.0));

        assert!((top_left.x + 1.0).abs() < 1e-6 && (top_left.y - 1.0).abs() < 1e-6);
        assert!((bottom_right.x - 1.0).abs() < 1e-6 && (bottom_right.y + 1.0).abs() < 1e-6);
    }
}
