use crate::types::CameraUniform;
use glam::{Mat4, Vec3};

/// Fixed-pose perspective camera. Configured once during setup; the scene
/// never moves it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// The pose both bedroom scenes share: up and back from the open corner,
    /// aimed at the center of the room.
    pub fn facing_room() -> Self {
        Self {
            position: Vec3::new(3.0, 3.5, 5.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        let view_proj = self.projection_matrix(aspect) * self.view_matrix();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}
