use bedroom_scene::camera::Camera;
use glam::{Vec3, Vec4};

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_camera_pose_literals() {
        let camera = Camera::facing_room();
        assert_eq!(camera.position, Vec3::new(3.0, 3.5, 5.0));
        assert_eq!(camera.target, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(camera.fov_y_degrees, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_view_matrix_centers_the_eye() {
        let camera = Camera::facing_room();
        let eye_in_view = camera.view_matrix().transform_point3(camera.position);
        assert!(eye_in_view.length() < 1e-5, "eye maps to the view origin");
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::facing_room();
        let view_proj = camera.projection_matrix(4.0 / 3.0) * camera.view_matrix();
        let clip = view_proj * Vec4::new(camera.target.x, camera.target.y, camera.target.z, 1.0);
        assert!(clip.w > 0.0, "target is in front of the camera");
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < 1e-4 && ndc_y.abs() < 1e-4);
    }

    #[test]
    fn test_uniform_carries_the_pose() {
        let camera = Camera::facing_room();
        let uniform = camera.to_uniform(1.0);
        assert_eq!(uniform.position, [3.0, 3.5, 5.0]);
    }
}
