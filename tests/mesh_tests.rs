use bedroom_scene::mesh::{model_matrix, tessellate};
use bedroom_scene::types::{Material, PlacedObject, Shape};
use glam::Vec3;

#[cfg(test)]
mod mesh_tests {
    use super::*;

    fn assert_unit_normals(mesh: &bedroom_scene::mesh::MeshData) {
        for normal in &mesh.normals {
            let len = Vec3::from_array(*normal).length();
            assert!((len - 1.0).abs() < 1e-5, "normal length {} not unit", len);
        }
    }

    #[test]
    fn test_box_tessellation_counts() {
        let mesh = tessellate(&Shape::Box {
            width: 1.0,
            height: 0.2,
            depth: 2.0,
        });
        assert_eq!(mesh.vertex_count(), 24, "4 vertices per face");
        assert_eq!(mesh.index_count(), 36, "2 triangles per face");
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_box_extents_match_dimensions() {
        let mesh = tessellate(&Shape::Box {
            width: 2.0,
            height: 4.0,
            depth: 6.0,
        });
        let max_x = mesh.positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let max_y = mesh.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let max_z = mesh.positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert_eq!([max_x, max_y, max_z], [1.0, 2.0, 3.0], "half extents");
    }

    #[test]
    fn test_plane_tessellation() {
        let mesh = tessellate(&Shape::Plane {
            width: 4.0,
            height: 3.0,
        });
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        for normal in &mesh.normals {
            assert_eq!(*normal, [0.0, 0.0, 1.0], "plane faces +Z");
        }
        for position in &mesh.positions {
            assert_eq!(position[2], 0.0, "plane lies in the XY plane");
        }
    }

    #[test]
    fn test_cylinder_tessellation_counts() {
        let segments = 8;
        let mesh = tessellate(&Shape::Cylinder {
            top_radius: 0.05,
            bottom_radius: 0.05,
            height: 0.7,
            segments,
        });
        // Side: 2 rings of segments+1. Each cap: a center plus its own ring.
        let side = (segments as usize + 1) * 2;
        let caps = 2 * (segments as usize + 2);
        assert_eq!(mesh.vertex_count(), side + caps);
        assert_eq!(mesh.index_count(), (segments as usize) * 12);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_cylinder_cap_normals_are_axial() {
        let mesh = tessellate(&Shape::Cylinder {
            top_radius: 0.1,
            bottom_radius: 0.1,
            height: 1.0,
            segments: 6,
        });
        let up = mesh.normals.iter().filter(|n| **n == [0.0, 1.0, 0.0]).count();
        let down = mesh
            .normals
            .iter()
            .filter(|n| **n == [0.0, -1.0, 0.0])
            .count();
        assert_eq!(up, 8, "top cap center plus ring");
        assert_eq!(down, 8, "bottom cap center plus ring");
    }

    #[test]
    fn test_sphere_tessellation_counts() {
        let mesh = tessellate(&Shape::Sphere {
            radius: 0.5,
            width_segments: 8,
            height_segments: 6,
        });
        assert_eq!(mesh.vertex_count(), 9 * 7);
        assert_eq!(mesh.index_count(), 8 * 6 * 6);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_sphere_vertices_lie_on_radius() {
        let radius = 0.3;
        let mesh = tessellate(&Shape::Sphere {
            radius,
            width_segments: 12,
            height_segments: 8,
        });
        for position in &mesh.positions {
            let distance = Vec3::from_array(*position).length();
            assert!((distance - radius).abs() < 1e-5);
        }
    }

    #[test]
    fn test_polygon_fan_triangulation() {
        let mesh = tessellate(&Shape::Polygon {
            points: vec![
                [0.0, 0.35],
                [-0.25, 0.2],
                [-0.25, -0.1],
                [0.0, -0.35],
                [0.25, -0.1],
                [0.25, 0.2],
            ],
        });
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.index_count(), 4 * 3, "n-2 fan triangles");
        for normal in &mesh.normals {
            assert_eq!(*normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_interleaved_layout() {
        let mesh = tessellate(&Shape::Plane {
            width: 2.0,
            height: 2.0,
        });
        let data = mesh.interleaved();
        assert_eq!(data.len(), mesh.vertex_count() * 6);
        assert_eq!(&data[0..3], &mesh.positions[0]);
        assert_eq!(&data[3..6], &mesh.normals[0]);
    }

    #[test]
    fn test_model_matrix_translates() {
        let object = PlacedObject::new(
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::solid([1.0, 1.0, 1.0]),
            Vec3::new(-1.55, 0.1, -1.6),
        );
        let moved = model_matrix(&object).transform_point3(Vec3::ZERO);
        assert_eq!(moved, Vec3::new(-1.55, 0.1, -1.6));
    }

    #[test]
    fn test_model_matrix_rotates_before_translating() {
        let object = PlacedObject::new(
            Shape::Plane {
                width: 1.0,
                height: 1.0,
            },
            Material::solid([1.0, 1.0, 1.0]),
            Vec3::new(5.0, 0.0, 0.0),
        )
        .rotated(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));

        // A +Z offset in local space ends up along +X after the yaw, still
        // anchored at the translated origin.
        let moved = model_matrix(&object).transform_point3(Vec3::Z);
        assert!((moved - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-5);
    }
}
