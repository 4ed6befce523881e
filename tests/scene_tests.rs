use bedroom_scene::scene::SceneGraph;
use bedroom_scene::scenes::{
    bed, bookshelf, create_furnished_scene, create_simple_scene, crest, nightstand, room_shell,
    study_area, wardrobe, window_unit, with_shadows,
};
use bedroom_scene::types::{Light, PlacedObject, Shape};
use glam::Vec3;

#[cfg(test)]
mod scene_tests {
    use super::*;

    /// The full simple setup sequence, reusable so tests can run it twice.
    fn populate_simple(scene: &mut SceneGraph) {
        scene.extend_objects(room_shell());
        scene.extend_objects(bed());
        scene.extend_objects(study_area());
        scene.extend_objects(window_unit());
        scene.add_light(Light::Ambient {
            color: bedroom_scene::math::hex_to_rgb(0x404040),
            intensity: 1.0,
        });
        scene.add_light(Light::Directional {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            position: Vec3::new(5.0, 10.0, 7.5),
        });
    }

    #[test]
    fn test_group_node_counts() {
        assert_eq!(room_shell().len(), 3, "room shell is exactly 3 surfaces");
        assert_eq!(bed().len(), 3, "bed is frame, mattress, pillow");
        assert_eq!(study_area().len(), 12);
        assert_eq!(window_unit().len(), 2, "window is frame plus glass");
        assert_eq!(wardrobe().len(), 5);
        assert_eq!(bookshelf().len(), 8);
        assert_eq!(nightstand().len(), 4);
        assert_eq!(crest().len(), 2);
    }

    #[test]
    fn test_simple_scene_totals() {
        let scene = create_simple_scene();
        assert_eq!(scene.object_count(), 20);
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.node_count(), 22);
    }

    #[test]
    fn test_furnished_scene_totals() {
        let scene = create_furnished_scene();
        assert_eq!(scene.object_count(), 39);
        assert_eq!(scene.light_count(), 4);
        assert_eq!(scene.node_count(), 43);
    }

    #[test]
    fn test_bed_frame_exact_placement() {
        let scene = create_simple_scene();
        let frame = scene
            .objects()
            .iter()
            .find(|object| {
                object.shape
                    == Shape::Box {
                        width: 1.0,
                        height: 0.2,
                        depth: 2.0,
                    }
            })
            .expect("bed frame present");
        // Exact equality: nothing perturbs the literals after construction.
        assert_eq!(frame.position, Vec3::new(-1.55, 0.1, -1.6));
        assert_eq!(frame.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_literal_placements_survive_setup() {
        let scene = create_simple_scene();
        let objects = scene.objects();

        // Insertion order: the room surfaces come first.
        assert_eq!(objects[0].position, Vec3::new(0.0, 1.5, -2.0), "back wall");
        assert_eq!(objects[1].position, Vec3::new(-2.0, 1.5, 0.0), "left wall");
        assert_eq!(
            objects[1].rotation,
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)
        );
        assert_eq!(objects[2].rotation.x, -std::f32::consts::FRAC_PI_2, "floor");

        // Mattress and pillow sit on the frame; compare against the same
        // expressions the builder uses.
        assert_eq!(objects[4].position, Vec3::new(-1.55, 0.2 + 0.03, -1.6));
        assert_eq!(objects[5].position, Vec3::new(-1.55, 0.2 + 0.1, -1.8));
    }

    #[test]
    fn test_window_glass_follows_frame() {
        let group = window_unit();
        assert!(
            !group[0].material.transparent,
            "frame is opaque and comes first"
        );
        assert!(group[1].material.transparent);
        assert_eq!(group[1].material.opacity, 0.5);
        assert_eq!(group[1].position, Vec3::new(-1.8, 1.5, -0.45));
    }

    #[test]
    fn test_crest_overlay_follows_backplate() {
        let group = crest();
        assert!(!group[0].material.transparent);
        assert!(group[1].material.transparent, "overlay blends over the plate");
        assert!(
            group[1].position.z > group[0].position.z,
            "overlay sits in front of the backplate"
        );
    }

    #[test]
    fn test_with_shadows_sets_both_flags() {
        for object in with_shadows(bed()) {
            assert!(object.cast_shadow);
            assert!(object.receive_shadow);
        }
    }

    #[test]
    fn test_simple_scene_has_no_shadow_flags() {
        let scene = create_simple_scene();
        for object in scene.objects() {
            assert!(!object.cast_shadow);
            assert!(!object.receive_shadow);
        }
    }

    #[test]
    fn test_furnished_furniture_casts_shadows() {
        let scene = create_furnished_scene();
        // Everything but the crest pair carries shadow flags.
        for object in &scene.objects()[..37] {
            assert!(object.cast_shadow);
            assert!(object.receive_shadow);
        }
        for object in &scene.objects()[37..] {
            assert!(!object.cast_shadow, "crest overlay group stays flat");
        }
    }

    #[test]
    fn test_furnished_light_set() {
        let scene = create_furnished_scene();
        let lights = scene.lights();
        assert!(matches!(lights[0], Light::Ambient { .. }));
        assert!(matches!(lights[1], Light::Directional { .. }));
        assert!(matches!(
            lights[2],
            Light::Spot {
                shadow_map_size: 1024,
                ..
            }
        ));
        assert!(matches!(lights[3], Light::Point { range, .. } if range == 3.0));
    }

    #[test]
    fn test_running_setup_twice_doubles_nodes() {
        // The builders are not idempotent; a second invocation simply appends
        // a second copy of every node.
        let mut scene = SceneGraph::new([0.0, 0.0, 0.0]);
        populate_simple(&mut scene);
        let once = scene.node_count();
        populate_simple(&mut scene);
        assert_eq!(scene.node_count(), once * 2);
    }

    #[test]
    fn test_group_is_a_fixed_table() {
        // No hidden state: every invocation yields the identical object list.
        assert_eq!(room_shell(), room_shell());
        assert_eq!(bed(), bed());
        assert_eq!(study_area(), study_area());
        assert_eq!(window_unit(), window_unit());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut scene = SceneGraph::new([0.0, 0.0, 0.0]);
        let group = bed();
        for object in group.clone() {
            scene.add_object(object);
        }
        let stored: Vec<PlacedObject> = scene.objects().to_vec();
        assert_eq!(stored, group);
    }
}
