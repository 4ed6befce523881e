use bedroom_scene::renderer::draw_order;
use bedroom_scene::scenes::{create_furnished_scene, create_simple_scene};

#[cfg(test)]
mod draw_order_tests {
    use super::*;

    #[test]
    fn test_draw_order_covers_every_object_once() {
        let scene = create_furnished_scene();
        let mut order = draw_order(&scene);
        assert_eq!(order.len(), scene.object_count());
        order.sort_unstable();
        order.dedup();
        assert_eq!(order.len(), scene.object_count(), "no index repeats");
    }

    #[test]
    fn test_opaque_objects_draw_before_transparent() {
        let scene = create_furnished_scene();
        let order = draw_order(&scene);
        let first_transparent = order
            .iter()
            .position(|&i| scene.objects()[i].material.transparent)
            .expect("scene has transparent objects");
        for &index in &order[first_transparent..] {
            assert!(
                scene.objects()[index].material.transparent,
                "object {} drawn after the transparent cutover must blend",
                index
            );
        }
    }

    #[test]
    fn test_insertion_order_preserved_within_each_class() {
        let scene = create_furnished_scene();
        let order = draw_order(&scene);
        let opaque: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| !scene.objects()[i].material.transparent)
            .collect();
        let transparent: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| scene.objects()[i].material.transparent)
            .collect();
        assert!(opaque.windows(2).all(|w| w[0] < w[1]));
        assert!(transparent.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_glass_and_crest_overlay_are_the_transparent_set() {
        let scene = create_furnished_scene();
        let transparent: Vec<usize> = draw_order(&scene)
            .into_iter()
            .filter(|&i| scene.objects()[i].material.transparent)
            .collect();
        // Window glass (last of the window pair) and the crest overlay (the
        // scene's final object).
        assert_eq!(transparent, vec![19, 38]);
    }

    #[test]
    fn test_computing_draw_order_never_mutates_the_scene() {
        let scene = create_simple_scene();
        let before = scene.clone();
        let first = draw_order(&scene);
        for _ in 0..100 {
            assert_eq!(draw_order(&scene), first);
        }
        assert_eq!(scene, before, "rendering reads, never writes");
        assert_eq!(scene.node_count(), before.node_count());
    }
}
