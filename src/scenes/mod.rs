pub mod furnished;
pub mod furniture;

use crate::math::hex_to_rgb;
use crate::scene::SceneGraph;
use crate::types::Light;
use glam::Vec3;

pub use furnished::{bookshelf, crest, nightstand, wardrobe, with_shadows};
pub use furniture::{bed, room_shell, study_area, window_unit};

/// The two scenes are independent alternates, never composed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    Simple,
    Furnished,
}

pub fn create_scene(kind: SceneKind) -> SceneGraph {
    match kind {
        SceneKind::Simple => create_simple_scene(),
        SceneKind::Furnished => create_furnished_scene(),
    }
}

/// Basic bedroom: room shell, bed, study corner, window. No shadows.
pub fn create_simple_scene() -> SceneGraph {
    let mut scene = SceneGraph::new(furniture::SKY_BLUE);

    scene.extend_objects(room_shell());
    scene.extend_objects(bed());
    scene.extend_objects(study_area());
    scene.extend_objects(window_unit());

    scene.add_light(Light::Ambient {
        color: hex_to_rgb(0x404040),
        intensity: 1.0,
    });
    scene.add_light(Light::Directional {
        color: hex_to_rgb(0xFFFFFF),
        intensity: 1.0,
        position: Vec3::new(5.0, 10.0, 7.5),
    });

    println!("Simple bedroom scene created: {} nodes", scene.node_count());
    scene
}

/// Same room with shadow flags on, extra furniture, and two more lights.
pub fn create_furnished_scene() -> SceneGraph {
    let mut scene = SceneGraph::new(furniture::SKY_BLUE);

    scene.extend_objects(with_shadows(room_shell()));
    scene.extend_objects(with_shadows(bed()));
    scene.extend_objects(with_shadows(study_area()));
    scene.extend_objects(with_shadows(window_unit()));
    scene.extend_objects(with_shadows(wardrobe()));
    scene.extend_objects(with_shadows(bookshelf()));
    scene.extend_objects(with_shadows(nightstand()));
    scene.extend_objects(crest());

    scene.add_light(Light::Ambient {
        color: hex_to_rgb(0x404040),
        intensity: 1.0,
    });
    scene.add_light(Light::Directional {
        color: hex_to_rgb(0xFFFFFF),
        intensity: 1.0,
        position: Vec3::new(5.0, 10.0, 7.5),
    });
    scene.add_light(Light::Spot {
        color: hex_to_rgb(0xFFF1E0),
        intensity: 0.8,
        position: Vec3::new(1.0, 2.8, -1.2),
        shadow_map_size: 1024,
    });
    scene.add_light(Light::Point {
        color: furnished::LAMP_GLOW,
        intensity: 0.6,
        range: 3.0,
    });

    println!(
        "Furnished bedroom scene created: {} nodes",
        scene.node_count()
    );
    scene
}
