//! Extra furniture that only the furnished scene places, plus the shadow
//! transformation it applies to the shared groups.

use crate::math::hex_to_rgb;
use crate::scenes::furniture::{BLACK, WOOD};
use crate::types::{Material, PlacedObject, Shape};
use glam::Vec3;

pub const DARK_WOOD: [f32; 3] = hex_to_rgb(0x5C4033);
pub const BRASS: [f32; 3] = hex_to_rgb(0xB5A642);
pub const LAMP_GLOW: [f32; 3] = hex_to_rgb(0xFFD27F);
pub const SHADE_CREAM: [f32; 3] = hex_to_rgb(0xFFF4D6);
pub const CREST_BLUE: [f32; 3] = hex_to_rgb(0x203070);
pub const CREST_GOLD: [f32; 3] = hex_to_rgb(0xD4AF37);

/// Turns on both shadow flags for a whole group.
pub fn with_shadows(objects: Vec<PlacedObject>) -> Vec<PlacedObject> {
    objects
        .into_iter()
        .map(|mut object| {
            object.cast_shadow = true;
            object.receive_shadow = true;
            object
        })
        .collect()
}

/// Wardrobe against the left wall: body, two door panels, two knobs.
/// Exactly 5 objects.
pub fn wardrobe() -> Vec<PlacedObject> {
    let face_left = Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);

    vec![
        PlacedObject::new(
            Shape::Box {
                width: 1.0,
                height: 1.8,
                depth: 0.5,
            },
            Material::solid(DARK_WOOD),
            Vec3::new(-1.7, 0.9, 1.2),
        )
        .rotated(face_left),
        PlacedObject::new(
            Shape::Box {
                width: 0.46,
                height: 1.7,
                depth: 0.02,
            },
            Material::solid(WOOD),
            Vec3::new(-1.44, 0.9, 0.96),
        )
        .rotated(face_left),
        PlacedObject::new(
            Shape::Box {
                width: 0.46,
                height: 1.7,
                depth: 0.02,
            },
            Material::solid(WOOD),
            Vec3::new(-1.44, 0.9, 1.44),
        )
        .rotated(face_left),
        PlacedObject::new(
            Shape::Sphere {
                radius: 0.02,
                width_segments: 12,
                height_segments: 8,
            },
            Material::solid(BRASS),
            Vec3::new(-1.42, 0.9, 1.1),
        ),
        PlacedObject::new(
            Shape::Sphere {
                radius: 0.02,
                width_segments: 12,
                height_segments: 8,
            },
            Material::solid(BRASS),
            Vec3::new(-1.42, 0.9, 1.3),
        ),
    ]
}

/// Bookshelf on the back wall between bed and desk: carcass, four shelf
/// boards, three books. Exactly 8 objects.
pub fn bookshelf() -> Vec<PlacedObject> {
    let mut objects = vec![PlacedObject::new(
        Shape::Box {
            width: 1.0,
            height: 2.0,
            depth: 0.3,
        },
        Material::solid(DARK_WOOD),
        Vec3::new(-0.35, 1.0, -1.8),
    )];

    for shelf_y in [0.45, 0.9, 1.35, 1.8] {
        objects.push(PlacedObject::new(
            Shape::Box {
                width: 0.9,
                height: 0.03,
                depth: 0.25,
            },
            Material::solid(WOOD),
            Vec3::new(-0.35, shelf_y, -1.78),
        ));
    }

    let book_colors = [
        hex_to_rgb(0x8B0000),
        hex_to_rgb(0x006400),
        hex_to_rgb(0x00008B),
    ];
    for (i, color) in book_colors.into_iter().enumerate() {
        objects.push(PlacedObject::new(
            Shape::Box {
                width: 0.12,
                height: 0.3,
                depth: 0.2,
            },
            Material::solid(color),
            Vec3::new(-0.6 + i as f32 * 0.15, 1.07, -1.75),
        ));
    }

    objects
}

/// Nightstand beside the bed with a small lamp: stand, stem, shade, bulb.
/// Exactly 4 objects.
pub fn nightstand() -> Vec<PlacedObject> {
    vec![
        PlacedObject::new(
            Shape::Box {
                width: 0.4,
                height: 0.4,
                depth: 0.4,
            },
            Material::solid(WOOD),
            Vec3::new(-0.8, 0.2, -1.8),
        ),
        PlacedObject::new(
            Shape::Cylinder {
                top_radius: 0.02,
                bottom_radius: 0.03,
                height: 0.25,
                segments: 16,
            },
            Material::solid(BLACK),
            Vec3::new(-0.8, 0.525, -1.8),
        ),
        PlacedObject::new(
            Shape::Cylinder {
                top_radius: 0.08,
                bottom_radius: 0.12,
                height: 0.12,
                segments: 24,
            },
            Material::solid(SHADE_CREAM),
            Vec3::new(-0.8, 0.71, -1.8),
        ),
        PlacedObject::new(
            Shape::Sphere {
                radius: 0.03,
                width_segments: 12,
                height_segments: 8,
            },
            Material::unlit(LAMP_GLOW),
            Vec3::new(-0.8, 0.66, -1.8),
        ),
    ]
}

/// Decorative crest above the study corner: shield backplate, then a smaller
/// transparent overlay. The overlay is appended after the backplate (and the
/// whole group after the walls) so it blends over the geometry behind it.
/// Exactly 2 objects.
pub fn crest() -> Vec<PlacedObject> {
    let shield = vec![
        [0.0, 0.35],
        [-0.25, 0.2],
        [-0.25, -0.1],
        [0.0, -0.35],
        [0.25, -0.1],
        [0.25, 0.2],
    ];
    let overlay = shield
        .iter()
        .map(|&[x, y]| [x * 0.7, y * 0.7])
        .collect::<Vec<_>>();

    vec![
        PlacedObject::new(
            Shape::Polygon { points: shield },
            Material::solid(CREST_BLUE),
            Vec3::new(0.9, 2.3, -1.98),
        ),
        PlacedObject::new(
            Shape::Polygon { points: overlay },
            Material::translucent(CREST_GOLD, 0.6),
            Vec3::new(0.9, 2.3, -1.96),
        ),
    ]
}
