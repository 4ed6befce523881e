//! Furniture groups shared by both bedroom scenes.
//!
//! Every group is a fixed table of placed objects at literal coordinates.
//! The groups take no input and are deliberately not idempotent: appending a
//! group twice duplicates its nodes.

use crate::math::hex_to_rgb;
use crate::types::{Material, PlacedObject, Shape};
use glam::Vec3;

pub const WOOD: [f32; 3] = hex_to_rgb(0x8B4513);
pub const WALL_GRAY: [f32; 3] = hex_to_rgb(0xD3D3D3);
pub const FLOOR_WOOD: [f32; 3] = hex_to_rgb(0xDEB887);
pub const SKY_BLUE: [f32; 3] = hex_to_rgb(0x87CEEB);
pub const WHITE: [f32; 3] = hex_to_rgb(0xFFFFFF);
pub const BLACK: [f32; 3] = hex_to_rgb(0x000000);
pub const CHAIR_GRAY: [f32; 3] = hex_to_rgb(0x808080);

const BED_WIDTH: f32 = 1.0;
const BED_LENGTH: f32 = 2.0;
const BED_HEIGHT: f32 = 0.2;

const TABLE_HEIGHT: f32 = 0.7;

/// Room shell: back wall, left wall, floor. Exactly 3 surfaces.
pub fn room_shell() -> Vec<PlacedObject> {
    vec![
        // Back wall
        PlacedObject::new(
            Shape::Plane {
                width: 4.0,
                height: 3.0,
            },
            Material::solid(WALL_GRAY),
            Vec3::new(0.0, 1.5, -2.0),
        ),
        // Left wall
        PlacedObject::new(
            Shape::Plane {
                width: 4.0,
                height: 3.0,
            },
            Material::solid(WALL_GRAY),
            Vec3::new(-2.0, 1.5, 0.0),
        )
        .rotated(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
        // Floor
        PlacedObject::new(
            Shape::Plane {
                width: 4.0,
                height: 4.0,
            },
            Material::solid(FLOOR_WOOD),
            Vec3::new(0.0, 0.0, 0.0),
        )
        .rotated(Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0)),
    ]
}

/// Bed in the corner of the two walls: frame, mattress, pillow. Exactly 3
/// objects.
pub fn bed() -> Vec<PlacedObject> {
    vec![
        PlacedObject::new(
            Shape::Box {
                width: BED_WIDTH,
                height: BED_HEIGHT,
                depth: BED_LENGTH,
            },
            Material::solid(WOOD),
            Vec3::new(-1.55, BED_HEIGHT / 2.0, -1.6),
        ),
        PlacedObject::new(
            Shape::Box {
                width: BED_WIDTH - 0.1,
                height: 0.05,
                depth: BED_LENGTH - 0.1,
            },
            Material::solid(WHITE),
            Vec3::new(-1.55, BED_HEIGHT + 0.03, -1.6),
        ),
        PlacedObject::new(
            Shape::Box {
                width: 0.5,
                height: 0.1,
                depth: 0.3,
            },
            Material::solid(WHITE),
            Vec3::new(-1.55, BED_HEIGHT + 0.1, -1.8),
        ),
    ]
}

/// Study corner: table with four legs, open laptop, chair with four legs and
/// a backrest. Exactly 12 objects.
pub fn study_area() -> Vec<PlacedObject> {
    let leg = Shape::Cylinder {
        top_radius: 0.05,
        bottom_radius: 0.05,
        height: TABLE_HEIGHT,
        segments: 32,
    };

    let mut objects = vec![PlacedObject::new(
        Shape::Box {
            width: 1.0,
            height: 0.05,
            depth: 0.5,
        },
        Material::solid(WOOD),
        Vec3::new(1.0, TABLE_HEIGHT, -1.2),
    )];

    let table_leg_positions = [
        Vec3::new(1.5, TABLE_HEIGHT / 2.0, -1.45),
        Vec3::new(0.5, TABLE_HEIGHT / 2.0, -1.45),
        Vec3::new(1.5, TABLE_HEIGHT / 2.0, -0.95),
        Vec3::new(0.5, TABLE_HEIGHT / 2.0, -0.95),
    ];
    for position in table_leg_positions {
        objects.push(PlacedObject::new(
            leg.clone(),
            Material::solid(WOOD),
            position,
        ));
    }

    // Laptop, open
    objects.push(PlacedObject::new(
        Shape::Box {
            width: 0.6,
            height: 0.03,
            depth: 0.4,
        },
        Material::solid(BLACK),
        Vec3::new(1.0, TABLE_HEIGHT + 0.03, -1.15),
    ));
    objects.push(
        PlacedObject::new(
            Shape::Box {
                width: 0.6,
                height: 0.4,
                depth: 0.02,
            },
            Material::solid(BLACK),
            Vec3::new(1.0, TABLE_HEIGHT + 0.25, -1.34),
        )
        .rotated(Vec3::new(std::f32::consts::PI / 1.8, 0.0, 0.0)),
    );

    objects.push(PlacedObject::new(
        Shape::Box {
            width: 0.5,
            height: 0.05,
            depth: 0.5,
        },
        Material::solid(CHAIR_GRAY),
        Vec3::new(1.0, 0.45, -1.7),
    ));

    let chair_leg_positions = [
        Vec3::new(1.25, 0.2, -1.9),
        Vec3::new(0.75, 0.2, -1.9),
        Vec3::new(1.25, 0.2, -1.5),
        Vec3::new(0.75, 0.2, -1.5),
    ];
    for position in chair_leg_positions {
        objects.push(PlacedObject::new(
            leg.clone(),
            Material::solid(CHAIR_GRAY),
            position,
        ));
    }

    objects.push(PlacedObject::new(
        Shape::Box {
            width: 0.5,
            height: 0.6,
            depth: 0.05,
        },
        Material::solid(CHAIR_GRAY),
        Vec3::new(1.0, 0.8, -1.95),
    ));

    objects
}

/// Window on the left wall: frame, then glass. The glass is appended after
/// the frame so the default depth/alpha handling blends it correctly.
/// Exactly 2 objects.
pub fn window_unit() -> Vec<PlacedObject> {
    let window_width = 1.5;
    let window_height = 1.0;

    vec![
        PlacedObject::new(
            Shape::Box {
                width: window_width,
                height: window_height,
                depth: 0.1,
            },
            Material::solid(BLACK),
            Vec3::new(-1.8, 1.5, -0.5),
        ),
        PlacedObject::new(
            Shape::Plane {
                width: window_width - 0.1,
                height: window_height - 0.1,
            },
            Material::translucent(SKY_BLUE, 0.5),
            Vec3::new(-1.8, 1.5, -0.45),
        ),
    ]
}
