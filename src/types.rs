use glam::Vec3;

/// Upper bound on lights uploaded to the GPU per scene.
pub const MAX_LIGHTS: usize = 8;

/// Geometry descriptor for one renderable object. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Flat rectangle in the XY plane, facing +Z before rotation.
    Plane {
        width: f32,
        height: f32,
    },
    Cylinder {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Planar outline in the XY plane, fan-triangulated, facing +Z.
    Polygon {
        points: Vec<[f32; 2]>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Responds to scene lights.
    Standard,
    /// Emits its base color regardless of lighting (lamp bulbs).
    Unlit,
}

/// Surface appearance descriptor. Immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
    pub shading: Shading,
}

impl Material {
    pub const fn solid(base_color: [f32; 3]) -> Self {
        Self {
            base_color,
            opacity: 1.0,
            transparent: false,
            shading: Shading::Standard,
        }
    }

    pub const fn translucent(base_color: [f32; 3], opacity: f32) -> Self {
        Self {
            base_color,
            opacity,
            transparent: true,
            shading: Shading::Standard,
        }
    }

    pub const fn unlit(base_color: [f32; 3]) -> Self {
        Self {
            base_color,
            opacity: 1.0,
            transparent: false,
            shading: Shading::Unlit,
        }
    }
}

/// A shape + material combination positioned in 3D space.
///
/// Rotation is Euler XYZ in radians. Placed objects are created once during
/// scene assembly and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl PlacedObject {
    /// An axis-aligned object with shadow flags off.
    pub fn new(shape: Shape, material: Material, position: Vec3) -> Self {
        Self {
            shape,
            material,
            position,
            rotation: Vec3::ZERO,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Light source descriptor. Created once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Directional {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
    },
    Spot {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
        /// Resolution of the shadow map the backend may allocate for this
        /// light. Carried as data; shadow passes are the backend's concern.
        shadow_map_size: u32,
    },
    Point {
        color: [f32; 3],
        intensity: f32,
        range: f32,
    },
}

// === GPU data structures ===

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Per-object uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub opacity: f32,
    pub unlit: u32,
    pub cast_shadow: u32,
    pub receive_shadow: u32,
    pub _pad: u32,
}

/// One light slot in the lights uniform. Layout matches the WGSL `Light`
/// struct (48 bytes, vec3 fields 16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub kind: u32,
    pub range: f32,
    pub _pad: [f32; 3],
}

pub const LIGHT_KIND_AMBIENT: u32 = 0;
pub const LIGHT_KIND_DIRECTIONAL: u32 = 1;
pub const LIGHT_KIND_SPOT: u32 = 2;
pub const LIGHT_KIND_POINT: u32 = 3;

impl GpuLight {
    const EMPTY: Self = Self {
        color: [0.0; 3],
        intensity: 0.0,
        position: [0.0; 3],
        kind: LIGHT_KIND_AMBIENT,
        range: 0.0,
        _pad: [0.0; 3],
    };

    pub fn from_light(light: &Light) -> Self {
        match *light {
            Light::Ambient { color, intensity } => Self {
                color,
                intensity,
                ..Self::EMPTY
            },
            Light::Directional {
                color,
                intensity,
                position,
            } => Self {
                color,
                intensity,
                position: position.to_array(),
                kind: LIGHT_KIND_DIRECTIONAL,
                ..Self::EMPTY
            },
            Light::Spot {
                color,
                intensity,
                position,
                ..
            } => Self {
                color,
                intensity,
                position: position.to_array(),
                kind: LIGHT_KIND_SPOT,
                ..Self::EMPTY
            },
            Light::Point {
                color,
                intensity,
                range,
            } => Self {
                color,
                intensity,
                kind: LIGHT_KIND_POINT,
                range,
                ..Self::EMPTY
            },
        }
    }
}

/// Lights uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [GpuLight; MAX_LIGHTS],
    pub count: u32,
    pub _pad: [u32; 3],
}

impl LightsUniform {
    /// Packs scene lights into the fixed-size uniform, truncating past
    /// `MAX_LIGHTS`.
    pub fn from_lights(lights: &[Light]) -> Self {
        let mut uniform = Self {
            lights: [GpuLight::EMPTY; MAX_LIGHTS],
            count: lights.len().min(MAX_LIGHTS) as u32,
            _pad: [0; 3],
        };
        for (slot, light) in uniform.lights.iter_mut().zip(lights.iter()) {
            *slot = GpuLight::from_light(light);
        }
        uniform
    }
}
