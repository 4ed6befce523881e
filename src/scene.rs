use crate::types::{Light, PlacedObject};

/// Retained collection of everything composing one visual frame.
///
/// Composition is insertion-only: nodes are appended during setup and never
/// removed or updated. Insertion order is preserved and carries the draw
/// order the transparent overlays rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    background: [f32; 3],
    objects: Vec<PlacedObject>,
    lights: Vec<Light>,
}

impl SceneGraph {
    pub fn new(background: [f32; 3]) -> Self {
        Self {
            background,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: PlacedObject) {
        self.objects.push(object);
    }

    /// Appends a whole furniture group, preserving its internal order.
    pub fn extend_objects(&mut self, objects: impl IntoIterator<Item = PlacedObject>) {
        self.objects.extend(objects);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Total node count, objects plus lights.
    pub fn node_count(&self) -> usize {
        self.objects.len() + self.lights.len()
    }
}
