use crate::types::{PlacedObject, Shape};
use glam::{EulerRot, Mat4, Vec3};

/// CPU-side triangle mesh, tessellated once at renderer init and uploaded
/// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Interleaves position and normal per vertex for the vertex buffer
    /// (stride 24 bytes).
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.positions.len() * 6);
        for (pos, normal) in self.positions.iter().zip(self.normals.iter()) {
            data.extend_from_slice(pos);
            data.extend_from_slice(normal);
        }
        data
    }

    /// Appends a quad as two triangles. `corners` wind counter-clockwise
    /// when viewed from the `normal` side.
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 4]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Model matrix for a placed object: translation, then Euler XYZ rotation.
/// No scale exists anywhere in the data model.
pub fn model_matrix(object: &PlacedObject) -> Mat4 {
    Mat4::from_translation(object.position)
        * Mat4::from_euler(
            EulerRot::XYZ,
            object.rotation.x,
            object.rotation.y,
            object.rotation.z,
        )
}

/// Tessellates a shape descriptor into triangles around the local origin.
pub fn tessellate(shape: &Shape) -> MeshData {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => tessellate_box(width, height, depth),
        Shape::Plane { width, height } => tessellate_plane(width, height),
        Shape::Cylinder {
            top_radius,
            bottom_radius,
            height,
            segments,
        } => tessellate_cylinder(top_radius, bottom_radius, height, segments),
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        } => tessellate_sphere(radius, width_segments, height_segments),
        Shape::Polygon { ref points } => tessellate_polygon(points),
    }
}

/// 24 vertices, 36 indices, per-face normals.
fn tessellate_box(width: f32, height: f32, depth: f32) -> MeshData {
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = MeshData::with_capacity(24, 36);

    // +X
    mesh.push_quad(
        [
            [hw, -hh, hd],
            [hw, -hh, -hd],
            [hw, hh, -hd],
            [hw, hh, hd],
        ],
        [1.0, 0.0, 0.0],
    );
    // -X
    mesh.push_quad(
        [
            [-hw, -hh, -hd],
            [-hw, -hh, hd],
            [-hw, hh, hd],
            [-hw, hh, -hd],
        ],
        [-1.0, 0.0, 0.0],
    );
    // +Y
    mesh.push_quad(
        [
            [-hw, hh, hd],
            [hw, hh, hd],
            [hw, hh, -hd],
            [-hw, hh, -hd],
        ],
        [0.0, 1.0, 0.0],
    );
    // -Y
    mesh.push_quad(
        [
            [-hw, -hh, -hd],
            [hw, -hh, -hd],
            [hw, -hh, hd],
            [-hw, -hh, hd],
        ],
        [0.0, -1.0, 0.0],
    );
    // +Z
    mesh.push_quad(
        [
            [-hw, -hh, hd],
            [hw, -hh, hd],
            [hw, hh, hd],
            [-hw, hh, hd],
        ],
        [0.0, 0.0, 1.0],
    );
    // -Z
    mesh.push_quad(
        [
            [hw, -hh, -hd],
            [-hw, -hh, -hd],
            [-hw, hh, -hd],
            [hw, hh, -hd],
        ],
        [0.0, 0.0, -1.0],
    );

    mesh
}

/// 4 vertices, 6 indices, facing +Z.
fn tessellate_plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut mesh = MeshData::with_capacity(4, 6);
    mesh.push_quad(
        [
            [-hw, -hh, 0.0],
            [hw, -hh, 0.0],
            [hw, hh, 0.0],
            [-hw, hh, 0.0],
        ],
        [0.0, 0.0, 1.0],
    );
    mesh
}

/// Side wall plus both end caps, Y axis through the centers.
fn tessellate_cylinder(top_radius: f32, bottom_radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let ring = segments as usize + 1;
    let mut mesh = MeshData::with_capacity(ring * 2 + (ring + 1) * 2, segments as usize * 12);

    // Side: two rings sharing a seam vertex. Slanted normal accounts for the
    // radius difference between the ends.
    let slope = (bottom_radius - top_radius) / height;
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, slope, sin).normalize().to_array();
        mesh.positions
            .push([cos * top_radius, half, sin * top_radius]);
        mesh.normals.push(normal);
        mesh.positions
            .push([cos * bottom_radius, -half, sin * bottom_radius]);
        mesh.normals.push(normal);
    }
    for i in 0..segments {
        let a = i * 2;
        mesh.indices
            .extend_from_slice(&[a, a + 1, a + 3, a, a + 3, a + 2]);
    }

    // Caps: center vertex plus its own ring so the normals stay flat.
    for &(y, radius, ny) in &[(half, top_radius, 1.0f32), (-half, bottom_radius, -1.0)] {
        let center = mesh.positions.len() as u32;
        mesh.positions.push([0.0, y, 0.0]);
        mesh.normals.push([0.0, ny, 0.0]);
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = angle.sin_cos();
            mesh.positions.push([cos * radius, y, sin * radius]);
            mesh.normals.push([0.0, ny, 0.0]);
        }
        for i in 0..segments {
            let (a, b) = (center + 1 + i, center + 2 + i);
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, b, a]);
            } else {
                mesh.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }

    mesh
}

/// Latitude/longitude grid: (w+1)*(h+1) vertices, w*h*6 indices.
fn tessellate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut mesh = MeshData::with_capacity(((w + 1) * (h + 1)) as usize, (w * h * 6) as usize);

    for row in 0..=h {
        let v = row as f32 / h as f32;
        let phi = v * std::f32::consts::PI;
        for col in 0..=w {
            let u = col as f32 / w as f32;
            let theta = u * std::f32::consts::TAU;
            let normal = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.positions.push((normal * radius).to_array());
            mesh.normals.push(normal.to_array());
        }
    }

    let stride = w + 1;
    for row in 0..h {
        for col in 0..w {
            let a = row * stride + col;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    mesh
}

/// Triangle fan over the outline, facing +Z. Assumes a convex,
/// counter-clockwise outline, which every crest in the scene satisfies.
fn tessellate_polygon(points: &[[f32; 2]]) -> MeshData {
    let mut mesh = MeshData::with_capacity(points.len(), points.len().saturating_sub(2) * 3);
    for &[x, y] in points {
        mesh.positions.push([x, y, 0.0]);
        mesh.normals.push([0.0, 0.0, 1.0]);
    }
    for i in 1..points.len().saturating_sub(1) as u32 {
        mesh.indices.extend_from_slice(&[0, i, i + 1]);
    }
    mesh
}
