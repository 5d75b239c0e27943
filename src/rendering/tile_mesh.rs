use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use super::{DrawSurface, Rgb};

/// Depth step between consecutive primitives so later ones land on top
const LAYER_STEP: f32 = 1.0e-3;

/// Collects draw calls into a single vertex-colored triangle mesh
///
/// Screen coordinates (top-left origin, y down) are mapped onto the centered,
/// y-up space a default `Camera2d` renders.
pub struct TileMeshBuilder {
    screen: Vec2,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
    layer: u32,
}

impl TileMeshBuilder {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            layer: 0,
        }
    }

    #[inline]
    fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.screen.x * 0.5, self.screen.y * 0.5 - point.y)
    }

    /// Fan-triangulate a convex polygon
    fn push_convex(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }

        let mut world: Vec<Vec2> = points.iter().map(|p| self.to_world(*p)).collect();
        // Keep counter-clockwise winding after the y flip
        if signed_area(&world) < 0.0 {
            world.reverse();
        }

        // Later primitives sit slightly closer to the camera
        let z = self.layer as f32 * LAYER_STEP;
        let base = self.positions.len() as u32;
        let rgba = color.to_linear_array();

        for p in &world {
            self.positions.push([p.x, p.y, z]);
            self.colors.push(rgba);
        }
        // Fan out from the first vertex
        for i in 1..world.len() as u32 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
        self.layer += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn build(mut self) -> Mesh {
        // An empty frame still needs non-empty vertex buffers
        if self.positions.is_empty() {
            self.positions = vec![[0.0; 3]; 3];
            self.colors = vec![[0.0; 4]; 3];
            self.indices = vec![0, 1, 2];
        }

        // Flat quads all face the 2D camera
        let normals = vec![[0.0, 0.0, 1.0]; self.positions.len()];

        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
            .with_inserted_indices(Indices::U32(self.indices))
    }
}

impl DrawSurface for TileMeshBuilder {
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.push_convex(points, color);
    }

    /// Each closed edge becomes a quad `width` pixels thick
    fn outline_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        let half = width * 0.5;
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            // Zero-length edges have no direction to thicken along
            let Some(dir) = (b - a).try_normalize() else {
                continue;
            };
            // Straddle the edge, half the width on each side
            let offset = dir.perp() * half;
            self.push_convex(&[a + offset, b + offset, b - offset, a - offset], color);
        }
    }
}

fn signed_area(points: &[Vec2]) -> f32 {
    let mut area = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        area += a.perp_dot(b);
    }
    area * 0.5
}
