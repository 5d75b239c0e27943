use bevy::prelude::*;

/// Pixel footprint of one tile's top face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    /// Height of the diamond; also the pixel length of one unit of extrusion
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half extents of the diamond, halved in integer pixels
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

/// Convert grid coordinates and elevation to screen space (y grows downward)
///
/// Classic 2:1 diamond tiling: x runs down-right, y runs down-left, and each
/// unit of `height` lifts the tile by one full tile height.
pub fn project(x: u32, y: u32, height: u32, size: TileSize) -> Vec2 {
    let half = size.half_extents();
    let (x, y) = (x as f32, y as f32);

    Vec2::new(
        (x - y) * half.x,
        (x + y) * half.y - height as f32 * size.height as f32,
    )
}

/// Project a tile and shift it by the camera offset
#[inline]
pub fn project_to_screen(x: u32, y: u32, height: u32, size: TileSize, camera: Vec2) -> Vec2 {
    project(x, y, height, size) + camera
}

/// Manhattan-distance test against an axis-aligned diamond centered on `center`
///
/// The boundary counts as inside. A degenerate diamond contains nothing.
pub fn diamond_contains(point: Vec2, center: Vec2, half: Vec2) -> bool {
    if half.x == 0.0 || half.y == 0.0 {
        return false;
    }

    let local = point - center;
    let nx = local.x.abs() / half.x;
    let ny = local.y.abs() / half.y;

    nx + ny <= 1.0
}

/// Top face of a tile whose apex sits at `anchor`: top, right, bottom, left
pub fn top_face(anchor: Vec2, size: TileSize) -> [Vec2; 4] {
    let half = size.half_extents();
    [
        anchor,
        anchor + Vec2::new(half.x, half.y),
        anchor + Vec2::new(0.0, size.height as f32),
        anchor + Vec2::new(-half.x, half.y),
    ]
}

/// Side faces hanging `drop` pixels below the two lower edges of a top face
///
/// Returns `(left, right)`.
pub fn side_faces(top: &[Vec2; 4], drop: f32) -> ([Vec2; 4], [Vec2; 4]) {
    let [_, right, bottom, left] = *top;
    let down = Vec2::new(0.0, drop);

    (
        [bottom, left, left + down, bottom + down],
        [right, bottom, bottom + down, right + down],
    )
}

/// Coarse culling on the projected anchor only, padded by one tile
pub fn anchor_visible(anchor: Vec2, size: TileSize, screen: Vec2) -> bool {
    -(size.width as f32) < anchor.x
        && anchor.x < screen.x
        && -(size.height as f32) < anchor.y
        && anchor.y < screen.y
}
