use bevy::prelude::*;

use crate::rendering::{
    DrawSurface, Rgb, TileSize, diamond_contains, project_to_screen, side_faces, top_face,
};
use crate::world::TileType;

/// Brightening applied to the fill of a selected tile
pub const SELECTED_LIGHTEN: u8 = 30;
/// Brightening applied to the fill of a hovered tile
pub const HOVER_LIGHTEN: u8 = 15;

pub const SELECTED_OUTLINE: Rgb = Rgb(255, 0, 0);
pub const SELECTED_OUTLINE_WIDTH: f32 = 2.0;
pub const HOVER_OUTLINE: Rgb = Rgb(200, 200, 200);
pub const HOVER_OUTLINE_WIDTH: f32 = 1.0;

/// One cell of the grid
///
/// Position, type and height are fixed at creation. Only the hover and
/// selection flags change, and only through [`crate::world::TileGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub tile_type: TileType,
    pub height: u32,
    pub base_color: Rgb,
    pub selected_color: Rgb,
    pub hover_color: Rgb,
    pub(crate) selected: bool,
    pub(crate) hover: bool,
}

impl Tile {
    pub fn new(x: u32, y: u32, tile_type: TileType) -> Self {
        Self::with_height(x, y, tile_type, tile_type.default_height())
    }

    pub fn with_height(x: u32, y: u32, tile_type: TileType, height: u32) -> Self {
        let base_color = tile_type.base_color();
        Self {
            x,
            y,
            tile_type,
            height,
            base_color,
            selected_color: base_color.lighten(SELECTED_LIGHTEN),
            hover_color: base_color.lighten(HOVER_LIGHTEN),
            selected: false,
            hover: false,
        }
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    /// Painter's-order key: depth band first, then left to right
    #[inline]
    pub fn depth_key(&self) -> (i64, i64) {
        let (x, y) = (self.x as i64, self.y as i64);
        (x + y, x - y)
    }

    /// Screen position of the top-face apex under the given camera offset
    #[inline]
    pub fn screen_anchor(&self, size: TileSize, camera: Vec2) -> Vec2 {
        project_to_screen(self.x, self.y, self.height, size, camera)
    }

    /// Whether a screen point falls inside the tile-sized diamond centered on
    /// this tile's projected point
    pub fn contains_point(&self, point: Vec2, size: TileSize, camera: Vec2) -> bool {
        let anchor = self.screen_anchor(size, camera);
        diamond_contains(point, anchor, size.half_extents())
    }

    pub fn fill_color(&self) -> Rgb {
        if self.selected {
            self.selected_color
        } else if self.hover {
            self.hover_color
        } else {
            self.base_color
        }
    }

    /// Paint side faces, then the top face, then any highlight outline
    pub fn draw(&self, surface: &mut impl DrawSurface, size: TileSize, camera: Vec2, shade: u8) {
        let top = top_face(self.screen_anchor(size, camera), size);
        let color = self.fill_color();

        if self.height > 0 {
            let drop = self.height as f32 * size.height as f32;
            let (left, right) = side_faces(&top, drop);
            surface.fill_polygon(&left, color.darken(shade));
            surface.fill_polygon(&right, color.lighten(shade));
        }

        surface.fill_polygon(&top, color);

        if self.selected {
            surface.outline_polygon(&top, SELECTED_OUTLINE, SELECTED_OUTLINE_WIDTH);
        } else if self.hover {
            surface.outline_polygon(&top, HOVER_OUTLINE, HOVER_OUTLINE_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::DrawCommand;

    const SIZE: TileSize = TileSize::new(64, 32);

    #[test]
    fn test_derived_colors_clamp() {
        let tile = Tile::new(0, 0, TileType::Water);
        assert_eq!(tile.base_color, Rgb(90, 90, 255));
        assert_eq!(tile.selected_color, Rgb(120, 120, 255));
        assert_eq!(tile.hover_color, Rgb(105, 105, 255));
    }

    #[test]
    fn test_height_override() {
        let tile = Tile::with_height(2, 3, TileType::Grass, 5);
        assert_eq!(tile.height, 5);
        assert_eq!(Tile::new(2, 3, TileType::Grass).height, 1);
    }

    #[test]
    fn test_hit_region_follows_camera_and_height() {
        let tile = Tile::new(1, 1, TileType::Water);
        let camera = Vec2::new(400.0, 200.0);

        // Diamond around (400, 232), 32 wide and 16 tall each way
        assert!(tile.contains_point(Vec2::new(400.0, 232.0), SIZE, camera));
        assert!(tile.contains_point(Vec2::new(432.0, 232.0), SIZE, camera));
        assert!(tile.contains_point(Vec2::new(400.0, 225.0), SIZE, camera));
        assert!(!tile.contains_point(Vec2::new(400.0, 250.0), SIZE, camera));

        let moved = camera + Vec2::new(100.0, 0.0);
        assert!(!tile.contains_point(Vec2::new(400.0, 232.0), SIZE, moved));
        assert!(tile.contains_point(Vec2::new(500.0, 232.0), SIZE, moved));

        let rocks = Tile::new(1, 1, TileType::Rocks);
        assert!(rocks.contains_point(Vec2::new(400.0, 168.0), SIZE, camera));
        assert!(!rocks.contains_point(Vec2::new(400.0, 232.0), SIZE, camera));
    }

    #[test]
    fn test_degenerate_size_never_hits() {
        let tile = Tile::new(0, 0, TileType::Water);
        assert!(!tile.contains_point(Vec2::ZERO, TileSize::new(1, 32), Vec2::ZERO));
    }

    #[test]
    fn test_flat_tile_draws_top_only() {
        let tile = Tile::new(0, 0, TileType::Water);
        let mut commands: Vec<DrawCommand> = Vec::new();
        tile.draw(&mut commands, SIZE, Vec2::ZERO, 75);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].color(), Rgb(90, 90, 255));
    }

    #[test]
    fn test_extruded_tile_draw_sequence() {
        let mut tile = Tile::new(0, 0, TileType::Sand);
        tile.selected = true;
        let mut commands: Vec<DrawCommand> = Vec::new();
        tile.draw(&mut commands, SIZE, Vec2::ZERO, 75);

        assert_eq!(commands.len(), 4);
        let fill = tile.selected_color;
        assert_eq!(commands[0].color(), fill.darken(75));
        assert_eq!(commands[1].color(), fill.lighten(75));
        assert_eq!(commands[2].color(), fill);
        assert_eq!(
            commands[3],
            DrawCommand::Outline {
                points: top_face(Vec2::new(0.0, -32.0), SIZE).to_vec(),
                color: SELECTED_OUTLINE,
                width: SELECTED_OUTLINE_WIDTH,
            }
        );

        let DrawCommand::Fill { points, .. } = &commands[0] else {
            panic!("expected a fill");
        };
        assert_eq!(points[3], Vec2::new(0.0, 32.0));
    }

    #[test]
    fn test_hover_outline_when_not_selected() {
        let mut tile = Tile::new(0, 0, TileType::Water);
        tile.hover = true;
        let mut commands: Vec<DrawCommand> = Vec::new();
        tile.draw(&mut commands, SIZE, Vec2::ZERO, 75);

        assert_eq!(commands[0].color(), tile.hover_color);
        assert!(matches!(
            commands[1],
            DrawCommand::Outline { color: HOVER_OUTLINE, width, .. } if width == HOVER_OUTLINE_WIDTH
        ));
    }
}
