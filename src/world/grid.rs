use bevy::prelude::*;

use crate::config::GridConfig;
use crate::error::WorldError;
use crate::rendering::{DrawSurface, IsoCamera, TileSize, anchor_visible};
use crate::world::{Tile, WorldLayout};

/// Owns every tile plus the camera, and resolves hover and selection
///
/// Tiles are stored row-major; `draw_order` holds indices into that storage
/// sorted back-to-front. Grid coordinates never change after construction, so
/// the order is computed once and picking simply walks it in reverse.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    draw_order: Vec<usize>,
    camera: IsoCamera,
    config: GridConfig,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl TileGrid {
    pub fn new(layout: &WorldLayout, config: GridConfig) -> Self {
        let tiles = layout.to_tiles();

        // Stable sort keeps row-major order for equal keys
        let mut draw_order: Vec<usize> = (0..tiles.len()).collect();
        draw_order.sort_by_key(|&i| tiles[i].depth_key());

        // Start with the grid origin at the top center of the screen
        let camera = IsoCamera::new(
            Vec2::new(
                (config.screen_width / 2) as f32,
                (config.screen_height / 4) as f32,
            ),
            config.camera_lerp,
        );

        info!(
            "Tile grid built: {}x{} ({} tiles)",
            layout.width(),
            layout.height(),
            tiles.len()
        );

        Self {
            tiles,
            width: layout.width(),
            height: layout.height(),
            draw_order,
            camera,
            config,
            selected: None,
            hovered: None,
        }
    }

    pub fn from_ordinals(rows: &[Vec<i64>], config: GridConfig) -> Result<Self, WorldError> {
        Ok(Self::new(&WorldLayout::from_ordinals(rows)?, config))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn camera(&self) -> &IsoCamera {
        &self.camera
    }

    #[inline]
    fn tile_size(&self) -> TileSize {
        self.config.tile_size()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x)
    }

    /// Back-to-front painter's order
    pub fn draw_order(&self) -> impl DoubleEndedIterator<Item = &Tile> + '_ {
        self.draw_order.iter().map(|&i| &self.tiles[i])
    }

    /// Front-to-back: the first tile here that contains a point is the one on top
    pub fn pick_order(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.draw_order().rev()
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.map(|i| &self.tiles[i])
    }

    pub fn hovered_tile(&self) -> Option<&Tile> {
        self.hovered.map(|i| &self.tiles[i])
    }

    /// Index of the front-most tile under a screen point, without touching any state
    pub fn tile_at_screen(&self, point: Vec2) -> Option<usize> {
        let size = self.tile_size();
        let camera = self.camera.position();
        // Walk front to back
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|&i| self.tiles[i].contains_point(point, size, camera))
    }

    /// Tiles whose projected anchor lands near the screen, in draw order
    pub fn visible_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        let size = self.tile_size();
        let camera = self.camera.position();
        let screen = self.config.screen_size();
        self.draw_order()
            .filter(move |tile| anchor_visible(tile.screen_anchor(size, camera), size, screen))
    }

    /// Pan by a grid-space intent, e.g. a keyboard direction in {-1, 0, 1}
    pub fn move_camera(&mut self, dx: f32, dy: f32) {
        let aspect = if self.config.tile_width == 0 {
            0.0
        } else {
            self.config.tile_height as f32 / self.config.tile_width as f32
        };
        let step = self.config.camera_speed * 0.5;

        // Convert the grid-space intent into a screen-space delta
        self.camera
            .move_by(Vec2::new((dx - dy) * step, (dx + dy) * step * aspect));
    }

    /// One camera tick
    pub fn update(&mut self) {
        self.camera.update();
    }

    pub fn handle_pointer_move(&mut self, point: Vec2) {
        self.update_hover(Some(point));
    }

    pub fn handle_pointer_leave(&mut self) {
        self.update_hover(None);
    }

    /// Recompute the hovered tile; with no pointer nothing is hovered
    pub fn update_hover(&mut self, pointer: Option<Vec2>) {
        // Clear the old hover first so at most one tile carries the flag
        if let Some(previous) = self.hovered.take() {
            self.tiles[previous].hover = false;
        }

        if let Some(index) = pointer.and_then(|point| self.tile_at_screen(point)) {
            self.tiles[index].hover = true;
            self.hovered = Some(index);
        }
    }

    /// Select the front-most tile under a click, replacing any previous selection
    pub fn handle_click(&mut self, point: Vec2) -> Option<&Tile> {
        self.clear_selection();

        // A miss leaves nothing selected
        let index = self.tile_at_screen(point)?;
        self.tiles[index].selected = true;
        self.selected = Some(index);

        let tile = &self.tiles[index];
        debug!(
            "Selected {:?} tile at ({}, {}), height {}",
            tile.tile_type, tile.x, tile.y, tile.height
        );
        Some(tile)
    }

    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.tiles[previous].selected = false;
        }
    }

    /// Paint every visible tile back-to-front
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let size = self.tile_size();
        let camera = self.camera.position();
        for tile in self.visible_tiles() {
            tile.draw(surface, size, camera, self.config.shade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCommand, project_to_screen};
    use crate::world::TileType;

    fn grid(rows: &[Vec<i64>]) -> TileGrid {
        TileGrid::from_ordinals(rows, GridConfig::default()).unwrap()
    }

    fn anchor_of(grid: &TileGrid, x: u32, y: u32) -> Vec2 {
        let tile = grid.tile(x as usize, y as usize).unwrap();
        let size = grid.config().tile_size();
        project_to_screen(x, y, tile.height, size, grid.camera().position())
    }

    fn count_flags(grid: &TileGrid) -> (usize, usize) {
        let hovered = grid.tiles().iter().filter(|t| t.is_hovered()).count();
        let selected = grid.tiles().iter().filter(|t| t.is_selected()).count();
        (hovered, selected)
    }

    #[test]
    fn test_unknown_ordinal_rejected() {
        let err = TileGrid::from_ordinals(&[vec![0, 7]], GridConfig::default()).unwrap_err();
        assert!(matches!(err, WorldError::UnknownTileType { value: 7, x: 1, y: 0 }));
    }

    #[test]
    fn test_camera_starts_at_screen_offset() {
        let grid = grid(&[vec![0]]);
        assert_eq!(grid.camera().position(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_draw_order_is_lexicographic_depth() {
        let rows: Vec<Vec<i64>> = (0..4).map(|_| vec![0, 1, 2, 3, 4]).collect();
        let grid = grid(&rows);
        let order: Vec<&Tile> = grid.draw_order().collect();

        assert_eq!(order.len(), 20);
        for (i, a) in order.iter().enumerate() {
            for b in &order[i + 1..] {
                assert!(a.depth_key() < b.depth_key());
            }
        }
        assert_eq!((order[0].x, order[0].y), (0, 0));
        assert_eq!((order[1].x, order[1].y), (0, 1));
        assert_eq!((order[2].x, order[2].y), (1, 0));
    }

    #[test]
    fn test_pick_order_is_draw_order_reversed() {
        let grid = grid(&[vec![0, 1, 2], vec![3, 4, 5], vec![6, 0, 1]]);
        let mut draw: Vec<(u32, u32)> = grid.draw_order().map(|t| (t.x, t.y)).collect();
        let pick: Vec<(u32, u32)> = grid.pick_order().map(|t| (t.x, t.y)).collect();
        draw.reverse();
        assert_eq!(draw, pick);
    }

    #[test]
    fn test_click_selects_exactly_the_tile_under_its_anchor() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);

        let point = anchor_of(&grid, 1, 1);
        let picked = grid.handle_click(point).map(|t| (t.x, t.y));
        assert_eq!(picked, Some((1, 1)));

        let selected: Vec<(u32, u32)> = grid
            .tiles()
            .iter()
            .filter(|t| t.is_selected())
            .map(|t| (t.x, t.y))
            .collect();
        assert_eq!(selected, vec![(1, 1)]);
    }

    #[test]
    fn test_click_at_projected_anchor_picks_front_tile() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);

        // (400, 232) is (1, 1)'s projected point and the bottom of (0, 0)'s drawn face
        let picked = grid.handle_click(Vec2::new(400.0, 232.0)).map(|t| (t.x, t.y));
        assert_eq!(picked, Some((1, 1)));
    }

    #[test]
    fn test_click_just_above_anchor_picks_front_tile() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);

        // Still inside (1, 1)'s diamond, 7 of its 16 pixels up
        let point = anchor_of(&grid, 1, 1) - Vec2::new(0.0, 7.0);
        assert_eq!(point, Vec2::new(400.0, 225.0));
        let picked = grid.handle_click(point).map(|t| (t.x, t.y));
        assert_eq!(picked, Some((1, 1)));
    }

    #[test]
    fn test_click_on_empty_space_clears_selection() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);
        grid.handle_click(anchor_of(&grid, 0, 0));
        assert!(grid.selected_tile().is_some());

        assert!(grid.handle_click(Vec2::new(5.0, 700.0)).is_none());
        assert!(grid.selected_tile().is_none());
        assert_eq!(count_flags(&grid), (0, 0));
    }

    #[test]
    fn test_at_most_one_hover_and_selection() {
        let rows: Vec<Vec<i64>> = (0..6).map(|_| vec![0, 5, 1, 4, 6, 2]).collect();
        let mut grid = grid(&rows);

        for step in 0..80 {
            let point = Vec2::new(250.0 + step as f32 * 4.0, 120.0 + step as f32 * 3.0);
            grid.handle_pointer_move(point);
            if step % 3 == 0 {
                grid.handle_click(point);
            }
            let (hovered, selected) = count_flags(&grid);
            assert!(hovered <= 1);
            assert!(selected <= 1);
        }
    }

    #[test]
    fn test_hover_moves_and_clears() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);

        grid.handle_pointer_move(anchor_of(&grid, 1, 0));
        assert_eq!(grid.hovered_tile().map(|t| (t.x, t.y)), Some((1, 0)));

        grid.handle_pointer_move(anchor_of(&grid, 0, 1));
        assert_eq!(grid.hovered_tile().map(|t| (t.x, t.y)), Some((0, 1)));
        assert_eq!(count_flags(&grid).0, 1);

        grid.handle_pointer_leave();
        assert!(grid.hovered_tile().is_none());
        assert_eq!(count_flags(&grid).0, 0);
    }

    #[test]
    fn test_elevated_tile_wins_over_tile_behind() {
        // Dirt at (1, 1) is lifted one tile height, onto (0, 0)'s projected point
        let mut grid = grid(&[vec![0, 0], vec![0, 2]]);
        let front = grid.tile(1, 1).unwrap();
        assert_eq!(front.tile_type, TileType::Dirt);

        let picked = grid.handle_click(anchor_of(&grid, 0, 0)).map(|t| (t.x, t.y));
        assert_eq!(picked, Some((1, 1)));
    }

    #[test]
    fn test_move_camera_scales_intent() {
        let mut grid = grid(&[vec![0]]);
        let start = grid.camera().target();

        grid.move_camera(1.0, 0.0);
        assert_eq!(grid.camera().target() - start, Vec2::new(5.0, 2.5));

        grid.move_camera(0.0, 1.0);
        assert_eq!(grid.camera().target() - start, Vec2::new(0.0, 5.0));
        assert_eq!(grid.camera().position(), start);

        grid.update();
        assert_eq!(grid.camera().position(), start + Vec2::new(0.0, 2.5));
    }

    #[test]
    fn test_hit_regions_follow_camera() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);
        let before = anchor_of(&grid, 0, 0);

        for _ in 0..10 {
            grid.move_camera(-1.0, 1.0);
        }
        for _ in 0..60 {
            grid.update();
        }

        assert!(grid.tile_at_screen(before).is_none());
        let after = anchor_of(&grid, 0, 0);
        assert_eq!(grid.tile_at_screen(after), Some(0));
    }

    #[test]
    fn test_visibility_culls_offscreen_tiles() {
        let rows: Vec<Vec<i64>> = (0..40).map(|_| vec![0; 40]).collect();
        let grid = grid(&rows);

        let visible: Vec<(u32, u32)> = grid.visible_tiles().map(|t| (t.x, t.y)).collect();
        assert!(visible.contains(&(0, 0)));
        assert!(!visible.contains(&(0, 30)));
        assert!(!visible.contains(&(39, 39)));
        assert!(visible.len() < 1600);
    }

    #[test]
    fn test_draw_paints_back_to_front() {
        let mut grid = grid(&[vec![0, 0], vec![0, 0]]);
        grid.handle_click(anchor_of(&grid, 0, 1));

        let mut commands: Vec<DrawCommand> = Vec::new();
        grid.draw(&mut commands);

        // Four flat top faces plus one selection outline
        assert_eq!(commands.len(), 5);
        let fills: Vec<&DrawCommand> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .collect();
        let DrawCommand::Fill { points, .. } = fills[0] else {
            panic!("expected a fill");
        };
        assert_eq!(points[0], Vec2::new(400.0, 200.0));
        assert!(matches!(commands[2], DrawCommand::Outline { .. }));
    }
}
