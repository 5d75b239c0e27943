use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::world::TileGrid;

/// Per-frame ordering: pointer picking must settle before the grid is drawn
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GridSystems {
    Pointer,
    Draw,
}

/// Keyboard panning, camera ticks, hover and click picking
pub struct GridInputPlugin;

impl Plugin for GridInputPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (GridSystems::Pointer, GridSystems::Draw).chain())
            .add_systems(FixedUpdate, (pan_camera, tick_camera).chain())
            .add_systems(
                Update,
                (select_on_click, track_pointer)
                    .chain()
                    .in_set(GridSystems::Pointer),
            )
            .add_systems(Update, exit_on_escape);
    }
}

/// Grid-space pan direction from WASD: W/S move along y, A/D along x
pub fn pan_intent(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let mut intent = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        intent.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        intent.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        intent.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        intent.x -= 1.0;
    }

    intent
}

fn pan_camera(keys: Res<ButtonInput<KeyCode>>, mut grid: ResMut<TileGrid>) {
    let intent = pan_intent(&keys);
    if intent != Vec2::ZERO {
        grid.move_camera(intent.x, intent.y);
    }
}

fn tick_camera(mut grid: ResMut<TileGrid>) {
    grid.update();
}

fn track_pointer(windows: Query<&Window, With<PrimaryWindow>>, mut grid: ResMut<TileGrid>) {
    let Ok(window) = windows.single() else {
        return;
    };
    grid.update_hover(window.cursor_position());
}

fn select_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut grid: ResMut<TileGrid>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(point) = window.cursor_position() {
        grid.handle_click(point);
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_pan_intent() {
        let mut keys = ButtonInput::<KeyCode>::default();
        assert_eq!(pan_intent(&keys), Vec2::ZERO);

        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyD);
        assert_eq!(pan_intent(&keys), Vec2::new(-1.0, 1.0));

        keys.press(KeyCode::KeyS);
        assert_eq!(pan_intent(&keys), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_pan_and_tick_systems_move_grid_camera() {
        let grid = TileGrid::from_ordinals(&[vec![0, 0]], GridConfig::default()).unwrap();
        let start = grid.camera().position();

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);

        let mut app = App::new();
        app.insert_resource(grid)
            .insert_resource(keys)
            .add_systems(Update, (pan_camera, tick_camera).chain());
        app.update();

        let grid = app.world().resource::<TileGrid>();
        assert_eq!(grid.camera().target(), start + Vec2::new(5.0, 2.5));
        assert_eq!(grid.camera().position(), start + Vec2::new(2.5, 1.25));
    }
}
