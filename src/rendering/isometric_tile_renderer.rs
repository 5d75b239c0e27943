use bevy::prelude::*;

use crate::input::GridSystems;
use crate::rendering::TileMeshBuilder;
use crate::world::TileGrid;

/// Handle to the mesh every frame's tile geometry is written into
#[derive(Resource)]
struct TileMeshCache {
    mesh: Handle<Mesh>,
}

/// Marker for the entity that displays the tile mesh
#[derive(Component)]
pub struct TileWorldMesh;

/// Plugin that paints the [`TileGrid`] into a single mesh each frame
pub struct IsometricTileRendererPlugin;

impl Plugin for IsometricTileRendererPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_tile_mesh)
            .add_systems(Update, redraw_tiles.in_set(GridSystems::Draw));
    }
}

fn setup_tile_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2d);

    let mesh = meshes.add(TileMeshBuilder::new(Vec2::ONE).build());
    commands.spawn((
        Mesh2d(mesh.clone()),
        MeshMaterial2d(materials.add(ColorMaterial::default())),
        Transform::default(),
        TileWorldMesh,
    ));
    commands.insert_resource(TileMeshCache { mesh });

    info!("Tile renderer initialized");
}

/// Rebuild the tile mesh from the grid's draw commands
fn redraw_tiles(
    grid: Res<TileGrid>,
    cache: Res<TileMeshCache>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let mut builder = TileMeshBuilder::new(grid.config().screen_size());
    grid.draw(&mut builder);

    if let Some(mesh) = meshes.get_mut(&cache.mesh) {
        *mesh = builder.build();
    }
}
