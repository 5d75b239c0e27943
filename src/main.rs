use anyhow::Context;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use std::path::PathBuf;

use isometric_tiles::GridConfig;
use isometric_tiles::input::GridInputPlugin;
use isometric_tiles::rendering::IsometricTileRendererPlugin;
use isometric_tiles::ui::FpsOverlayPlugin;
use isometric_tiles::world::{LayoutGenParams, TileGrid, WorldLayout, generate_layout};

#[derive(Parser, Debug)]
#[command(name = "isometric_tiles")]
#[command(about = "Pan around an isometric height map and pick tiles with the mouse")]
struct Args {
    /// World file with a `layout` table of tile ordinals (generated if omitted)
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// JSON file overriding tile, screen and camera settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of a generated world
    #[arg(long, default_value = "24")]
    size: usize,

    /// Seed for a generated world
    #[arg(short, long, default_value = "42")]
    seed: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GridConfig::default(),
    };

    let (layout, source) = match &args.world {
        Some(path) => {
            let layout = WorldLayout::load(path)
                .with_context(|| format!("loading world from {}", path.display()))?;
            (layout, format!("file {}", path.display()))
        }
        None => {
            let params = LayoutGenParams {
                width: args.size,
                height: args.size,
                seed: args.seed,
                ..default()
            };
            (generate_layout(&params), format!("noise seed {}", args.seed))
        }
    };

    let window = Window {
        title: "Isometric World".into(),
        resolution: WindowResolution::new(
            config.screen_width as f32,
            config.screen_height as f32,
        ),
        resizable: false,
        ..default()
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .insert_resource(ClearColor(config.background.to_color()))
        .insert_resource(Time::<Fixed>::from_hz(config.tick_rate))
        .add_plugins((GridInputPlugin, IsometricTileRendererPlugin, FpsOverlayPlugin))
        // Built inside the app so construction is logged
        .add_systems(PreStartup, move |mut commands: Commands| {
            info!("Loading world from {source}");
            commands.insert_resource(TileGrid::new(&layout, config.clone()));
        })
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}
