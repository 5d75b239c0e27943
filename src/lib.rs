//! Isometric tile world: projection, picking and a bevy front-end
//!
//! The core (`world`, `rendering::isometric_projection`, `rendering::camera`)
//! is plain data and pure geometry; the bevy plugins in `input`, `rendering`
//! and `ui` only feed it intents and present the draw commands it emits.

pub mod config;
pub mod error;
pub mod input;
pub mod rendering;
pub mod ui;
pub mod world;

pub use config::GridConfig;
pub use error::WorldError;
pub use world::{Tile, TileGrid, TileType};
