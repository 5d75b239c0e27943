//! Tile world model
//!
//! Terrain types and their lookup tables, individual tiles, layout loading and
//! generation, and the grid that owns tiles, camera and picking state.

pub mod generate;
pub mod grid;
pub mod layout;
pub mod tile;
pub mod tile_type;

pub use generate::*;
pub use grid::*;
pub use layout::*;
pub use tile::*;
pub use tile_type::*;
