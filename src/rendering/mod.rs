//! Rendering for the isometric tile world
//!
//! Pure projection and picking geometry, the camera, the draw-command sink,
//! and the bevy plugin that turns each frame's commands into a mesh.

pub mod camera;
pub mod color;
pub mod isometric_projection;
pub mod isometric_tile_renderer;
pub mod surface;
pub mod tile_mesh;

pub use camera::*;
pub use color::*;
pub use isometric_projection::*;
pub use isometric_tile_renderer::*;
pub use surface::*;
pub use tile_mesh::*;
