use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::WorldError;
use crate::rendering::{Rgb, TileSize};

/// Startup constants for the tile world
///
/// Every field has a default, so a JSON config only needs the keys it wants
/// to override.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pixel width of one tile's diamond
    pub tile_width: u32,
    /// Pixel height of one tile's diamond, also one unit of extrusion
    pub tile_height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Fraction of the remaining distance the camera covers per tick
    pub camera_lerp: f32,
    /// Pan distance per tick for a unit intent
    pub camera_speed: f32,
    /// Channel shift applied to side faces
    pub shade: u8,
    /// Camera ticks per second
    pub tick_rate: f64,
    pub background: Rgb,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: 64,
            tile_height: 32,
            screen_width: 800,
            screen_height: 800,
            camera_lerp: 0.5,
            camera_speed: 10.0,
            shade: 75,
            tick_rate: 30.0,
            background: Rgb(135, 206, 235),
        }
    }
}

impl GridConfig {
    /// Read a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, WorldError> {
        let config: GridConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        if !(self.camera_lerp > 0.0 && self.camera_lerp <= 1.0) {
            return Err(WorldError::InvalidConfig(format!(
                "camera_lerp must be in (0, 1], got {}",
                self.camera_lerp
            )));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(WorldError::InvalidConfig(
                "screen dimensions must be non-zero".to_string(),
            ));
        }
        // Fixed timestep period is 1 / tick_rate and must fit a Duration
        let period = Duration::try_from_secs_f64(self.tick_rate.recip());
        if !(self.tick_rate.is_finite() && period.is_ok_and(|p| !p.is_zero())) {
            return Err(WorldError::InvalidConfig(format!(
                "tick_rate must give a representable timestep, got {}",
                self.tick_rate
            )));
        }
        Ok(())
    }

    pub fn tile_size(&self) -> TileSize {
        TileSize::new(self.tile_width, self.tile_height)
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }
}
