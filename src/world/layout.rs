use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::WorldError;
use crate::world::{Tile, TileType};

/// On-disk world description
#[derive(Debug, Deserialize)]
struct WorldFile {
    layout: Vec<Vec<i64>>,
    #[serde(default)]
    heights: Option<Vec<Vec<u32>>>,
}

/// A validated rectangular table of tile types, row-major (row = y)
#[derive(Debug, Clone, PartialEq)]
pub struct WorldLayout {
    width: usize,
    height: usize,
    cells: Vec<TileType>,
    /// Per-tile elevation overrides, same shape as `cells`
    heights: Option<Vec<u32>>,
}

impl WorldLayout {
    /// Validate raw ordinals; ragged rows and unknown ordinals are rejected
    pub fn from_ordinals(rows: &[Vec<i64>]) -> Result<Self, WorldError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(WorldError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let tile_type = TileType::from_ordinal(value)
                    .ok_or(WorldError::UnknownTileType { value, x, y })?;
                cells.push(tile_type);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
            heights: None,
        })
    }

    pub fn from_types(rows: Vec<Vec<TileType>>) -> Result<Self, WorldError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(WorldError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self::from_rows(rows))
    }

    /// Rows must already be rectangular
    pub(crate) fn from_rows(rows: Vec<Vec<TileType>>) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width));

        Self {
            width,
            height: rows.len(),
            cells: rows.into_iter().flatten().collect(),
            heights: None,
        }
    }

    /// Attach per-tile height overrides of the same shape as the layout
    pub fn with_heights(mut self, rows: &[Vec<u32>]) -> Result<Self, WorldError> {
        if rows.len() != self.height {
            return Err(WorldError::HeightShape {
                row: rows.len().min(self.height),
            });
        }
        let mut heights = Vec::with_capacity(self.cells.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != self.width {
                return Err(WorldError::HeightShape { row: y });
            }
            heights.extend_from_slice(row);
        }
        self.heights = Some(heights);
        Ok(self)
    }

    pub fn from_json(text: &str) -> Result<Self, WorldError> {
        let file: WorldFile = serde_json::from_str(text)?;
        let layout = Self::from_ordinals(&file.layout)?;
        match file.heights {
            Some(heights) => layout.with_heights(&heights),
            None => Ok(layout),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<TileType> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Build the tiles in row-major order
    pub fn to_tiles(&self) -> Vec<Tile> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &tile_type)| {
                let x = (i % self.width) as u32;
                let y = (i / self.width) as u32;
                match &self.heights {
                    Some(heights) => Tile::with_height(x, y, tile_type, heights[i]),
                    None => Tile::new(x, y, tile_type),
                }
            })
            .collect()
    }
}
