use std::path::PathBuf;

/// Errors raised while building a world or loading its configuration
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown tile type {value} at ({x}, {y})")]
    UnknownTileType { value: i64, x: usize, y: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("height table does not match layout shape at row {row}")]
    HeightShape { row: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
