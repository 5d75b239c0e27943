use crate::rendering::Rgb;

/// Terrain kinds, numbered as they appear in world layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileType {
    Water = 0,
    Sand = 1,
    Dirt = 2,
    Path = 3,
    Grass = 4,
    Rocks = 5,
    Ice = 6,
}

const BASE_COLORS: [Rgb; TileType::COUNT] = [
    Rgb(90, 90, 255),
    Rgb(202, 182, 158),
    Rgb(161, 110, 29),
    Rgb(153, 153, 153),
    Rgb(147, 196, 125),
    Rgb(91, 91, 91),
    Rgb(111, 168, 220),
];

/// Elevation in tile-height units
const DEFAULT_HEIGHTS: [u32; TileType::COUNT] = [0, 1, 1, 1, 1, 2, 1];

impl TileType {
    pub const COUNT: usize = 7;

    pub const ALL: [TileType; TileType::COUNT] = [
        TileType::Water,
        TileType::Sand,
        TileType::Dirt,
        TileType::Path,
        TileType::Grass,
        TileType::Rocks,
        TileType::Ice,
    ];

    /// Look up a layout ordinal; anything outside 0..=6 is rejected
    pub fn from_ordinal(value: i64) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn base_color(self) -> Rgb {
        BASE_COLORS[self as usize]
    }

    #[inline]
    pub fn default_height(self) -> u32 {
        DEFAULT_HEIGHTS[self as usize]
    }
}
