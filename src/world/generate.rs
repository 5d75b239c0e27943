use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::world::{TileType, WorldLayout};

/// Parameters for procedural layout generation
#[derive(Debug, Clone)]
pub struct LayoutGenParams {
    pub width: usize,
    pub height: usize,
    /// Noise periods across the whole map
    pub scale: f64,
    pub octaves: usize,
    pub seed: u32,
}

impl Default for LayoutGenParams {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            scale: 3.0,
            octaves: 4,
            seed: 42,
        }
    }
}

/// Map a noise sample in roughly [-1, 1] onto a terrain band
fn classify(value: f64) -> TileType {
    match value {
        v if v < -0.2 => TileType::Water,
        v if v < -0.1 => TileType::Sand,
        v if v < 0.25 => TileType::Grass,
        v if v < 0.4 => TileType::Dirt,
        v if v < 0.55 => TileType::Rocks,
        _ => TileType::Ice,
    }
}

/// Generate a terrain layout from fractal Perlin noise
///
/// The same parameters always produce the same layout.
pub fn generate_layout(params: &LayoutGenParams) -> WorldLayout {
    let fbm = Fbm::<Perlin>::new(params.seed).set_octaves(params.octaves);
    let span = params.width.max(params.height).max(1) as f64;

    let rows: Vec<Vec<TileType>> = (0..params.height)
        .map(|y| {
            (0..params.width)
                .map(|x| {
                    let sample = [
                        x as f64 / span * params.scale,
                        y as f64 / span * params.scale,
                    ];
                    classify(fbm.get(sample))
                })
                .collect()
        })
        .collect();

    WorldLayout::from_rows(rows)
}
