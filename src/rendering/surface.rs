use bevy::prelude::*;

use super::Rgb;

/// Sink for the 2D primitives the tile grid paints, in painter's order
///
/// Points are in screen space: origin at the top-left, y growing downward.
pub trait DrawSurface {
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);

    fn outline_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        points: Vec<Vec2>,
        color: Rgb,
    },
    Outline {
        points: Vec<Vec2>,
        color: Rgb,
        width: f32,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Rgb {
        match self {
            DrawCommand::Fill { color, .. } | DrawCommand::Outline { color, .. } => *color,
        }
    }
}

/// Recording surface
impl DrawSurface for Vec<DrawCommand> {
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.push(DrawCommand::Fill {
            points: points.to_vec(),
            color,
        });
    }

    fn outline_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        self.push(DrawCommand::Outline {
            points: points.to_vec(),
            color,
            width,
        });
    }
}
