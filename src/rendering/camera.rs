use bevy::prelude::*;

/// Screen-space offset applied to every projected tile, eased toward a target
///
/// Each tick covers a fixed fraction of the remaining distance, so motion
/// decays smoothly and never overshoots. The camera never lands exactly on its
/// target; use [`IsoCamera::is_settled`] for "arrived".
#[derive(Debug, Clone, PartialEq)]
pub struct IsoCamera {
    position: Vec2,
    target: Vec2,
    /// Fraction of the remaining distance covered per tick, in (0, 1]
    pub lerp_speed: f32,
}

impl IsoCamera {
    pub fn new(position: Vec2, lerp_speed: f32) -> Self {
        Self {
            position,
            target: position,
            lerp_speed,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Shift the target by an isometric-space delta
    pub fn move_by(&mut self, delta: Vec2) {
        self.target += delta;
    }

    /// Advance one tick toward the target
    pub fn update(&mut self) {
        self.position += (self.target - self.position) * self.lerp_speed;
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        let gap = (self.target - self.position).abs();
        gap.x <= epsilon && gap.y <= epsilon
    }
}
