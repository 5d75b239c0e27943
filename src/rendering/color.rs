use bevy::prelude::*;
use serde::Deserialize;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Add `amount` to every channel, saturating at 255
    pub const fn lighten(self, amount: u8) -> Self {
        Self(
            self.0.saturating_add(amount),
            self.1.saturating_add(amount),
            self.2.saturating_add(amount),
        )
    }

    /// Subtract `amount` from every channel, saturating at 0
    pub const fn darken(self, amount: u8) -> Self {
        Self(
            self.0.saturating_sub(amount),
            self.1.saturating_sub(amount),
            self.2.saturating_sub(amount),
        )
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.0, self.1, self.2)
    }

    /// Linear RGBA floats, the layout mesh vertex colors expect
    pub fn to_linear_array(self) -> [f32; 4] {
        let linear = LinearRgba::from(self.to_color());
        [linear.red, linear.green, linear.blue, linear.alpha]
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}
