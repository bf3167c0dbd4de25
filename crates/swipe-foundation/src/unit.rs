//! Unit types: Dp, Px and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// Rounds to the nearest whole device pixel, the unit surfaces are laid out in.
    pub fn round_to_int(&self) -> i32 {
        self.0.round() as i32
    }
}
