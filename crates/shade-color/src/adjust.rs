// SPDX-License-Identifier: MIT
//
// HSL adjustments and random color generation.
//
// Every adjustment goes Color → HSL → shifted HSL → Color. The HSL leg is
// unrounded, so the only quantization is the final pack into 8-bit
// channels.

use rand::Rng;

use crate::color::Color;

/// Number of distinct 24-bit colors.
const COLOR_SPACE: u32 = 1 << 24;

impl Color {
    /// Shift HSL lightness by `delta` percentage points (clamped to 0–100).
    #[must_use]
    pub fn adjust_lightness(self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(hsl.with_lightness(hsl.l + delta))
    }

    /// Shift HSL saturation by `delta` percentage points (clamped to 0–100).
    #[must_use]
    pub fn adjust_saturation(self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(hsl.with_saturation(hsl.s + delta))
    }

    /// Increase lightness by `amount` points.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.adjust_lightness(amount)
    }

    /// Decrease lightness by `amount` points.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.adjust_lightness(-amount)
    }

    /// Decrease saturation by `amount` points.
    #[inline]
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.adjust_saturation(-amount)
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self::from_hsl(self.to_hsl().rotate(degrees))
    }
}

/// Shift a color's HSL lightness by `delta` points.
#[must_use]
pub fn adjust_lightness(color: Color, delta: f64) -> Color {
    color.adjust_lightness(delta)
}

/// Shift a color's HSL saturation by `delta` points.
#[must_use]
pub fn adjust_saturation(color: Color, delta: f64) -> Color {
    color.adjust_saturation(delta)
}

/// Hex-in, hex-out form of [`adjust_lightness`]. Malformed input is
/// treated as black.
#[must_use]
pub fn adjust_lightness_hex(hex: &str, delta: f64) -> String {
    Color::from_hex_lossy(hex).adjust_lightness(delta).to_hex()
}

/// Hex-in, hex-out form of [`adjust_saturation`].
#[must_use]
pub fn adjust_saturation_hex(hex: &str, delta: f64) -> String {
    Color::from_hex_lossy(hex).adjust_saturation(delta).to_hex()
}

/// A uniformly random color drawn from the thread-local RNG.
///
/// Not reproducible. Use [`random_color_with`] and a seeded generator
/// when determinism matters.
#[must_use]
pub fn random_color() -> Color {
    random_color_with(&mut rand::thread_rng())
}

/// A uniformly random color drawn from `rng`.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_u24(rng.gen_range(0..COLOR_SPACE))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
