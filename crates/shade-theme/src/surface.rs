//! Surface variations: card, popover, border, and input colors derived
//! from one background.
//!
//! In dark mode every surface is lighter than the background; in light
//! mode every surface is darker. Border and input sit further from the
//! background than card so stacked surfaces stay distinguishable.

use shade_color::Color;

use crate::config::{SurfaceConfig, SurfaceDeltas};

/// A background and the surfaces layered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSet {
    pub background: Color,
    pub card: Color,
    pub popover: Color,
    pub border: Color,
    pub input: Color,
}

/// Derive the surface set for `base` with the canonical offsets.
#[must_use]
pub fn derive_surfaces(base: Color, is_dark: bool) -> SurfaceSet {
    derive_surfaces_with(base, is_dark, &SurfaceConfig::CANONICAL)
}

/// Derive the surface set for `base` with explicit offsets.
#[must_use]
pub fn derive_surfaces_with(base: Color, is_dark: bool, config: &SurfaceConfig) -> SurfaceSet {
    let SurfaceDeltas { card, popover, border, input } = *config.for_mode(is_dark);
    let sign = if is_dark { 1.0 } else { -1.0 };
    let shift = |delta: f64| base.adjust_lightness(sign * delta);
    SurfaceSet {
        background: base,
        card: shift(card),
        popover: shift(popover),
        border: shift(border),
        input: shift(input),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
