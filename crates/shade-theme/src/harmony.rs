//! Harmony palettes: five related colors from one base color.
//!
//! Five kinds are wheel harmonies built around the base itself and always
//! start with it: monochromatic, analogous, complementary, triadic,
//! tetradic. The other five are mood palettes: fixed saturation and
//! lightness bands (pastel, vibrant) spread from the base hue, or fixed
//! absolute colors (earthy, cool, warm) that ignore the base entirely.

use shade_color::{Color, Hsl};

use crate::config::DEFAULT_PALETTE_LEN;

/// Lightness removed per padding entry when a recipe is shorter than the
/// requested palette.
const PAD_DARKEN: f64 = 10.0;

/// The strategy used to derive a palette from its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// One hue at several lightness levels.
    Monochromatic,
    /// Neighbors at ±15° and ±30°.
    Analogous,
    /// Base and its 180° opposite, each light and dark.
    Complementary,
    /// 120° spacing plus a light and a dark muted base.
    Triadic,
    /// 90° spacing plus a light base.
    Tetradic,
    /// Soft, washed-out hues 60° apart.
    Pastel,
    /// Saturated hues 60° apart.
    Vibrant,
    /// Fixed browns, olive, and moss.
    Earthy,
    /// Fixed blues, teal, green, and purples.
    Cool,
    /// Fixed reds, oranges, and yellow.
    Warm,
}

impl HarmonyKind {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Pastel => "pastel",
            Self::Vibrant => "vibrant",
            Self::Earthy => "earthy",
            Self::Cool => "cool",
            Self::Warm => "warm",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All kinds, wheel harmonies first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic, Self::Analogous, Self::Complementary,
            Self::Triadic, Self::Tetradic, Self::Pastel, Self::Vibrant,
            Self::Earthy, Self::Cool, Self::Warm,
        ]
    }

    /// Whether this is a mood palette (does not start with the base).
    #[must_use]
    pub const fn is_mood(self) -> bool {
        matches!(
            self,
            Self::Pastel | Self::Vibrant | Self::Earthy | Self::Cool | Self::Warm
        )
    }

    /// Generate this kind's palette for `base`. See [`generate_palette`].
    #[must_use]
    pub fn generate(self, base: Color) -> Vec<Color> {
        generate_palette(base, self)
    }
}

/// Generate the 5-entry palette for `base` under `kind`.
#[must_use]
pub fn generate_palette(base: Color, kind: HarmonyKind) -> Vec<Color> {
    generate_palette_with_len(base, kind, DEFAULT_PALETTE_LEN)
}

/// Generate a palette of exactly `len` entries.
///
/// The recipe is padded by darkening its last entry or truncated as needed.
#[must_use]
pub fn generate_palette_with_len(base: Color, kind: HarmonyKind, len: usize) -> Vec<Color> {
    let mut palette = recipe(base, kind);
    fit_to_len(&mut palette, len);
    palette
}

/// Generate a palette by kind name.
///
/// An unrecognized name yields `[base]` alone instead of an error.
#[must_use]
pub fn generate_palette_named(base: Color, name: &str) -> Vec<Color> {
    HarmonyKind::from_name(name).map_or_else(|| vec![base], |kind| generate_palette(base, kind))
}

/// Pad `palette` to `len` by repeatedly darkening the last entry, or
/// truncate it. An empty palette stays empty.
pub fn fit_to_len(palette: &mut Vec<Color>, len: usize) {
    while palette.len() < len {
        let Some(&last) = palette.last() else { return };
        palette.push(last.darken(PAD_DARKEN));
    }
    palette.truncate(len);
}

/// `(h + shift + 360) % 360`, the wrap used by every hue offset below.
fn wrap(h: f64, shift: f64) -> f64 {
    (h + shift + 360.0) % 360.0
}

/// Core recipe dispatch. Each arm lists its entries in palette order.
fn recipe(base: Color, kind: HarmonyKind) -> Vec<Color> {
    let Hsl { h, s, l } = base.to_hsl();
    let at = |shift: f64, s: f64, l: f64| Color::from_hsl(Hsl::new(wrap(h, shift), s, l));
    let fixed = |h: f64, s: f64, l: f64| Color::from_hsl(Hsl::new(h, s, l));

    match kind {
        HarmonyKind::Monochromatic => vec![
            base,
            at(0.0, s, 90.0),
            at(0.0, s, 75.0),
            at(0.0, s, 35.0),
            at(0.0, s, 20.0),
        ],
        HarmonyKind::Analogous => vec![
            base,
            at(-30.0, s, l),
            at(-15.0, s, l),
            at(15.0, s, l),
            at(30.0, s, l),
        ],
        HarmonyKind::Complementary => vec![
            base,
            at(0.0, s, 80.0),
            at(0.0, s, 30.0),
            at(180.0, s, 80.0),
            at(180.0, s, 50.0),
        ],
        HarmonyKind::Triadic => {
            let muted = (s * 0.7).clamp(0.0, 100.0);
            vec![
                base,
                at(120.0, s, l),
                at(240.0, s, l),
                at(0.0, muted, 85.0),
                at(0.0, muted, 25.0),
            ]
        }
        HarmonyKind::Tetradic => vec![
            base,
            at(90.0, s, l),
            at(180.0, s, l),
            at(270.0, s, l),
            at(0.0, s, 85.0),
        ],
        HarmonyKind::Pastel => spread(&at, 25.0, 90.0),
        HarmonyKind::Vibrant => spread(&at, 90.0, 60.0),
        HarmonyKind::Earthy => vec![
            fixed(30.0, 40.0, 70.0),
            fixed(40.0, 60.0, 50.0),
            fixed(20.0, 70.0, 40.0),
            fixed(60.0, 30.0, 60.0),
            fixed(80.0, 20.0, 50.0),
        ],
        HarmonyKind::Cool => vec![
            fixed(210.0, 70.0, 60.0),
            fixed(180.0, 60.0, 50.0),
            fixed(150.0, 50.0, 60.0),
            fixed(240.0, 60.0, 70.0),
            fixed(270.0, 70.0, 50.0),
        ],
        HarmonyKind::Warm => vec![
            fixed(0.0, 70.0, 60.0),
            fixed(20.0, 80.0, 50.0),
            fixed(40.0, 90.0, 60.0),
            fixed(60.0, 80.0, 60.0),
            fixed(30.0, 60.0, 40.0),
        ],
    }
}

/// Five hues 60° apart starting at the base hue, at one saturation and
/// lightness band.
fn spread(at: &impl Fn(f64, f64, f64) -> Color, s: f64, l: f64) -> Vec<Color> {
    [0.0, 60.0, 120.0, 180.0, 240.0].iter().map(|&shift| at(shift, s, l)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
