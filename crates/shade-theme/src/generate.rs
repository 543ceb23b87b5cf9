//! Theme assembly: palette in, light and dark [`Theme`]s out.
//!
//! Palette roles:
//!
//! - `p[0]` drives primary and ring
//! - `p[1]` drives the light background, secondary, and muted
//! - `p[2]` drives accent
//!
//! The dark theme always sits on a near-black zinc background with white
//! text; the light theme's background is a washed-out `p[1]`. Every
//! foreground placed on a palette-derived fill goes through contrast repair.

use rand::Rng;
use shade_color::{Color, random_color_with};

use crate::config::EngineConfig;
use crate::contrast::{DEFAULT_MIN_CONTRAST, WCAG_AA_LARGE_TEXT, ensure_contrast_with};
use crate::harmony::{HarmonyKind, fit_to_len, generate_palette_with_len};
use crate::surface::derive_surfaces_with;
use crate::theme::{Theme, ThemePair};

/// Palette entries the recipe reads.
const ROLES: usize = 3;

const LIGHT_FOREGROUND: Color = Color::rgb(0x09, 0x09, 0x0b);
const LIGHT_MUTED_FOREGROUND: Color = Color::rgb(0x71, 0x71, 0x7a);
const LIGHT_DESTRUCTIVE: Color = Color::rgb(0xef, 0x44, 0x44);

const DARK_BACKGROUND: Color = Color::rgb(0x09, 0x09, 0x0b);
const DARK_FOREGROUND: Color = Color::WHITE;
const DARK_MUTED_FOREGROUND: Color = Color::rgb(0xa1, 0xa1, 0xaa);
const DARK_DESTRUCTIVE: Color = Color::rgb(0x7f, 0x1d, 0x1d);
const DARK_DESTRUCTIVE_FOREGROUND: Color = Color::rgb(0xef, 0x44, 0x44);

impl ThemePair {
    /// Build both themes from a palette.
    ///
    /// Palettes shorter than three entries are padded the same way
    /// [`fit_to_len`] pads harmony palettes. An empty palette is treated as
    /// `[#000000]`.
    #[must_use]
    pub fn from_palette(palette: &[Color], radius: &str, config: &EngineConfig) -> Self {
        let mut p = if palette.is_empty() { vec![Color::BLACK] } else { palette.to_vec() };
        if p.len() < ROLES {
            fit_to_len(&mut p, ROLES);
        }
        let pair = Self {
            light: light_theme(&p, radius, config),
            dark: dark_theme(&p, radius, config),
        };
        tracing::debug!(
            primary = %pair.light.primary,
            light_bg = %pair.light.background,
            "assembled theme pair"
        );
        pair
    }

    /// Build both themes from `base` under a harmony.
    #[must_use]
    pub fn generate(base: Color, kind: HarmonyKind, radius: &str, config: &EngineConfig) -> Self {
        let palette = generate_palette_with_len(base, kind, config.palette_len);
        Self::from_palette(&palette, radius, config)
    }

    /// Build both themes from a random base color drawn from `rng`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(
        kind: HarmonyKind,
        rng: &mut R,
        radius: &str,
        config: &EngineConfig,
    ) -> Self {
        let base = random_color_with(rng);
        tracing::debug!(base = %base, kind = kind.name(), "random theme");
        Self::generate(base, kind, radius, config)
    }
}

fn light_theme(p: &[Color], radius: &str, config: &EngineConfig) -> Theme {
    let repair =
        |fill: Color, text: Color, min: f64| ensure_contrast_with(fill, text, min, &config.repair);
    let background = p[1].lighten(10.0).desaturate(50.0);
    let surfaces = derive_surfaces_with(background, false, &config.surfaces);
    let fg = LIGHT_FOREGROUND;

    let secondary = p[1].lighten(30.0);
    let muted = p[1].lighten(35.0).desaturate(30.0);
    let accent = p[2].lighten(30.0);

    Theme {
        background: surfaces.background,
        foreground: fg,
        card: surfaces.card,
        card_foreground: fg,
        popover: surfaces.popover,
        popover_foreground: fg,
        primary: p[0],
        primary_foreground: repair(p[0], Color::WHITE, DEFAULT_MIN_CONTRAST),
        secondary,
        secondary_foreground: repair(secondary, fg, DEFAULT_MIN_CONTRAST),
        muted,
        muted_foreground: repair(muted, LIGHT_MUTED_FOREGROUND, WCAG_AA_LARGE_TEXT),
        accent,
        accent_foreground: repair(accent, fg, DEFAULT_MIN_CONTRAST),
        destructive: LIGHT_DESTRUCTIVE,
        destructive_foreground: Color::WHITE,
        border: surfaces.border,
        input: surfaces.input,
        ring: p[0].lighten(20.0),
        radius: radius.to_string(),
    }
}

fn dark_theme(p: &[Color], radius: &str, config: &EngineConfig) -> Theme {
    let repair =
        |fill: Color, text: Color, min: f64| ensure_contrast_with(fill, text, min, &config.repair);
    let surfaces = derive_surfaces_with(DARK_BACKGROUND, true, &config.surfaces);
    let fg = DARK_FOREGROUND;

    let primary = p[0].lighten(20.0);
    let secondary = p[1].darken(30.0);
    let muted = p[1].darken(40.0);
    let accent = p[2].darken(30.0);

    Theme {
        background: surfaces.background,
        foreground: fg,
        card: surfaces.card,
        card_foreground: fg,
        popover: surfaces.popover,
        popover_foreground: fg,
        primary,
        primary_foreground: repair(primary, DARK_BACKGROUND, DEFAULT_MIN_CONTRAST),
        secondary,
        secondary_foreground: repair(secondary, fg, DEFAULT_MIN_CONTRAST),
        muted,
        muted_foreground: repair(muted, DARK_MUTED_FOREGROUND, WCAG_AA_LARGE_TEXT),
        accent,
        accent_foreground: repair(accent, fg, DEFAULT_MIN_CONTRAST),
        destructive: DARK_DESTRUCTIVE,
        destructive_foreground: DARK_DESTRUCTIVE_FOREGROUND,
        border: surfaces.border,
        input: surfaces.input,
        ring: p[0].darken(20.0),
        radius: radius.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
