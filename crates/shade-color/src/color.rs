// SPDX-License-Identifier: MIT
//
// shade color core: packed sRGB with an HSL view.
//
// Conversion pipeline:
//
//   hex string ↔ packed sRGB (u8 × 3) ↔ float sRGB (0–255) ↔ HSL (deg, %, %)
//
// The float legs never round. Quantization happens exactly once, when a
// float triple is packed back into 8-bit channels.

// r, g, b, h, s, l, p, q, t are the usual color-science names.
#![allow(clippy::many_single_char_names)]

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// This is the canonical value the engine passes around. It converts
/// losslessly to and from `#rrggbb` and exposes an [`Hsl`] view for
/// lightness, saturation, and hue arithmetic.
///
/// # Examples
///
/// ```
/// use shade_color::Color;
///
/// let blue = Color::parse_hex("#3B82F6").unwrap();
/// assert_eq!(blue.to_hex(), "#3b82f6");
///
/// let hsl = blue.to_hsl();
/// assert_eq!(Color::from_hsl(hsl), blue);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black. Also what malformed hex input decodes to.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are
    /// ignored.
    #[inline]
    #[must_use]
    pub const fn from_u24(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Create a color from float channels in 0–255.
    ///
    /// Each channel is rounded to the nearest integer and clamped.
    #[must_use]
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive, `#` optional).
    ///
    /// Returns `None` for anything else. This is the strict entry point;
    /// [`Color::from_hex_lossy`] is the lenient one.
    #[must_use]
    pub fn parse_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Parse a hex color, decoding malformed input as black.
    ///
    /// Not a validator: `"#000000"` and `"garbage"` produce the same value.
    #[must_use]
    pub fn from_hex_lossy(s: &str) -> Self {
        parse_hex(s).unwrap_or(Self::BLACK)
    }

    /// Create a color from HSL. The result is quantized to 8-bit channels.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::from_rgb_f64(r, g, b)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// HSL view of this color.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_rgb_f64();
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Hsl { h, s, l }
    }

    /// Channels as floats in 0–255.
    #[must_use]
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        (f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Whether all three channels are equal (no hue).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue/saturation/lightness triple.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation in percent, [0, 100]
/// - `l`: lightness in percent, [0, 100]
///
/// Values are kept unrounded; see [`Color::from_hsl`] for quantization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Return a copy with the hue rotated by `degrees`, wrapped to [0, 360).
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Return a copy with lightness replaced (clamped to 0–100).
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Return a copy with saturation replaced (clamped to 0–100).
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }
}

impl From<Color> for Hsl {
    fn from(c: Color) -> Self {
        c.to_hsl()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

// ─── Function-level API ──────────────────────────────────────────────────────
//
// Primitive-valued entry points for callers that hold hex strings and
// tuples instead of `Color` values. Each is a thin wrapper over the same
// math the methods above use.

/// Parse a 3- or 6-digit hex color into 8-bit channels.
///
/// Malformed input (wrong length, non-hex characters) yields `(0, 0, 0)`.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    Color::from_hex_lossy(hex).into()
}

/// Encode float channels as lowercase `#rrggbb`.
///
/// Channels are rounded to the nearest integer and clamped to 0–255.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Color::from_rgb_f64(r, g, b).to_hex()
}

/// Convert sRGB channels (0–255) to HSL (degrees, percent, percent).
///
/// Achromatic inputs produce hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= 0.0 {
        return (0.0, 0.0, l * 100.0);
    }

    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    // Channel-of-maximum branch; ties resolve red, then green.
    #[allow(clippy::float_cmp)]
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL (degrees, percent, percent) to float sRGB channels (0–255).
///
/// Does not round; rounding belongs to the final hex encoding.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s <= 0.0 {
        return (l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    (r * 255.0, g * 255.0, b * 255.0)
}

/// Hex string straight to HSL.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> (f64, f64, f64) {
    let (r, g, b) = hex_to_rgb(hex);
    rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b))
}

/// HSL straight to a hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    rgb_to_hex(r, g, b)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Piecewise hue ramp used by HSL → RGB. `t` is a hue fraction that may sit
/// up to one unit outside [0, 1].
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// Round a float channel and clamp it into a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(Color::from_u24),
        3 => {
            let mut nibbles = digits.chars().filter_map(|c| c.to_digit(16));
            let mut next = || nibbles.next().map(|n| (n * 17) as u8);
            Some(Color::rgb(next()?, next()?, next()?))
        }
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
