// SPDX-License-Identifier: MIT
//
// shade-color: color space core for the shade theming engine.
//
// Packed 24-bit sRGB is the canonical value; HSL is the working space for
// every lightness, saturation, and hue operation. Nothing here performs
// I/O or holds state, and every function is total: malformed hex decodes
// to black instead of failing.

pub mod adjust;
pub mod color;

pub use adjust::{
    adjust_lightness, adjust_lightness_hex, adjust_saturation, adjust_saturation_hex,
    random_color, random_color_with,
};
pub use color::{
    Color, Hsl, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hue, rgb_to_hex,
    rgb_to_hsl,
};
