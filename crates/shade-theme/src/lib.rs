//! # shade-theme: UI theme generation from color theory
//!
//! Produces complete light and dark UI themes from one base color and a
//! harmony rule. Every text color placed on a generated fill is nudged
//! toward WCAG-readable contrast, and surfaces (card, popover, border,
//! input) are derived from their background so they always read as layers
//! above it.
//!
//! # Architecture
//!
//! ```text
//! base Color + HarmonyKind
//!     │
//!     ▼
//! harmony.rs:  5-entry palette (hue offsets, mood presets)
//!     │
//!     ▼
//! surface.rs:  background → card/popover/border/input
//!     │
//!     ▼
//! contrast.rs: WCAG ratio + bounded lightness repair for foregrounds
//!     │
//!     ▼
//! generate.rs: assemble ThemePair (19 semantic slots per appearance)
//!     │
//!     ▼
//! css.rs:      :root / .dark custom properties, live StyleSink
//! ```
//!
//! # Color Space
//!
//! Colors are stored as packed 8-bit sRGB ([`shade_color::Color`]). Every
//! adjustment round-trips through unrounded HSL and is quantized once on
//! the way back. Tuning constants live in [`config::EngineConfig`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Recipe tables are one long match.
#![allow(clippy::too_many_lines)]

pub mod builtin;
pub mod config;
pub mod contrast;
pub mod css;
pub mod error;
pub mod generate;
pub mod harmony;
pub mod surface;
pub mod theme;

pub use config::{DirectionBasis, EngineConfig, RepairOptions, SurfaceConfig, SurfaceDeltas};
pub use contrast::{
    ContrastPair, Direction, Repair, contrast_ratio, ensure_contrast, ensure_contrast_or_fallback,
    ensure_contrast_with, relative_luminance, repair_contrast,
};
pub use css::{StyleSink, apply_theme, to_css};
pub use error::ConfigError;
pub use harmony::{HarmonyKind, generate_palette, generate_palette_named, generate_palette_with_len};
pub use surface::{SurfaceSet, derive_surfaces, derive_surfaces_with};
pub use theme::{Theme, ThemeKey, ThemePair};
