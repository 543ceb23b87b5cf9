//! Engine tuning constants behind one configuration surface.
//!
//! The numbers that vary between otherwise-identical theme recipes live
//! here instead of in the algorithms: how contrast repair picks its
//! direction, how far it steps, how many steps it may take, and how far
//! each surface sits from its background.
//!
//! Everything defaults to the canonical values, so an empty TOML document
//! is a valid configuration:
//!
//! ```toml
//! palette_len = 5
//!
//! [repair]
//! basis = "luminance"   # or "lightness"; unset fields follow its preset
//! threshold = 0.5       # 0–1 for luminance, 0–100 for lightness
//! step = 5.0
//! max_steps = 20        # at most 20
//! stop_at_clamp = true
//!
//! [surfaces.dark]
//! card = 2.0
//! popover = 3.0
//! border = 8.0
//! input = 7.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of entries in a generated palette.
pub const DEFAULT_PALETTE_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Contrast repair
// ---------------------------------------------------------------------------

/// Which property of the fixed color decides the repair direction.
///
/// A fixed color counts as "light" when this property exceeds
/// [`RepairOptions::threshold`]; the adjustable color is then darkened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionBasis {
    /// WCAG relative luminance, 0–1.
    Luminance,
    /// HSL lightness, 0–100.
    Lightness,
}

/// Upper bound on repair iterations, whatever the configuration says.
pub const MAX_REPAIR_STEPS: u32 = 20;

/// Parameters for the contrast repair loop.
///
/// When read from TOML, fields left out take the preset of the chosen
/// basis, so `basis = "lightness"` alone yields [`RepairOptions::LIGHTNESS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RepairOptionsFile")]
pub struct RepairOptions {
    pub basis: DirectionBasis,
    pub threshold: f64,
    /// Lightness change per iteration, in percentage points.
    pub step: f64,
    /// Iteration cap, 1..=[`MAX_REPAIR_STEPS`].
    pub max_steps: u32,
    /// Stop early once lightness is pinned at 0 or 100.
    pub stop_at_clamp: bool,
}

impl RepairOptions {
    /// Direction from relative luminance > 0.5, stopping at the clamp.
    pub const LUMINANCE: Self = Self {
        basis: DirectionBasis::Luminance,
        threshold: 0.5,
        step: 5.0,
        max_steps: 20,
        stop_at_clamp: true,
    };

    /// Direction from HSL lightness > 50, always spending the full cap
    /// when the target is unreachable.
    pub const LIGHTNESS: Self = Self {
        basis: DirectionBasis::Lightness,
        threshold: 50.0,
        step: 5.0,
        max_steps: 20,
        stop_at_clamp: false,
    };

    /// The preset for `basis`.
    #[must_use]
    pub const fn for_basis(basis: DirectionBasis) -> Self {
        match basis {
            DirectionBasis::Luminance => Self::LUMINANCE,
            DirectionBasis::Lightness => Self::LIGHTNESS,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_REPAIR_STEPS).contains(&self.max_steps) {
            return Err(ConfigError::Invalid(format!(
                "repair.max_steps must be in 1..={MAX_REPAIR_STEPS}, got {}",
                self.max_steps
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "repair.step must be a positive number, got {}",
                self.step
            )));
        }
        let range = match self.basis {
            DirectionBasis::Luminance => 0.0..=1.0,
            DirectionBasis::Lightness => 0.0..=100.0,
        };
        if !range.contains(&self.threshold) {
            return Err(ConfigError::Invalid(format!(
                "repair.threshold {} is outside {}..={} for basis {:?}",
                self.threshold,
                range.start(),
                range.end(),
                self.basis
            )));
        }
        Ok(())
    }
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self::LUMINANCE
    }
}

/// On-disk shape of `[repair]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RepairOptionsFile {
    basis: Option<DirectionBasis>,
    threshold: Option<f64>,
    step: Option<f64>,
    max_steps: Option<u32>,
    stop_at_clamp: Option<bool>,
}

impl From<RepairOptionsFile> for RepairOptions {
    fn from(file: RepairOptionsFile) -> Self {
        let preset = Self::for_basis(file.basis.unwrap_or(DirectionBasis::Luminance));
        Self {
            basis: preset.basis,
            threshold: file.threshold.unwrap_or(preset.threshold),
            step: file.step.unwrap_or(preset.step),
            max_steps: file.max_steps.unwrap_or(preset.max_steps),
            stop_at_clamp: file.stop_at_clamp.unwrap_or(preset.stop_at_clamp),
        }
    }
}

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

/// Lightness offsets (magnitudes, percentage points) of each surface from
/// its background. The sign comes from the mode: dark mode lightens,
/// light mode darkens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceDeltas {
    pub card: f64,
    pub popover: f64,
    pub border: f64,
    pub input: f64,
}

impl SurfaceDeltas {
    pub const DARK: Self = Self { card: 2.0, popover: 3.0, border: 8.0, input: 7.0 };
    pub const LIGHT: Self = Self { card: 2.0, popover: 2.0, border: 8.0, input: 7.0 };

    fn validate(&self, mode: &str) -> Result<(), ConfigError> {
        for (name, v) in [
            ("card", self.card),
            ("popover", self.popover),
            ("border", self.border),
            ("input", self.input),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "surfaces.{mode}.{name} must be a non-negative number, got {v}"
                )));
            }
        }
        if self.border < self.card || self.input < self.card {
            return Err(ConfigError::Invalid(format!(
                "surfaces.{mode}: border ({}) and input ({}) must be at least card ({})",
                self.border, self.input, self.card
            )));
        }
        Ok(())
    }
}

/// Surface offsets for both appearances.
///
/// A partially specified table keeps the canonical value for its mode in
/// every field it leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SurfaceConfigFile")]
pub struct SurfaceConfig {
    pub dark: SurfaceDeltas,
    pub light: SurfaceDeltas,
}

impl SurfaceConfig {
    pub const CANONICAL: Self = Self {
        dark: SurfaceDeltas::DARK,
        light: SurfaceDeltas::LIGHT,
    };

    /// Offsets for the requested appearance.
    #[must_use]
    pub const fn for_mode(&self, is_dark: bool) -> &SurfaceDeltas {
        if is_dark { &self.dark } else { &self.light }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// On-disk shape of one `[surfaces.*]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DeltasFile {
    card: Option<f64>,
    popover: Option<f64>,
    border: Option<f64>,
    input: Option<f64>,
}

impl DeltasFile {
    fn over(self, base: SurfaceDeltas) -> SurfaceDeltas {
        SurfaceDeltas {
            card: self.card.unwrap_or(base.card),
            popover: self.popover.unwrap_or(base.popover),
            border: self.border.unwrap_or(base.border),
            input: self.input.unwrap_or(base.input),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SurfaceConfigFile {
    dark: DeltasFile,
    light: DeltasFile,
}

impl From<SurfaceConfigFile> for SurfaceConfig {
    fn from(file: SurfaceConfigFile) -> Self {
        Self {
            dark: file.dark.over(SurfaceDeltas::DARK),
            light: file.light.over(SurfaceDeltas::LIGHT),
        }
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub palette_len: usize,
    pub repair: RepairOptions,
    pub surfaces: SurfaceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette_len: DEFAULT_PALETTE_LEN,
            repair: RepairOptions::default(),
            surfaces: SurfaceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when a value breaks an engine invariant.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file can't be read, plus
    /// everything [`EngineConfig::from_toml_str`] can return.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            basis = ?config.repair.basis,
            "loaded engine config"
        );
        Ok(config)
    }

    /// Check every invariant the algorithms rely on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette_len == 0 {
            return Err(ConfigError::Invalid("palette_len must be at least 1".into()));
        }
        self.repair.validate()?;
        self.surfaces.dark.validate("dark")?;
        self.surfaces.light.validate("light")?;
        Ok(())
    }

    /// Serialize back to TOML (for `shade config`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if a value has no TOML form.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
