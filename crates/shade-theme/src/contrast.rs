//! WCAG contrast measurement and best-effort contrast repair.
//!
//! Measurement follows WCAG 2.x exactly: relative luminance from
//! linearized sRGB, ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
//!
//! Repair is simple and bounded. It walks the adjustable
//! color's HSL lightness in fixed steps away from the fixed color until the
//! target ratio is met or the step budget runs out. It never fails, and it
//! never promises the target was reached; [`repair_contrast`] reports what
//! actually happened.

use shade_color::Color;

use crate::config::{DirectionBasis, MAX_REPAIR_STEPS, RepairOptions};

/// WCAG AA minimum for normal-size text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// WCAG AA minimum for large text (and UI components).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// WCAG AAA minimum for normal-size text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// WCAG AAA minimum for large text.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

/// Target ratio used when the caller doesn't name one.
pub const DEFAULT_MIN_CONTRAST: f64 = WCAG_AA_NORMAL_TEXT;

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// Linearize one 8-bit sRGB channel.
fn channel_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.x.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = channel_to_linear(color.r);
    let g = channel_to_linear(color.g);
    let b = channel_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether the pair reaches WCAG AA for normal text.
#[must_use]
pub fn meets_wcag_aa(a: Color, b: Color) -> bool {
    contrast_ratio(a, b) >= WCAG_AA_NORMAL_TEXT
}

/// Whether the pair reaches WCAG AAA for normal text.
#[must_use]
pub fn meets_wcag_aaa(a: Color, b: Color) -> bool {
    contrast_ratio(a, b) >= WCAG_AAA_NORMAL_TEXT
}

/// A background/foreground pairing. The ratio is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContrastPair {
    pub background: Color,
    pub foreground: Color,
}

impl ContrastPair {
    #[must_use]
    pub const fn new(background: Color, foreground: Color) -> Self {
        Self { background, foreground }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        contrast_ratio(self.background, self.foreground)
    }

    /// Repair the foreground against the background.
    #[must_use]
    pub fn repaired(self, min_ratio: f64, options: &RepairOptions) -> Self {
        Self {
            foreground: ensure_contrast_with(self.background, self.foreground, min_ratio, options),
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

/// Which way the adjustable color's lightness moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Darken,
    Lighten,
}

impl Direction {
    /// Pick the direction from the fixed color alone: darken against a
    /// light color, lighten against a dark one.
    #[must_use]
    pub fn against(fixed: Color, options: &RepairOptions) -> Self {
        let measure = match options.basis {
            DirectionBasis::Luminance => relative_luminance(fixed),
            DirectionBasis::Lightness => fixed.to_hsl().l,
        };
        if measure > options.threshold { Self::Darken } else { Self::Lighten }
    }

    const fn sign(self) -> f64 {
        match self {
            Self::Darken => -1.0,
            Self::Lighten => 1.0,
        }
    }

    /// The extreme this direction heads toward.
    #[must_use]
    pub const fn extreme(self) -> Color {
        match self {
            Self::Darken => Color::BLACK,
            Self::Lighten => Color::WHITE,
        }
    }
}

/// Outcome of a contrast repair run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repair {
    /// Best-effort adjusted color.
    pub color: Color,
    /// Ratio of `color` against the fixed color.
    pub ratio: f64,
    /// Lightness steps taken (never more than `max_steps`).
    pub steps: u32,
    /// Whether `ratio` reached the requested minimum.
    pub satisfied: bool,
    pub direction: Direction,
}

/// Nudge `adjustable` until it contrasts with `fixed` by at least
/// `min_ratio`, reporting the full outcome.
///
/// The direction is decided once from `fixed`. Each step moves HSL
/// lightness by `options.step` points (clamped to 0–100). The loop ends
/// when the target is met, after `options.max_steps` steps (never more
/// than [`MAX_REPAIR_STEPS`]), or, with
/// `options.stop_at_clamp`, as soon as lightness stops changing.
#[must_use]
pub fn repair_contrast(
    fixed: Color,
    adjustable: Color,
    min_ratio: f64,
    options: &RepairOptions,
) -> Repair {
    let direction = Direction::against(fixed, options);
    let delta = direction.sign() * options.step;

    let mut color = adjustable;
    let mut ratio = contrast_ratio(fixed, color);
    let mut steps = 0;
    let cap = options.max_steps.min(MAX_REPAIR_STEPS);

    while ratio < min_ratio && steps < cap {
        let hsl = color.to_hsl();
        let next = hsl.with_lightness(hsl.l + delta);
        #[allow(clippy::float_cmp)]
        let pinned = next.l == hsl.l;
        if options.stop_at_clamp && pinned {
            break;
        }
        color = Color::from_hsl(next);
        ratio = contrast_ratio(fixed, color);
        steps += 1;
        tracing::trace!(step = steps, color = %color, ratio, "contrast repair step");
    }

    let satisfied = ratio >= min_ratio;
    if !satisfied {
        tracing::debug!(
            fixed = %fixed,
            adjustable = %adjustable,
            result = %color,
            ratio,
            min_ratio,
            steps,
            "contrast target not reached"
        );
    }

    Repair { color, ratio, steps, satisfied, direction }
}

/// Best-effort contrast repair with explicit options.
#[must_use]
pub fn ensure_contrast_with(
    fixed: Color,
    adjustable: Color,
    min_ratio: f64,
    options: &RepairOptions,
) -> Color {
    repair_contrast(fixed, adjustable, min_ratio, options).color
}

/// Best-effort contrast repair with the canonical options.
///
/// May return a color below `min_ratio`; check [`contrast_ratio`] or use
/// [`ensure_contrast_or_fallback`] when the target is a hard requirement.
#[must_use]
pub fn ensure_contrast(fixed: Color, adjustable: Color, min_ratio: f64) -> Color {
    ensure_contrast_with(fixed, adjustable, min_ratio, &RepairOptions::default())
}

/// Contrast repair that falls back to pure black or white (whichever the
/// repair was heading toward) when the step budget runs out short of the
/// target.
#[must_use]
pub fn ensure_contrast_or_fallback(
    fixed: Color,
    adjustable: Color,
    min_ratio: f64,
    options: &RepairOptions,
) -> Color {
    let repair = repair_contrast(fixed, adjustable, min_ratio, options);
    if repair.satisfied {
        repair.color
    } else {
        repair.direction.extreme()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::from_hex_lossy(s)
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-12));
    }

    #[test]
    fn luminance_pure_red() {
        assert!(approx_eq(relative_luminance(hex("#ff0000")), 0.2126, 1e-9));
    }

    #[test]
    fn luminance_pure_green() {
        assert!(approx_eq(relative_luminance(hex("#00ff00")), 0.7152, 1e-9));
    }

    #[test]
    fn luminance_low_channel_is_linear() {
        // 10/255 ≈ 0.0392 sits at the linear segment's edge.
        let lum = relative_luminance(Color::rgb(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-9), "{lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#3b82f6");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#cc3344");
        let b = hex("#1a1a66");
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn known_zinc_pair() {
        // zinc-500 on white is a well-known ~4.8:1.
        let ratio = contrast_ratio(Color::WHITE, hex("#71717a"));
        assert!(ratio > 4.5 && ratio < 5.0, "{ratio}");
    }

    #[test]
    fn pair_ratio_matches_free_function() {
        let pair = ContrastPair::new(hex("#09090b"), hex("#fafafa"));
        assert!(approx_eq(pair.ratio(), contrast_ratio(pair.background, pair.foreground), 1e-12));
        assert!(meets_wcag_aa(pair.background, pair.foreground));
        assert!(meets_wcag_aaa(pair.background, pair.foreground));
    }

    // ── Direction ───────────────────────────────────────────────────

    #[test]
    fn direction_against_white_darkens() {
        assert_eq!(Direction::against(Color::WHITE, &RepairOptions::LUMINANCE), Direction::Darken);
        assert_eq!(Direction::against(Color::WHITE, &RepairOptions::LIGHTNESS), Direction::Darken);
    }

    #[test]
    fn direction_against_black_lightens() {
        assert_eq!(Direction::against(Color::BLACK, &RepairOptions::LUMINANCE), Direction::Lighten);
        assert_eq!(Direction::against(Color::BLACK, &RepairOptions::LIGHTNESS), Direction::Lighten);
    }

    #[test]
    fn bases_disagree_on_yellow() {
        // Yellow and blue both sit at HSL lightness 50. Yellow's luminance
        // is 0.93, blue's 0.07.
        let yellow = hex("#ffff00");
        assert_eq!(Direction::against(yellow, &RepairOptions::LUMINANCE), Direction::Darken);
        assert_eq!(Direction::against(yellow, &RepairOptions::LIGHTNESS), Direction::Lighten);
        let blue = hex("#0000ff");
        assert_eq!(Direction::against(blue, &RepairOptions::LUMINANCE), Direction::Lighten);
        assert_eq!(Direction::against(blue, &RepairOptions::LIGHTNESS), Direction::Lighten);
    }

    // ── Repair ──────────────────────────────────────────────────────

    #[test]
    fn already_sufficient_is_untouched() {
        let repair = repair_contrast(Color::WHITE, Color::BLACK, 4.5, &RepairOptions::default());
        assert_eq!(repair.color, Color::BLACK);
        assert_eq!(repair.steps, 0);
        assert!(repair.satisfied);
    }

    #[test]
    fn light_background_darkens_foreground() {
        let fg = hex("#a0a0a0");
        let repair = repair_contrast(Color::WHITE, fg, 4.5, &RepairOptions::default());
        assert!(repair.satisfied, "{repair:?}");
        assert!(repair.color.to_hsl().l < fg.to_hsl().l);
        assert!(repair.ratio >= 4.5);
    }

    #[test]
    fn dark_background_lightens_foreground() {
        let bg = hex("#09090b");
        let fg = hex("#333344");
        let repair = repair_contrast(bg, fg, 4.5, &RepairOptions::default());
        assert!(repair.satisfied, "{repair:?}");
        assert!(repair.color.to_hsl().l > fg.to_hsl().l);
    }

    #[test]
    fn repair_preserves_hue_roughly() {
        let fg = hex("#3060c0");
        let repair = repair_contrast(hex("#101018"), fg, 7.0, &RepairOptions::default());
        let diff = (repair.color.to_hsl().h - fg.to_hsl().h).abs();
        assert!(diff < 3.0 || diff > 357.0, "hue moved by {diff}");
    }

    #[test]
    fn unreachable_target_stops_at_clamp() {
        // Mid gray against itself can't reach 21:1 in either direction.
        let gray = hex("#777777");
        let repair = repair_contrast(gray, gray, 21.0, &RepairOptions::LUMINANCE);
        assert!(!repair.satisfied);
        assert!(repair.steps < 20, "should stop once pinned: {}", repair.steps);
        assert_eq!(repair.color, Color::WHITE);
    }

    #[test]
    fn unreachable_target_without_clamp_stop_spends_cap() {
        let gray = hex("#777777");
        let repair = repair_contrast(gray, gray, 21.0, &RepairOptions::LIGHTNESS);
        assert!(!repair.satisfied);
        assert_eq!(repair.steps, 20);
    }

    #[test]
    fn step_cap_is_respected() {
        let options = RepairOptions { step: 0.5, ..RepairOptions::LUMINANCE };
        let repair = repair_contrast(Color::WHITE, Color::WHITE, 4.5, &options);
        assert_eq!(repair.steps, 20);
        assert!(!repair.satisfied);
    }

    #[test]
    fn oversized_cap_is_clamped() {
        let options = RepairOptions {
            step: 0.0001,
            max_steps: 100_000,
            stop_at_clamp: false,
            ..RepairOptions::LIGHTNESS
        };
        let gray = hex("#777777");
        let repair = repair_contrast(gray, gray, 21.0, &options);
        assert_eq!(repair.steps, MAX_REPAIR_STEPS);
        assert!(!repair.satisfied);
    }

    #[test]
    fn fallback_used_when_unmet() {
        let options = RepairOptions { max_steps: 1, ..RepairOptions::LUMINANCE };
        let fixed = Color::WHITE;
        let out = ensure_contrast_or_fallback(fixed, hex("#eeeeee"), 4.5, &options);
        assert_eq!(out, Color::BLACK);
    }

    #[test]
    fn fallback_not_used_when_met() {
        let fg = hex("#a0a0a0");
        let out = ensure_contrast_or_fallback(Color::WHITE, fg, 4.5, &RepairOptions::LUMINANCE);
        assert_eq!(out, ensure_contrast(Color::WHITE, fg, 4.5));
        assert_ne!(out, Color::BLACK);
    }

    #[test]
    fn pair_repaired_keeps_background() {
        let pair = ContrastPair::new(Color::WHITE, hex("#cccccc"));
        let fixed = pair.repaired(4.5, &RepairOptions::default());
        assert_eq!(fixed.background, Color::WHITE);
        assert!(fixed.ratio() >= 4.5);
    }
}
