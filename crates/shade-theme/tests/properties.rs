//! Property tests across the color core and the theme engine.

use proptest::prelude::*;
use shade_color::{Color, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
use shade_theme::config::{MAX_REPAIR_STEPS, RepairOptions};
use shade_theme::{
    EngineConfig, HarmonyKind, ThemePair, contrast_ratio, derive_surfaces, generate_palette,
    repair_contrast, to_css,
};

fn any_color() -> impl Strategy<Value = Color> {
    (0u32..(1 << 24)).prop_map(Color::from_u24)
}

fn any_kind() -> impl Strategy<Value = HarmonyKind> {
    prop::sample::select(HarmonyKind::all().to_vec())
}

fn any_options() -> impl Strategy<Value = RepairOptions> {
    prop_oneof![Just(RepairOptions::LUMINANCE), Just(RepairOptions::LIGHTNESS)]
}

proptest! {
    #[test]
    fn hex_round_trips(c in any_color()) {
        let hex = c.to_hex();
        let (r, g, b) = hex_to_rgb(&hex);
        prop_assert_eq!(rgb_to_hex(f64::from(r), f64::from(g), f64::from(b)), hex);
    }

    #[test]
    fn hsl_round_trip_within_one(c in any_color()) {
        let (h, s, l) = hex_to_hsl(&c.to_hex());
        let back = Color::from_hex_lossy(&hsl_to_hex(h, s, l));
        for (a, b) in [(c.r, back.r), (c.g, back.g), (c.b, back.b)] {
            prop_assert!(a.abs_diff(b) <= 1, "{} -> {}", c, back);
        }
    }

    #[test]
    fn lightness_clamps_at_top(c in any_color()) {
        let l = c.to_hsl().l;
        prop_assert_eq!(c.adjust_lightness(1000.0), c.adjust_lightness(100.0 - l));
        prop_assert_eq!(c.adjust_lightness(1000.0), Color::WHITE);
    }

    #[test]
    fn contrast_is_symmetric(a in any_color(), b in any_color()) {
        prop_assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    #[test]
    fn contrast_with_self_is_one(c in any_color()) {
        prop_assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn contrast_is_bounded(a in any_color(), b in any_color()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
    }

    #[test]
    fn palettes_have_five_entries(base in any_color(), kind in any_kind()) {
        let palette = generate_palette(base, kind);
        prop_assert_eq!(palette.len(), 5);
        if matches!(
            kind,
            HarmonyKind::Monochromatic
                | HarmonyKind::Analogous
                | HarmonyKind::Complementary
                | HarmonyKind::Triadic
                | HarmonyKind::Tetradic
        ) {
            prop_assert_eq!(palette[0], base);
        }
    }

    #[test]
    fn repair_terminates(
        fixed in any_color(),
        adjustable in any_color(),
        min in 1.0f64..25.0,
        options in any_options(),
    ) {
        let repair = repair_contrast(fixed, adjustable, min, &options);
        prop_assert!(repair.steps <= options.max_steps);
        prop_assert_eq!(repair.satisfied, repair.ratio >= min);
    }

    #[test]
    fn repair_never_exceeds_hard_cap(
        fixed in any_color(),
        max_steps in any::<u32>(),
        stop_at_clamp in any::<bool>(),
    ) {
        let options = RepairOptions {
            max_steps,
            stop_at_clamp,
            step: 0.001,
            ..RepairOptions::LIGHTNESS
        };
        let repair = repair_contrast(fixed, fixed, 21.0, &options);
        prop_assert!(repair.steps <= MAX_REPAIR_STEPS);
    }

    #[test]
    fn dark_surfaces_sit_above(base in any_color()) {
        prop_assume!(base.to_hsl().l <= 90.0);
        let set = derive_surfaces(base, true);
        let l0 = base.to_hsl().l;
        for c in [set.card, set.popover, set.border, set.input] {
            prop_assert!(c.to_hsl().l > l0, "{} vs {}", c, base);
        }
        prop_assert!(set.border.to_hsl().l - l0 >= set.card.to_hsl().l - l0);
    }

    #[test]
    fn light_surfaces_sit_below(base in any_color()) {
        prop_assume!(base.to_hsl().l >= 10.0);
        let set = derive_surfaces(base, false);
        let l0 = base.to_hsl().l;
        for c in [set.card, set.popover, set.border, set.input] {
            prop_assert!(c.to_hsl().l < l0, "{} vs {}", c, base);
        }
    }

    #[test]
    fn generated_css_is_complete(base in any_color(), kind in any_kind()) {
        let pair = ThemePair::generate(base, kind, "0.5rem", &EngineConfig::default());
        let css = to_css(&pair);
        prop_assert_eq!(css.matches("--").count(), 39);
        prop_assert!(css.starts_with(":root {\n"), "missing :root block: {}", css);
        prop_assert!(css.ends_with('}'), "unterminated .dark block: {}", css);
    }
}

#[test]
fn black_on_white_is_twenty_one() {
    assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 1e-9);
}
