// SPDX-License-Identifier: MIT
//
// Command-line surface. Every color argument is validated here, so the
// engine only ever sees well-formed colors.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{ArgAction, Parser, Subcommand};
use regex::Regex;
use shade_color::Color;
use shade_theme::{DirectionBasis, HarmonyKind};

// A fixed literal; it either compiles on first use or never.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern")
});

#[derive(Debug, Parser)]
#[command(name = "shade", version, about = "Color-theory engine for UI themes")]
pub struct Args {
    /// Engine config file (TOML). Defaults apply when omitted.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a color as hex, RGB, and HSL.
    Convert {
        #[arg(value_parser = parse_color)]
        color: Color,
    },

    /// Generate a harmony palette from a base color.
    Palette {
        #[arg(value_parser = parse_color)]
        base: Color,
        /// Harmony kind.
        #[arg(short = 'k', long = "kind", default_value = "analogous", value_parser = parse_kind)]
        kind: HarmonyKind,
        /// Palette length (overrides the config).
        #[arg(short = 'n', long = "len")]
        len: Option<usize>,
    },

    /// Measure the WCAG contrast ratio between two colors.
    Contrast {
        #[arg(value_parser = parse_color)]
        a: Color,
        #[arg(value_parser = parse_color)]
        b: Color,
    },

    /// Adjust a foreground until it contrasts with a fixed background.
    Repair {
        #[arg(value_parser = parse_color)]
        fixed: Color,
        #[arg(value_parser = parse_color)]
        adjustable: Color,
        /// Target ratio.
        #[arg(short = 'm', long = "min", default_value_t = 4.5)]
        min: f64,
        /// Direction basis (overrides the config, with that basis's preset).
        #[arg(long = "basis", value_parser = parse_basis)]
        basis: Option<DirectionBasis>,
    },

    /// Derive card, popover, border, and input surfaces for a background.
    Surfaces {
        #[arg(value_parser = parse_color)]
        background: Color,
        /// Derive for a dark theme (surfaces lighten instead of darken).
        #[arg(long = "dark")]
        dark: bool,
    },

    /// Generate a light/dark theme pair and print it as CSS variables.
    Theme {
        /// Base color. Random when omitted.
        #[arg(short = 'b', long = "base", value_parser = parse_color, conflicts_with = "default")]
        base: Option<Color>,
        #[arg(short = 'k', long = "kind", default_value = "analogous", value_parser = parse_kind)]
        kind: HarmonyKind,
        /// Seed for the random base color.
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
        /// Corner radius, emitted verbatim.
        #[arg(short = 'r', long = "radius", default_value = "0.5rem")]
        radius: String,
        /// Print the built-in zinc theme instead of generating one.
        #[arg(long = "default")]
        default: bool,
    },

    /// Print the effective engine configuration as TOML.
    Config,
}

/// Gate user input with the hex pattern; the engine's decoder is lenient
/// and would turn anything malformed into black.
fn parse_color(s: &str) -> Result<Color, String> {
    if HEX_COLOR.is_match(s) {
        Ok(Color::from_hex_lossy(s))
    } else {
        Err(format!("`{s}` is not a hex color (#rgb or #rrggbb)"))
    }
}

fn parse_kind(s: &str) -> Result<HarmonyKind, String> {
    HarmonyKind::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = HarmonyKind::all().iter().map(|k| k.name()).collect();
        format!("unknown harmony `{s}` (expected one of: {})", names.join(", "))
    })
}

fn parse_basis(s: &str) -> Result<DirectionBasis, String> {
    match s {
        "luminance" => Ok(DirectionBasis::Luminance),
        "lightness" => Ok(DirectionBasis::Lightness),
        _ => Err(format!("unknown basis `{s}` (expected luminance or lightness)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_parses_kind_and_len() {
        let args =
            Args::parse_from(["shade", "palette", "#3b82f6", "--kind", "triadic", "-n", "7"]);
        match args.command {
            Command::Palette { base, kind, len } => {
                assert_eq!(base, Color::rgb(0x3b, 0x82, 0xf6));
                assert_eq!(kind, HarmonyKind::Triadic);
                assert_eq!(len, Some(7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn short_hex_without_hash() {
        let args = Args::parse_from(["shade", "convert", "f00"]);
        let red = Color::rgb(255, 0, 0);
        assert!(matches!(args.command, Command::Convert { color } if color == red));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Args::try_parse_from(["shade", "convert", "#12345"]).is_err());
        assert!(Args::try_parse_from(["shade", "convert", "#gggggg"]).is_err());
    }

    #[test]
    fn hex_pattern_gates_lenient_decoder() {
        assert_eq!(parse_color("#ABCDEF"), Ok(Color::rgb(0xab, 0xcd, 0xef)));
        assert_eq!(parse_color("abc"), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
        for bad in ["", "#", "##abc", "#abcd", "#abcdeg", " #abc", "#abc "] {
            assert!(parse_color(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["shade", "palette", "#000", "--kind", "neon"]).is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let args = Args::parse_from(["shade", "config", "-c", "shade.toml", "-vv"]);
        assert_eq!(args.config, Some(PathBuf::from("shade.toml")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn theme_defaults() {
        let args = Args::parse_from(["shade", "theme"]);
        match args.command {
            Command::Theme { base, kind, seed, radius, default } => {
                assert!(base.is_none());
                assert_eq!(kind, HarmonyKind::Analogous);
                assert!(seed.is_none());
                assert_eq!(radius, "0.5rem");
                assert!(!default);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn default_conflicts_with_base() {
        assert!(Args::try_parse_from(["shade", "theme", "--default", "--base", "#fff"]).is_err());
    }

    #[test]
    fn repair_basis() {
        let args = Args::parse_from(["shade", "repair", "#fff", "#eee", "--basis", "lightness"]);
        assert!(matches!(
            args.command,
            Command::Repair { basis: Some(DirectionBasis::Lightness), .. }
        ));
    }
}
