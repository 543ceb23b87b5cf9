// SPDX-License-Identifier: MIT
//
// shade: a color-theory engine for UI themes.
//
// This is the binary that wires the two crates to a command line:
//
//   shade-color → hex / RGB / HSL conversion and adjustment
//   shade-theme → palettes, contrast repair, surfaces, theme assembly, CSS
//
// Every subcommand is a thin shell around one engine operation. Results go
// to stdout; logs and errors go to stderr.

mod cli;

use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shade_color::Color;
use shade_theme::contrast::{meets_wcag_aa, meets_wcag_aaa};
use shade_theme::{
    ConfigError, DirectionBasis, EngineConfig, RepairOptions, ThemePair, contrast_ratio,
    derive_surfaces_with, generate_palette_with_len, repair_contrast, to_css,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

// ─── Logging ────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `SHADE_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("SHADE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn describe(color: Color) -> String {
    let hsl = color.to_hsl();
    format!(
        "{color}  rgb({}, {}, {})  hsl({:.0}, {:.0}%, {:.0}%)",
        color.r, color.g, color.b, hsl.h, hsl.s, hsl.l
    )
}

fn run(args: Args) -> Result<(), ConfigError> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!(command = ?args.command, "dispatching");

    match args.command {
        Command::Convert { color } => println!("{}", describe(color)),

        Command::Palette { base, kind, len } => {
            let len = len.unwrap_or(config.palette_len);
            if len == 0 {
                return Err(ConfigError::Invalid("palette length must be at least 1".into()));
            }
            for color in generate_palette_with_len(base, kind, len) {
                println!("{}", describe(color));
            }
        }

        Command::Contrast { a, b } => {
            let ratio = contrast_ratio(a, b);
            let grade = if meets_wcag_aaa(a, b) {
                "AAA"
            } else if meets_wcag_aa(a, b) {
                "AA"
            } else {
                "fail"
            };
            println!("{ratio:.2}:1  {grade}");
        }

        Command::Repair { fixed, adjustable, min, basis } => {
            let options = match basis {
                Some(DirectionBasis::Luminance) => RepairOptions::LUMINANCE,
                Some(DirectionBasis::Lightness) => RepairOptions::LIGHTNESS,
                None => config.repair,
            };
            let repair = repair_contrast(fixed, adjustable, min, &options);
            println!(
                "{}  {:.2}:1  steps={} {:?}{}",
                repair.color,
                repair.ratio,
                repair.steps,
                repair.direction,
                if repair.satisfied { "" } else { "  (target not reached)" }
            );
        }

        Command::Surfaces { background, dark } => {
            let set = derive_surfaces_with(background, dark, &config.surfaces);
            for (name, color) in [
                ("background", set.background),
                ("card", set.card),
                ("popover", set.popover),
                ("border", set.border),
                ("input", set.input),
            ] {
                println!("{name:<10} {}", describe(color));
            }
        }

        Command::Theme { base, kind, seed, radius, default } => {
            let pair = if default {
                ThemePair::default().with_radius(&radius)
            } else if let Some(base) = base {
                ThemePair::generate(base, kind, &radius, &config)
            } else if let Some(seed) = seed {
                ThemePair::random(kind, &mut StdRng::seed_from_u64(seed), &radius, &config)
            } else {
                ThemePair::random(kind, &mut rand::thread_rng(), &radius, &config)
            };
            println!("{}", to_css(&pair));
        }

        Command::Config => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
