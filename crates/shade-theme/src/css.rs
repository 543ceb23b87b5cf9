//! CSS custom-property output.
//!
//! Colors are written as bare HSL triples (`240 10% 4%`) so stylesheets can
//! wrap them as `hsl(var(--primary))`. The light theme goes under `:root`
//! together with `--radius`; the dark theme goes under `.dark`.

use std::fmt::Write as _;

use shade_color::Color;

use crate::theme::{Theme, ThemeKey, ThemePair};

/// Name of the block that [`apply_theme`] installs for the dark theme.
pub const DARK_BLOCK_ID: &str = "dark-theme-vars";

/// `h s% l%` with every component rounded to an integer.
#[must_use]
pub fn hsl_triple(color: Color) -> String {
    let hsl = color.to_hsl();
    format!("{} {}% {}%", hsl.h.round(), hsl.s.round(), hsl.l.round())
}

/// `cardForeground` -> `card-foreground`.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn write_vars(out: &mut String, theme: &Theme, indent: &str) {
    for (key, color) in theme.colors() {
        // Writing to a String can't fail.
        let _ = writeln!(out, "{indent}--{}: {};", key.css_var(), hsl_triple(color));
    }
}

/// Serialize a theme pair as a stylesheet fragment.
///
/// ```text
/// :root {
///   --background: 0 0% 100%;
///   ...
///   --radius: 0.5rem;
/// }
///
/// .dark {
///   --background: 240 10% 4%;
///   ...
/// }
/// ```
///
/// There is no trailing newline after the closing brace.
#[must_use]
pub fn to_css(pair: &ThemePair) -> String {
    let mut out = String::from(":root {\n");
    write_vars(&mut out, &pair.light, "  ");
    let _ = writeln!(out, "  --radius: {};", pair.light.radius);
    out.push_str("}\n\n.dark {\n");
    write_vars(&mut out, &pair.dark, "  ");
    out.push('}');
    out
}

/// The dark theme as a standalone `.dark { ... }` rule, one unindented
/// declaration per line.
#[must_use]
pub fn dark_block(theme: &Theme) -> String {
    let mut out = String::from(".dark {\n");
    write_vars(&mut out, theme, "");
    out.push('}');
    out
}

// ---------------------------------------------------------------------------
// StyleSink
// ---------------------------------------------------------------------------

/// Destination for live style updates, such as a document root.
pub trait StyleSink {
    /// Set one custom property (`name` includes the leading `--`).
    fn set_property(&mut self, name: &str, value: &str);

    /// Replace the contents of the style block identified by `id`,
    /// creating it if needed.
    fn set_block(&mut self, id: &str, css: &str);
}

/// Push a theme pair into `sink`: light colors and radius as root
/// properties, dark colors as the [`DARK_BLOCK_ID`] block.
pub fn apply_theme<S: StyleSink + ?Sized>(sink: &mut S, pair: &ThemePair) {
    for (key, color) in pair.light.colors() {
        sink.set_property(&format!("--{}", key.css_var()), &hsl_triple(color));
    }
    sink.set_property("--radius", &pair.light.radius);
    sink.set_block(DARK_BLOCK_ID, &dark_block(&pair.dark));
    tracing::debug!(properties = ThemeKey::ALL.len() + 1, "applied theme");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        props: Vec<(String, String)>,
        blocks: Vec<(String, String)>,
    }

    impl StyleSink for Recorder {
        fn set_property(&mut self, name: &str, value: &str) {
            self.props.push((name.to_string(), value.to_string()));
        }

        fn set_block(&mut self, id: &str, css: &str) {
            self.blocks.retain(|(existing, _)| existing != id);
            self.blocks.push((id.to_string(), css.to_string()));
        }
    }

    #[test]
    fn triples() {
        assert_eq!(hsl_triple(Color::WHITE), "0 0% 100%");
        assert_eq!(hsl_triple(Color::BLACK), "0 0% 0%");
        assert_eq!(hsl_triple(Color::from_hex_lossy("#09090b")), "240 10% 4%");
        assert_eq!(hsl_triple(Color::from_hex_lossy("#ef4444")), "0 84% 60%");
    }

    #[test]
    fn kebab() {
        assert_eq!(kebab_case("background"), "background");
        assert_eq!(kebab_case("popoverForeground"), "popover-foreground");
    }

    #[test]
    fn css_layout() {
        let pair = ThemePair::default();
        let css = to_css(&pair);
        assert!(css.starts_with(":root {\n  --background: 0 0% 100%;\n"));
        assert!(css.contains("  --radius: 0.5rem;\n}\n\n.dark {\n"));
        assert!(css.ends_with(";\n}"));
        // 19 + radius in :root, 19 in .dark
        assert_eq!(css.matches("--").count(), 39);
        assert_eq!(css.matches("--radius").count(), 1);
    }

    #[test]
    fn css_key_order() {
        let css = to_css(&ThemePair::default());
        let root = css.split(".dark").next().unwrap_or_default();
        let mut last = 0;
        for key in ThemeKey::ALL {
            let needle = format!("--{}:", key.css_var());
            let at = root.find(&needle).unwrap_or_else(|| panic!("missing {needle}"));
            assert!(at >= last, "{needle} out of order");
            last = at;
        }
    }

    #[test]
    fn apply_sets_root_and_block() {
        let pair = ThemePair::default();
        let mut sink = Recorder::default();
        apply_theme(&mut sink, &pair);

        assert_eq!(sink.props.len(), 20);
        assert_eq!(sink.props[0], ("--background".to_string(), "0 0% 100%".to_string()));
        assert_eq!(sink.props[19], ("--radius".to_string(), "0.5rem".to_string()));

        assert_eq!(sink.blocks.len(), 1);
        let (id, css) = &sink.blocks[0];
        assert_eq!(id, DARK_BLOCK_ID);
        assert!(css.starts_with(".dark {\n--background: 240 10% 4%;\n"));
        assert!(css.ends_with(";\n}"));
    }

    #[test]
    fn apply_twice_replaces_block() {
        let mut sink = Recorder::default();
        apply_theme(&mut sink, &ThemePair::default());
        let other = ThemePair::default().with_radius("0rem");
        apply_theme(&mut sink, &other);
        assert_eq!(sink.blocks.len(), 1);
        assert_eq!(sink.props.last().map(|(_, v)| v.as_str()), Some("0rem"));
    }
}
