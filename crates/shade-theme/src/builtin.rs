//! Built-in zinc themes, the starting point before anything is generated.

use shade_color::Color;

use crate::theme::{DEFAULT_RADIUS, Theme, ThemePair};

const fn hex(v: u32) -> Color {
    Color::from_u24(v)
}

impl Theme {
    /// Neutral zinc light theme.
    #[must_use]
    pub fn default_light() -> Self {
        Self {
            background: hex(0xffffff),
            foreground: hex(0x09090b),
            card: hex(0xffffff),
            card_foreground: hex(0x09090b),
            popover: hex(0xffffff),
            popover_foreground: hex(0x09090b),
            primary: hex(0x18181b),
            primary_foreground: hex(0xfafafa),
            secondary: hex(0xf4f4f5),
            secondary_foreground: hex(0x18181b),
            muted: hex(0xf4f4f5),
            muted_foreground: hex(0x71717a),
            accent: hex(0xf4f4f5),
            accent_foreground: hex(0x18181b),
            destructive: hex(0xef4444),
            destructive_foreground: hex(0xfafafa),
            border: hex(0xe4e4e7),
            input: hex(0xe4e4e7),
            ring: hex(0xa1a1aa),
            radius: DEFAULT_RADIUS.to_string(),
        }
    }

    /// Neutral zinc dark theme.
    #[must_use]
    pub fn default_dark() -> Self {
        Self {
            background: hex(0x09090b),
            foreground: hex(0xfafafa),
            card: hex(0x09090b),
            card_foreground: hex(0xfafafa),
            popover: hex(0x09090b),
            popover_foreground: hex(0xfafafa),
            primary: hex(0xfafafa),
            primary_foreground: hex(0x18181b),
            secondary: hex(0x27272a),
            secondary_foreground: hex(0xfafafa),
            muted: hex(0x27272a),
            muted_foreground: hex(0xa1a1aa),
            accent: hex(0x27272a),
            accent_foreground: hex(0xfafafa),
            // red-900 fill with red-500 text
            destructive: hex(0x7f1d1d),
            destructive_foreground: hex(0xef4444),
            border: hex(0x27272a),
            input: hex(0x27272a),
            ring: hex(0x71717a),
            radius: DEFAULT_RADIUS.to_string(),
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self { light: Theme::default_light(), dark: Theme::default_dark() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
