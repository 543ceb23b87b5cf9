//! Theme model: nineteen semantic color slots plus a corner radius.
//!
//! The slot set and its order are fixed; they are also the order the CSS
//! serializer emits. A [`ThemePair`] holds the light and dark appearance,
//! each independently owned.

use shade_color::Color;

/// Default corner radius.
pub const DEFAULT_RADIUS: &str = "0.5rem";

// ---------------------------------------------------------------------------
// ThemeKey
// ---------------------------------------------------------------------------

/// One semantic color slot of a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeKey {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl ThemeKey {
    /// Every key, in serialization order.
    pub const ALL: [Self; 19] = [
        Self::Background, Self::Foreground,
        Self::Card, Self::CardForeground,
        Self::Popover, Self::PopoverForeground,
        Self::Primary, Self::PrimaryForeground,
        Self::Secondary, Self::SecondaryForeground,
        Self::Muted, Self::MutedForeground,
        Self::Accent, Self::AccentForeground,
        Self::Destructive, Self::DestructiveForeground,
        Self::Border, Self::Input, Self::Ring,
    ];

    /// camelCase identifier (`cardForeground`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "cardForeground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popoverForeground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primaryForeground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondaryForeground",
            Self::Muted => "muted",
            Self::MutedForeground => "mutedForeground",
            Self::Accent => "accent",
            Self::AccentForeground => "accentForeground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructiveForeground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    /// CSS custom property name without the leading `--` (`card-foreground`).
    #[must_use]
    pub fn css_var(self) -> String {
        crate::css::kebab_case(self.name())
    }

    /// Look a key up by its camelCase or hyphen-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|k| k.name() == name || k.css_var() == name)
            .copied()
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A complete set of semantic colors for one appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub popover: Color,
    pub popover_foreground: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
    /// CSS length, emitted verbatim (`0.5rem`).
    pub radius: String,
}

impl Theme {
    /// Color stored in `key`.
    #[must_use]
    pub const fn get(&self, key: ThemeKey) -> Color {
        match key {
            ThemeKey::Background => self.background,
            ThemeKey::Foreground => self.foreground,
            ThemeKey::Card => self.card,
            ThemeKey::CardForeground => self.card_foreground,
            ThemeKey::Popover => self.popover,
            ThemeKey::PopoverForeground => self.popover_foreground,
            ThemeKey::Primary => self.primary,
            ThemeKey::PrimaryForeground => self.primary_foreground,
            ThemeKey::Secondary => self.secondary,
            ThemeKey::SecondaryForeground => self.secondary_foreground,
            ThemeKey::Muted => self.muted,
            ThemeKey::MutedForeground => self.muted_foreground,
            ThemeKey::Accent => self.accent,
            ThemeKey::AccentForeground => self.accent_foreground,
            ThemeKey::Destructive => self.destructive,
            ThemeKey::DestructiveForeground => self.destructive_foreground,
            ThemeKey::Border => self.border,
            ThemeKey::Input => self.input,
            ThemeKey::Ring => self.ring,
        }
    }

    /// Mutable access to the slot for `key`.
    pub const fn slot_mut(&mut self, key: ThemeKey) -> &mut Color {
        match key {
            ThemeKey::Background => &mut self.background,
            ThemeKey::Foreground => &mut self.foreground,
            ThemeKey::Card => &mut self.card,
            ThemeKey::CardForeground => &mut self.card_foreground,
            ThemeKey::Popover => &mut self.popover,
            ThemeKey::PopoverForeground => &mut self.popover_foreground,
            ThemeKey::Primary => &mut self.primary,
            ThemeKey::PrimaryForeground => &mut self.primary_foreground,
            ThemeKey::Secondary => &mut self.secondary,
            ThemeKey::SecondaryForeground => &mut self.secondary_foreground,
            ThemeKey::Muted => &mut self.muted,
            ThemeKey::MutedForeground => &mut self.muted_foreground,
            ThemeKey::Accent => &mut self.accent,
            ThemeKey::AccentForeground => &mut self.accent_foreground,
            ThemeKey::Destructive => &mut self.destructive,
            ThemeKey::DestructiveForeground => &mut self.destructive_foreground,
            ThemeKey::Border => &mut self.border,
            ThemeKey::Input => &mut self.input,
            ThemeKey::Ring => &mut self.ring,
        }
    }

    /// Store `color` in `key`.
    pub const fn set(&mut self, key: ThemeKey, color: Color) {
        *self.slot_mut(key) = color;
    }

    /// Replace the color in `key`, returning the updated theme.
    #[must_use]
    pub fn with(mut self, key: ThemeKey, color: Color) -> Self {
        self.set(key, color);
        self
    }

    /// Replace the radius, returning the updated theme.
    #[must_use]
    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Every `(key, color)` pair in serialization order.
    pub fn colors(&self) -> impl Iterator<Item = (ThemeKey, Color)> + '_ {
        ThemeKey::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

// ---------------------------------------------------------------------------
// ThemePair
// ---------------------------------------------------------------------------

/// The light and dark appearance of one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    /// Set the radius on both appearances.
    #[must_use]
    pub fn with_radius(self, radius: &str) -> Self {
        Self {
            light: self.light.with_radius(radius),
            dark: self.dark.with_radius(radius),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
