//! Canonical, renderer-agnostic identifiers for resolved symbols.
//!
//! A [`GlyphId`] is what the presentation layer keys its icon font or vector
//! assets on. Its string form (see [`GlyphId::as_string`]) is stable: a
//! renderer may persist it or use it as a CSS class suffix.

use std::fmt;

use crate::color::{Color, ColorSet};

/// Variable costs `{X}`, `{Y}` and `{Z}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableCost {
    X,
    Y,
    Z,
}

impl VariableCost {
    pub const ALL: [VariableCost; 3] = [VariableCost::X, VariableCost::Y, VariableCost::Z];

    pub const fn letter(self) -> char {
        match self {
            VariableCost::X => 'X',
            VariableCost::Y => 'Y',
            VariableCost::Z => 'Z',
        }
    }
}

/// Planeswalker loyalty cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoyaltyChange {
    Up(u8),
    Down(u8),
    /// `{-X}`
    DownX,
    Zero,
}

/// Broad category of a symbol table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum SymbolKind {
    Basic,
    Generic,
    Variable,
    Hybrid,
    TwoBrid,
    Phyrexian,
    HybridPhyrexian,
    Special,
    Planeswalker,
    Loyalty,
}

/// Canonical identifier of a recognized symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphId {
    Colored(Color),
    Colorless,
    Generic(u8),
    Variable(VariableCost),
    Hybrid(Color, Color),
    /// `{2/W}`: two generic or one colored.
    TwoBrid(Color),
    Phyrexian(Color),
    HybridPhyrexian(Color, Color),
    Tap,
    Untap,
    Energy,
    Snow,
    Chaos,
    Acorn,
    Planeswalker,
    Loyalty(LoyaltyChange),
}

impl GlyphId {
    pub fn kind(self) -> SymbolKind {
        match self {
            GlyphId::Colored(_) | GlyphId::Colorless => SymbolKind::Basic,
            GlyphId::Generic(_) => SymbolKind::Generic,
            GlyphId::Variable(_) => SymbolKind::Variable,
            GlyphId::Hybrid(..) => SymbolKind::Hybrid,
            GlyphId::TwoBrid(_) => SymbolKind::TwoBrid,
            GlyphId::Phyrexian(_) => SymbolKind::Phyrexian,
            GlyphId::HybridPhyrexian(..) => SymbolKind::HybridPhyrexian,
            GlyphId::Tap
            | GlyphId::Untap
            | GlyphId::Energy
            | GlyphId::Snow
            | GlyphId::Chaos
            | GlyphId::Acorn => SymbolKind::Special,
            GlyphId::Planeswalker => SymbolKind::Planeswalker,
            GlyphId::Loyalty(_) => SymbolKind::Loyalty,
        }
    }

    /// Returns the mana value this glyph contributes to a cost.
    ///
    /// Hybrid and Phyrexian pips count 1, twobrid counts 2 (the larger of its
    /// alternatives), variable costs count 0. Non-mana glyphs count 0.
    pub fn mana_value(self) -> u32 {
        match self {
            GlyphId::Colored(_)
            | GlyphId::Colorless
            | GlyphId::Snow
            | GlyphId::Hybrid(..)
            | GlyphId::Phyrexian(_)
            | GlyphId::HybridPhyrexian(..) => 1,
            GlyphId::Generic(n) => n as u32,
            GlyphId::TwoBrid(_) => 2,
            _ => 0,
        }
    }

    /// Colors this glyph contributes to a cost's colors.
    pub fn colors(self) -> ColorSet {
        match self {
            GlyphId::Colored(color) | GlyphId::TwoBrid(color) | GlyphId::Phyrexian(color) => {
                color.into()
            }
            GlyphId::Hybrid(a, b) | GlyphId::HybridPhyrexian(a, b) => {
                ColorSet::from_color(a).with(b)
            }
            _ => ColorSet::COLORLESS,
        }
    }

    /// Stable string form, e.g. `"hybrid-white-blue"` or `"loyalty-down-3"`.
    pub fn as_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GlyphId::Colored(color) => f.write_str(color.name()),
            GlyphId::Colorless => f.write_str("colorless"),
            GlyphId::Generic(n) => write!(f, "generic-{n}"),
            GlyphId::Variable(var) => {
                write!(f, "variable-{}", var.letter().to_ascii_lowercase())
            }
            GlyphId::Hybrid(a, b) => write!(f, "hybrid-{}-{}", a.name(), b.name()),
            GlyphId::TwoBrid(color) => write!(f, "twobrid-{}", color.name()),
            GlyphId::Phyrexian(color) => write!(f, "phyrexian-{}", color.name()),
            GlyphId::HybridPhyrexian(a, b) => {
                write!(f, "hybrid-phyrexian-{}-{}", a.name(), b.name())
            }
            GlyphId::Tap => f.write_str("tap"),
            GlyphId::Untap => f.write_str("untap"),
            GlyphId::Energy => f.write_str("energy"),
            GlyphId::Snow => f.write_str("snow"),
            GlyphId::Chaos => f.write_str("chaos"),
            GlyphId::Acorn => f.write_str("acorn"),
            GlyphId::Planeswalker => f.write_str("planeswalker"),
            GlyphId::Loyalty(LoyaltyChange::Up(n)) => write!(f, "loyalty-up-{n}"),
            GlyphId::Loyalty(LoyaltyChange::Down(n)) => write!(f, "loyalty-down-{n}"),
            GlyphId::Loyalty(LoyaltyChange::DownX) => f.write_str("loyalty-down-x"),
            GlyphId::Loyalty(LoyaltyChange::Zero) => f.write_str("loyalty-zero"),
        }
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for GlyphId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_strings_are_kebab_case() {
        assert_eq!(GlyphId::Colored(Color::White).as_string(), "white");
        assert_eq!(GlyphId::Generic(12).as_string(), "generic-12");
        assert_eq!(
            GlyphId::Hybrid(Color::White, Color::Blue).as_string(),
            "hybrid-white-blue"
        );
        assert_eq!(GlyphId::Phyrexian(Color::Black).as_string(), "phyrexian-black");
        assert_eq!(
            GlyphId::HybridPhyrexian(Color::Green, Color::White).as_string(),
            "hybrid-phyrexian-green-white"
        );
        assert_eq!(GlyphId::Variable(VariableCost::X).as_string(), "variable-x");
        assert_eq!(
            GlyphId::Loyalty(LoyaltyChange::Down(3)).as_string(),
            "loyalty-down-3"
        );
        assert_eq!(GlyphId::Loyalty(LoyaltyChange::Zero).as_string(), "loyalty-zero");
    }

    #[test]
    fn mana_value_counts_pips() {
        assert_eq!(GlyphId::Generic(7).mana_value(), 7);
        assert_eq!(GlyphId::TwoBrid(Color::Red).mana_value(), 2);
        assert_eq!(GlyphId::Hybrid(Color::Red, Color::Green).mana_value(), 1);
        assert_eq!(GlyphId::Variable(VariableCost::X).mana_value(), 0);
        assert_eq!(GlyphId::Tap.mana_value(), 0);
    }

    #[test]
    fn hybrid_colors_include_both_halves() {
        let colors = GlyphId::HybridPhyrexian(Color::Blue, Color::Black).colors();
        assert_eq!(colors.letters(), "UB");
        assert!(GlyphId::Colorless.colors().is_empty());
    }
}
