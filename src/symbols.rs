//! Static table of every recognized bracketed symbol.
//!
//! Keys are the uppercased token text including braces (`{W/U/P}`). The table
//! is built once on first use and never mutated afterwards, so it can be read
//! from any number of threads.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::Color;
use crate::glyph::{GlyphId, LoyaltyChange, VariableCost};

/// Highest generic numeral with a dedicated glyph.
pub const MAX_GENERIC: u8 = 20;

/// Highest loyalty magnitude with a dedicated glyph.
pub const MAX_LOYALTY: u8 = 8;

const HYBRID_PAIRS: [(Color, Color); 10] = [
    (Color::White, Color::Blue),
    (Color::Blue, Color::Black),
    (Color::Black, Color::Red),
    (Color::Red, Color::Green),
    (Color::Green, Color::White),
    (Color::White, Color::Black),
    (Color::Blue, Color::Red),
    (Color::Black, Color::Green),
    (Color::Red, Color::White),
    (Color::Green, Color::Blue),
];

const HYBRID_PHYREXIAN_PAIRS: [(Color, Color); 5] = [
    (Color::White, Color::Blue),
    (Color::Blue, Color::Black),
    (Color::Black, Color::Red),
    (Color::Red, Color::Green),
    (Color::Green, Color::White),
];

const SPECIAL_SYMBOLS: [(&str, GlyphId); 8] = [
    ("{C}", GlyphId::Colorless),
    ("{T}", GlyphId::Tap),
    ("{Q}", GlyphId::Untap),
    ("{E}", GlyphId::Energy),
    ("{S}", GlyphId::Snow),
    ("{CHAOS}", GlyphId::Chaos),
    ("{A}", GlyphId::Acorn),
    ("{PW}", GlyphId::Planeswalker),
];

struct SymbolTable {
    entries: Vec<(String, GlyphId)>,
    index: HashMap<String, GlyphId>,
}

static TABLE: LazyLock<SymbolTable> = LazyLock::new(build_table);

fn build_table() -> SymbolTable {
    let mut entries: Vec<(String, GlyphId)> = Vec::new();

    for color in Color::ALL {
        entries.push((format!("{{{}}}", color.letter()), GlyphId::Colored(color)));
    }
    for n in 0..=MAX_GENERIC {
        entries.push((format!("{{{n}}}"), GlyphId::Generic(n)));
    }
    for var in VariableCost::ALL {
        entries.push((format!("{{{}}}", var.letter()), GlyphId::Variable(var)));
    }
    for (a, b) in HYBRID_PAIRS {
        entries.push((
            format!("{{{}/{}}}", a.letter(), b.letter()),
            GlyphId::Hybrid(a, b),
        ));
    }
    for color in Color::ALL {
        entries.push((format!("{{2/{}}}", color.letter()), GlyphId::TwoBrid(color)));
    }
    for color in Color::ALL {
        entries.push((format!("{{{}/P}}", color.letter()), GlyphId::Phyrexian(color)));
    }
    for (a, b) in HYBRID_PHYREXIAN_PAIRS {
        entries.push((
            format!("{{{}/{}/P}}", a.letter(), b.letter()),
            GlyphId::HybridPhyrexian(a, b),
        ));
    }
    for (token, glyph) in SPECIAL_SYMBOLS {
        entries.push((token.to_string(), glyph));
    }
    for n in 1..=MAX_LOYALTY {
        entries.push((format!("{{+{n}}}"), GlyphId::Loyalty(LoyaltyChange::Up(n))));
    }
    for n in 1..=MAX_LOYALTY {
        entries.push((format!("{{-{n}}}"), GlyphId::Loyalty(LoyaltyChange::Down(n))));
    }
    entries.push(("{-X}".to_string(), GlyphId::Loyalty(LoyaltyChange::DownX)));
    entries.push(("{+0}".to_string(), GlyphId::Loyalty(LoyaltyChange::Zero)));

    let index = entries.iter().cloned().collect();
    SymbolTable { entries, index }
}

/// Normalizes token text into a table key: uppercase, with the typographic
/// minus sign (U+2212) folded to ASCII `-`.
pub fn lookup_key(token: &str) -> String {
    token
        .chars()
        .map(|ch| if ch == '\u{2212}' { '-' } else { ch })
        .flat_map(char::to_uppercase)
        .collect()
}

/// Resolves a bracketed token such as `{w/u}` to its glyph.
///
/// `None` is not an error; callers fall back to the literal token text.
pub fn resolve(token: &str) -> Option<GlyphId> {
    TABLE.index.get(&lookup_key(token)).copied()
}

/// Every recognized token with its glyph, in table order.
pub fn known_tokens() -> impl Iterator<Item = (&'static str, GlyphId)> {
    TABLE
        .entries
        .iter()
        .map(|(token, glyph)| (token.as_str(), *glyph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::SymbolKind;
    use std::collections::HashSet;

    #[test]
    fn resolves_basic_and_generic_symbols() {
        assert_eq!(resolve("{W}"), Some(GlyphId::Colored(Color::White)));
        assert_eq!(resolve("{C}"), Some(GlyphId::Colorless));
        assert_eq!(resolve("{0}"), Some(GlyphId::Generic(0)));
        assert_eq!(resolve("{20}"), Some(GlyphId::Generic(20)));
        assert_eq!(resolve("{21}"), None);
        assert_eq!(resolve("{X}"), Some(GlyphId::Variable(VariableCost::X)));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve("{w/u}"), resolve("{W/U}"));
        assert_eq!(resolve("{w/u}"), Some(GlyphId::Hybrid(Color::White, Color::Blue)));
        assert_eq!(resolve("{chaos}"), Some(GlyphId::Chaos));
        assert_eq!(resolve("{b/p}"), Some(GlyphId::Phyrexian(Color::Black)));
        assert_eq!(resolve("{pw}"), Some(GlyphId::Planeswalker));
    }

    #[test]
    fn resolves_compound_symbols() {
        assert_eq!(
            resolve("{G/W/P}"),
            Some(GlyphId::HybridPhyrexian(Color::Green, Color::White))
        );
        assert_eq!(resolve("{2/U}"), Some(GlyphId::TwoBrid(Color::Blue)));
        assert_eq!(resolve("{R/W}"), Some(GlyphId::Hybrid(Color::Red, Color::White)));
        // Only the canonical ordering is a printed symbol.
        assert_eq!(resolve("{U/W}"), None);
    }

    #[test]
    fn resolves_loyalty_symbols() {
        assert_eq!(resolve("{+1}"), Some(GlyphId::Loyalty(LoyaltyChange::Up(1))));
        assert_eq!(resolve("{-8}"), Some(GlyphId::Loyalty(LoyaltyChange::Down(8))));
        assert_eq!(resolve("{-x}"), Some(GlyphId::Loyalty(LoyaltyChange::DownX)));
        assert_eq!(resolve("{+0}"), Some(GlyphId::Loyalty(LoyaltyChange::Zero)));
        assert_eq!(resolve("{\u{2212}3}"), Some(GlyphId::Loyalty(LoyaltyChange::Down(3))));
        assert_eq!(resolve("{+9}"), None);
    }

    #[test]
    fn unknown_tokens_miss() {
        assert_eq!(resolve("{FOO}"), None);
        assert_eq!(resolve("W"), None);
        assert_eq!(resolve("{}"), None);
        assert_eq!(resolve("{ W }"), None);
    }

    #[test]
    fn table_keys_and_glyph_strings_are_unique() {
        let tokens: Vec<_> = known_tokens().collect();
        assert_eq!(tokens.len(), 80);

        let keys: HashSet<_> = tokens.iter().map(|(token, _)| *token).collect();
        assert_eq!(keys.len(), tokens.len());

        let glyphs: HashSet<_> = tokens.iter().map(|(_, glyph)| glyph.as_string()).collect();
        assert_eq!(glyphs.len(), tokens.len());

        for (token, glyph) in tokens {
            assert_eq!(resolve(token), Some(glyph), "{token} should resolve to itself");
        }
    }

    #[test]
    fn every_kind_is_represented() {
        let kinds: HashSet<SymbolKind> = known_tokens().map(|(_, glyph)| glyph.kind()).collect();
        assert_eq!(kinds.len(), 10);
    }
}
