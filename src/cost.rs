//! Cost-only parsing: the symbols on a "Mana Cost:" line.

use crate::color::ColorSet;
use crate::compose::symbol_node;
use crate::glyph::GlyphId;
use crate::node::{RenderNode, SizeHint};
use crate::symbols::lookup_key;
use crate::tokenizer::match_symbol;

/// Ordered symbols of a cost line. Empty is valid (zero-cost permanents).
///
/// Each entry is a `Symbol` node, or an `UnresolvedSymbol` when the bracket
/// contents are not in the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CostSequence {
    nodes: Vec<RenderNode>,
}

impl CostSequence {
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolved glyphs in order, skipping unresolved tokens.
    pub fn glyphs(&self) -> impl Iterator<Item = GlyphId> + '_ {
        self.nodes.iter().filter_map(RenderNode::glyph)
    }

    /// Returns the mana value of the cost (see [`GlyphId::mana_value`]).
    pub fn mana_value(&self) -> u32 {
        self.glyphs().map(GlyphId::mana_value).sum()
    }

    pub fn colors(&self) -> ColorSet {
        self.glyphs()
            .fold(ColorSet::COLORLESS, |set, glyph| set.union(glyph.colors()))
    }

    /// Format the cost in oracle-style syntax (e.g. "{2}{W}{W}").
    ///
    /// Resolved symbols are written in their canonical uppercase form,
    /// unresolved ones verbatim.
    pub fn to_oracle(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                RenderNode::Symbol { original, .. } => out.push_str(&lookup_key(original)),
                other => out.push_str(&other.source_text()),
            }
        }
        out
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for CostSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CostSequence", 4)?;
        state.serialize_field("symbols", &self.nodes)?;
        state.serialize_field("oracle", &self.to_oracle())?;
        state.serialize_field("mana_value", &self.mana_value())?;
        state.serialize_field("colors", &self.colors().letters())?;
        state.end()
    }
}

/// Extracts every brace-delimited token from `cost_text`, left to right.
///
/// Characters outside braces (whitespace, punctuation, stray text) are
/// ignored. Braces that do not close are skipped.
pub fn parse_cost_sequence(cost_text: &str, size: SizeHint) -> CostSequence {
    let mut nodes = Vec::new();
    let mut pos = 0usize;
    while let Some(offset) = cost_text[pos..].find('{') {
        let start = pos + offset;
        match match_symbol(&cost_text[start..]) {
            Some((_, token, len)) => {
                nodes.push(symbol_node(token.to_string(), size));
                pos = start + len;
            }
            None => pos = start + 1,
        }
    }
    CostSequence { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::glyph::VariableCost;

    fn glyphs(text: &str) -> Vec<GlyphId> {
        parse_cost_sequence(text, SizeHint::Medium).glyphs().collect()
    }

    #[test]
    fn extracts_symbols_in_order() {
        assert_eq!(
            glyphs(" {2}{W}{W}"),
            vec![
                GlyphId::Generic(2),
                GlyphId::Colored(Color::White),
                GlyphId::Colored(Color::White),
            ]
        );
    }

    #[test]
    fn ignores_characters_outside_braces() {
        assert_eq!(
            glyphs("X: {x} , {G/U}!! (hybrid)"),
            vec![
                GlyphId::Variable(VariableCost::X),
                GlyphId::Hybrid(Color::Green, Color::Blue),
            ]
        );
    }

    #[test]
    fn unclosed_brace_is_skipped() {
        assert_eq!(glyphs("{1}{B"), vec![GlyphId::Generic(1)]);
        assert_eq!(glyphs("{{R}"), vec![GlyphId::Colored(Color::Red)]);
    }

    #[test]
    fn unknown_token_stays_in_sequence() {
        let cost = parse_cost_sequence("{1}{H}", SizeHint::Small);
        assert_eq!(cost.len(), 2);
        assert_eq!(
            cost.nodes()[1],
            RenderNode::UnresolvedSymbol {
                original: "{H}".to_string()
            }
        );
        assert_eq!(cost.to_oracle(), "{1}{H}");
    }

    #[test]
    fn empty_cost_is_valid() {
        let cost = parse_cost_sequence("", SizeHint::Medium);
        assert!(cost.is_empty());
        assert_eq!(cost.mana_value(), 0);
        assert!(cost.colors().is_empty());
    }

    #[test]
    fn mana_value_and_colors() {
        let cost = parse_cost_sequence("{3}{w/u}{B/P}{2/r}{X}", SizeHint::Medium);
        assert_eq!(cost.mana_value(), 3 + 1 + 1 + 2);
        assert_eq!(cost.colors().letters(), "WUBR");
        assert_eq!(cost.to_oracle(), "{3}{W/U}{B/P}{2/R}{X}");
    }
}
