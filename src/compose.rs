//! Maps tokenizer output to render nodes, one node per token.

use crate::node::{HeaderLevel, RenderNode, SizeHint};
use crate::symbols;
use crate::tokenizer::{RawToken, TokenKind, tokenize_line};

/// Composes a sequence of lines, emitting a `LineBreak` before every line
/// except the first.
pub fn compose_lines<I, S>(lines: I, size: SizeHint) -> Vec<RenderNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut nodes = Vec::new();
    for (line_index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line_index > 0 {
            nodes.push(RenderNode::LineBreak);
        }
        nodes.extend(
            tokenize_line(line, line_index)
                .into_iter()
                .map(|token| token_to_node(line, token, size)),
        );
    }
    nodes
}

/// Composes multi-line text, splitting on `\n`.
pub fn compose_text(text: &str, size: SizeHint) -> Vec<RenderNode> {
    compose_lines(text.split('\n'), size)
}

fn token_to_node(line: &str, token: RawToken, size: SizeHint) -> RenderNode {
    match token.kind {
        TokenKind::Header { hashes } => {
            let source = token.source(line);
            let marker = &source[..source.len() - token.text.len()];
            RenderNode::Header {
                level: HeaderLevel::from_hashes(hashes),
                marker: marker.to_string(),
                text: token.text,
            }
        }
        TokenKind::Symbol => symbol_node(token.text, size),
        TokenKind::Bold => RenderNode::Bold { text: token.text },
        TokenKind::Italic => RenderNode::Italic { text: token.text },
        TokenKind::Plain => RenderNode::Text { text: token.text },
    }
}

/// Resolves a bracketed token, falling back to `UnresolvedSymbol` on a miss.
pub(crate) fn symbol_node(original: String, size: SizeHint) -> RenderNode {
    match symbols::resolve(&original) {
        Some(glyph) => RenderNode::Symbol {
            glyph,
            original,
            size,
        },
        None => {
            tracing::debug!(token = %original, "unresolved symbol");
            RenderNode::UnresolvedSymbol { original }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::glyph::GlyphId;
    use crate::node::reconstruct;

    #[test]
    fn unknown_symbol_is_kept_verbatim() {
        assert_eq!(
            compose_text("{FOO}", SizeHint::Medium),
            vec![RenderNode::UnresolvedSymbol {
                original: "{FOO}".to_string()
            }]
        );
    }

    #[test]
    fn symbol_carries_original_text_and_size() {
        assert_eq!(
            compose_text("{w}", SizeHint::Large),
            vec![RenderNode::Symbol {
                glyph: GlyphId::Colored(Color::White),
                original: "{w}".to_string(),
                size: SizeHint::Large,
            }]
        );
    }

    #[test]
    fn line_breaks_between_lines_only() {
        let nodes = compose_lines(["Flying", "", "Vigilance"], SizeHint::Medium);
        assert_eq!(
            nodes,
            vec![
                RenderNode::text("Flying"),
                RenderNode::LineBreak,
                RenderNode::LineBreak,
                RenderNode::text("Vigilance"),
            ]
        );
    }

    #[test]
    fn header_levels_follow_marker_length() {
        let level_of = |line: &str| match &compose_text(line, SizeHint::Medium)[0] {
            RenderNode::Header { level, text, .. } => (level.level(), text.clone()),
            other => panic!("expected header, got {other:?}"),
        };
        assert_eq!(level_of("## Title"), (2, "Title".to_string()));
        assert_eq!(level_of("### Title"), (3, "Title".to_string()));
        assert_eq!(level_of("# Title"), (4, "Title".to_string()));
        assert_eq!(level_of("##### Title"), (4, "Title".to_string()));
    }

    #[test]
    fn emphasis_extraction_keeps_order() {
        assert_eq!(
            compose_text("**bold** and *italic*", SizeHint::Medium),
            vec![
                RenderNode::bold("bold"),
                RenderNode::text(" and "),
                RenderNode::italic("italic"),
            ]
        );
    }

    #[test]
    fn repeated_symbol_resolves_identically() {
        let nodes = compose_text("{U}, then {u} again: {U}", SizeHint::Medium);
        let glyphs: Vec<_> = nodes.iter().filter_map(RenderNode::glyph).collect();
        assert_eq!(glyphs, vec![GlyphId::Colored(Color::Blue); 3]);
    }

    #[test]
    fn composed_text_reconstructs_source() {
        let text = "### Ability\n{T}, Pay {1}: **Draw** a card.\r\n*Reminder* {BAD}";
        assert_eq!(reconstruct(&compose_text(text, SizeHint::Small)), text);
    }

    #[test]
    fn empty_text_composes_to_nothing() {
        assert!(compose_text("", SizeHint::Medium).is_empty());
    }
}
