//! Render nodes: the toolkit-independent output of the pipeline.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::Serialize;

use crate::glyph::GlyphId;

/// Error parsing a caller-supplied option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOptionError {
    UnknownSizeHint(String),
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOptionError::UnknownSizeHint(value) => write!(
                f,
                "unknown size hint '{value}' (expected small, medium, large or xlarge)"
            ),
        }
    }
}

impl std::error::Error for ParseOptionError {}

/// Glyph scaling requested by the call site. Never parsed from card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum SizeHint {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl SizeHint {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeHint::Small => "small",
            SizeHint::Medium => "medium",
            SizeHint::Large => "large",
            SizeHint::XLarge => "xlarge",
        }
    }
}

impl FromStr for SizeHint {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeHint::Small),
            "medium" => Ok(SizeHint::Medium),
            "large" => Ok(SizeHint::Large),
            "xlarge" => Ok(SizeHint::XLarge),
            _ => Err(ParseOptionError::UnknownSizeHint(s.to_string())),
        }
    }
}

/// The three header tiers a renderer distinguishes.
///
/// `##` maps to level 2 and `###` to level 3; every other marker length
/// (`#`, `####`..`######`) shares the generic level-4 tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLevel {
    Two,
    Three,
    Other,
}

impl HeaderLevel {
    pub fn from_hashes(hashes: u8) -> Self {
        match hashes {
            2 => HeaderLevel::Two,
            3 => HeaderLevel::Three,
            _ => HeaderLevel::Other,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            HeaderLevel::Two => 2,
            HeaderLevel::Three => 3,
            HeaderLevel::Other => 4,
        }
    }
}

#[cfg(feature = "serialization")]
impl Serialize for HeaderLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

/// One display unit. Sibling order always equals source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[cfg_attr(feature = "serialization", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RenderNode {
    Header {
        level: HeaderLevel,
        text: String,
        /// Raw marker including trailing whitespace, e.g. `"## "`.
        marker: String,
    },
    Symbol {
        glyph: GlyphId,
        /// Token text as written, braces included.
        original: String,
        size: SizeHint,
    },
    Bold {
        text: String,
    },
    Italic {
        text: String,
    },
    Text {
        text: String,
    },
    LineBreak,
    /// Bracketed token that matched no symbol; displayed verbatim.
    UnresolvedSymbol {
        original: String,
    },
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        RenderNode::Bold { text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        RenderNode::Italic { text: text.into() }
    }

    pub fn glyph(&self) -> Option<GlyphId> {
        match self {
            RenderNode::Symbol { glyph, .. } => Some(*glyph),
            _ => None,
        }
    }

    /// The literal source text this node was built from.
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            RenderNode::Header { text, marker, .. } => Cow::Owned(format!("{marker}{text}")),
            RenderNode::Symbol { original, .. } | RenderNode::UnresolvedSymbol { original } => {
                Cow::Borrowed(original)
            }
            RenderNode::Bold { text } => Cow::Owned(format!("**{text}**")),
            RenderNode::Italic { text } => Cow::Owned(format!("*{text}*")),
            RenderNode::Text { text } => Cow::Borrowed(text),
            RenderNode::LineBreak => Cow::Borrowed("\n"),
        }
    }

    /// Display text with markup removed. Symbols keep their bracket text.
    pub fn display_text(&self) -> &str {
        match self {
            RenderNode::Header { text, .. }
            | RenderNode::Bold { text }
            | RenderNode::Italic { text }
            | RenderNode::Text { text } => text,
            RenderNode::Symbol { original, .. } | RenderNode::UnresolvedSymbol { original } => {
                original
            }
            RenderNode::LineBreak => "\n",
        }
    }
}

/// Concatenates each node's source text in order.
pub fn reconstruct(nodes: &[RenderNode]) -> String {
    nodes.iter().map(RenderNode::source_text).collect()
}

/// Flattens nodes to display text for consumers without rich rendering.
pub fn plain_text(nodes: &[RenderNode]) -> String {
    nodes.iter().map(RenderNode::display_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_hint_parses_case_insensitively() {
        assert_eq!("XLarge".parse::<SizeHint>(), Ok(SizeHint::XLarge));
        assert_eq!(" small ".parse::<SizeHint>(), Ok(SizeHint::Small));
        assert_eq!(
            "huge".parse::<SizeHint>(),
            Err(ParseOptionError::UnknownSizeHint("huge".to_string()))
        );
        assert_eq!(SizeHint::default(), SizeHint::Medium);
    }

    #[test]
    fn header_levels_collapse_to_three_tiers() {
        assert_eq!(HeaderLevel::from_hashes(2).level(), 2);
        assert_eq!(HeaderLevel::from_hashes(3).level(), 3);
        for hashes in [1, 4, 5, 6] {
            assert_eq!(HeaderLevel::from_hashes(hashes), HeaderLevel::Other);
        }
    }

    #[test]
    fn source_text_restores_markup() {
        let nodes = vec![
            RenderNode::Header {
                level: HeaderLevel::Two,
                text: "Title".to_string(),
                marker: "## ".to_string(),
            },
            RenderNode::LineBreak,
            RenderNode::bold("Flying"),
            RenderNode::text(", "),
            RenderNode::italic("haste"),
            RenderNode::UnresolvedSymbol {
                original: "{FOO}".to_string(),
            },
        ];
        assert_eq!(reconstruct(&nodes), "## Title\n**Flying**, *haste*{FOO}");
        assert_eq!(plain_text(&nodes), "Title\nFlying, haste{FOO}");
    }
}
