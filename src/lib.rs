//! Renders Magic: The Gathering oracle text into typed display nodes.
//!
//! The pipeline is `render` → (`split_mana_cost` → `parse_cost_sequence`) and
//! (`tokenize_line` → `compose_lines`, resolving each `{..}` token against the
//! static symbol table). Every input produces a node list; nothing here fails.

pub mod color;
pub mod compose;
pub mod cost;
pub mod glyph;
#[cfg(feature = "cli")]
pub mod logging;
pub mod node;
pub mod render;
pub mod symbols;
pub mod tokenizer;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm_api;

pub use color::{Color, ColorSet};
pub use compose::{compose_lines, compose_text};
pub use cost::{CostSequence, parse_cost_sequence};
pub use glyph::{GlyphId, LoyaltyChange, SymbolKind, VariableCost};
pub use node::{HeaderLevel, ParseOptionError, RenderNode, SizeHint, plain_text, reconstruct};
pub use render::{
    MANA_COST_LABEL, MANA_COST_MARKER, ManaCostSection, RenderOptions, RenderedCard, render,
    render_card, render_with_options, split_mana_cost,
};
pub use symbols::{known_tokens, resolve};
pub use tokenizer::{RawToken, TextSpan, TokenKind, tokenize_line};
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm_api::{known_symbols, render_oracle_text, resolve_symbol};
