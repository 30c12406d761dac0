//! WASM-facing API for browser integration.
//!
//! JavaScript passes oracle text in and receives plain objects shaped like the
//! serialized [`RenderedCard`]. Glyph identifiers are strings so the page can
//! map them onto its icon font.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::glyph::{GlyphId, SymbolKind};
use crate::node::SizeHint;
use crate::render::{RenderOptions, RenderedCard, render_card};
use crate::symbols;

#[derive(Debug, Clone, Serialize)]
struct SymbolView {
    token: &'static str,
    glyph: GlyphId,
    kind: SymbolKind,
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

fn parse_size(size: Option<String>) -> Result<SizeHint, JsValue> {
    match size {
        Some(size) => size
            .parse()
            .map_err(|e| JsValue::from_str(&format!("invalid size: {e}"))),
        None => Ok(SizeHint::default()),
    }
}

fn rendered(text: &str, size: Option<String>) -> Result<RenderedCard, JsValue> {
    let options = RenderOptions::with_size(parse_size(size)?);
    Ok(render_card(text, &options))
}

/// Render oracle text into `{ nodes, mana_cost }`.
#[wasm_bindgen(js_name = renderOracleText)]
pub fn render_oracle_text(text: &str, size: Option<String>) -> Result<JsValue, JsValue> {
    let card = rendered(text, size)?;
    serde_wasm_bindgen::to_value(&card)
        .map_err(|e| JsValue::from_str(&format!("renderOracleText encode failed: {e}")))
}

/// Same as `renderOracleText`, as a JSON string.
#[wasm_bindgen(js_name = renderOracleTextJson)]
pub fn render_oracle_text_json(text: &str, size: Option<String>) -> Result<String, JsValue> {
    let card = rendered(text, size)?;
    serde_json::to_string(&card)
        .map_err(|e| JsValue::from_str(&format!("json encode failed: {e}")))
}

/// Glyph identifier for a bracketed token, or `undefined` if unknown.
#[wasm_bindgen(js_name = resolveSymbol)]
pub fn resolve_symbol(token: &str) -> Option<String> {
    symbols::resolve(token).map(GlyphId::as_string)
}

/// Every recognized token as `{ token, glyph, kind }`, in table order.
#[wasm_bindgen(js_name = knownSymbols)]
pub fn known_symbols() -> Result<JsValue, JsValue> {
    let views: Vec<SymbolView> = symbols::known_tokens()
        .map(|(token, glyph)| SymbolView {
            token,
            glyph,
            kind: glyph.kind(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&views)
        .map_err(|e| JsValue::from_str(&format!("knownSymbols encode failed: {e}")))
}

/// Distinct glyph identifiers, for preloading assets.
#[wasm_bindgen(js_name = glyphIds)]
pub fn glyph_ids() -> js_sys::Array {
    symbols::known_tokens()
        .map(|(_, glyph)| JsValue::from_str(&glyph.as_string()))
        .collect()
}
