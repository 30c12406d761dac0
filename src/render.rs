//! Entry point: splits off a "Mana Cost:" line and composes the rest.

use crate::compose::compose_text;
use crate::cost::{CostSequence, parse_cost_sequence};
use crate::node::{RenderNode, SizeHint};

/// Literal marker that starts the cost line.
pub const MANA_COST_MARKER: &str = "Mana Cost:";

/// Bold label emitted in place of the marker.
pub const MANA_COST_LABEL: &str = "Mana Cost: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub size: SizeHint,
    /// When false, a "Mana Cost:" line is composed like any other text.
    pub split_mana_cost: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: SizeHint::default(),
            split_mana_cost: true,
        }
    }
}

impl RenderOptions {
    pub fn with_size(size: SizeHint) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Text around the first "Mana Cost:" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManaCostSection<'a> {
    /// Everything before the marker, including any trailing newline.
    pub before: &'a str,
    /// Rest of the marker's line.
    pub cost_line: &'a str,
    /// Lines after the cost line, if any non-empty text follows.
    pub after: Option<&'a str>,
}

/// Splits at the first occurrence of [`MANA_COST_MARKER`]. Later occurrences
/// are left inside `after`.
pub fn split_mana_cost(text: &str) -> Option<ManaCostSection<'_>> {
    let (before, remainder) = text.split_once(MANA_COST_MARKER)?;
    let (cost_line, after) = match remainder.split_once('\n') {
        Some((cost_line, after)) => (cost_line, Some(after).filter(|after| !after.is_empty())),
        None => (remainder, None),
    };
    Some(ManaCostSection {
        before,
        cost_line,
        after,
    })
}

/// Render output with the parsed cost kept alongside the node list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct RenderedCard {
    pub nodes: Vec<RenderNode>,
    /// Present when the text contained a "Mana Cost:" line.
    pub mana_cost: Option<CostSequence>,
}

pub fn render_card(text: &str, options: &RenderOptions) -> RenderedCard {
    let section = if options.split_mana_cost {
        split_mana_cost(text)
    } else {
        None
    };
    let Some(section) = section else {
        return RenderedCard {
            nodes: compose_text(text, options.size),
            mana_cost: None,
        };
    };

    let cost = parse_cost_sequence(section.cost_line, options.size);
    tracing::debug!(
        symbols = cost.len(),
        has_after = section.after.is_some(),
        "split mana cost line"
    );

    let mut nodes = compose_text(section.before, options.size);
    nodes.push(RenderNode::bold(MANA_COST_LABEL));
    nodes.extend(cost.nodes().iter().cloned());
    if let Some(after) = section.after {
        nodes.push(RenderNode::LineBreak);
        nodes.extend(compose_text(after, options.size));
    }

    RenderedCard {
        nodes,
        mana_cost: Some(cost),
    }
}

pub fn render_with_options(text: &str, options: &RenderOptions) -> Vec<RenderNode> {
    render_card(text, options).nodes
}

/// Renders oracle text into display nodes. Never fails.
pub fn render(text: &str, size: SizeHint) -> Vec<RenderNode> {
    render_with_options(text, &RenderOptions::with_size(size))
}
