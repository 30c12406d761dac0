//! manatext - render oracle text into display nodes.
//!
//! ## Usage
//!
//! ```text
//! manatext [OPTIONS] < card.txt
//!
//! Options:
//!   --text "..."        Render this text instead of reading stdin
//!   --size <SIZE>       small | medium | large | xlarge (default: $MANATEXT_SIZE or medium)
//!   --pretty            Indent JSON output
//!   --debug             Print one node per line instead of JSON
//!   --plain             Print the display text with markup removed
//!   --no-split          Do not special-case the "Mana Cost:" line
//! ```
//!
//! Logging goes to stderr and is controlled by `MANATEXT_LOG`.

use std::io::{self, Read};

use manatext::node::plain_text;
use manatext::{RenderNode, RenderOptions, SizeHint, render_card};

const SIZE_ENV: &str = "MANATEXT_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Json { pretty: bool },
    Debug,
    Plain,
}

#[derive(Debug)]
struct CliArgs {
    text: Option<String>,
    size: Option<SizeHint>,
    mode: OutputMode,
    split_mana_cost: bool,
}

fn parse_args() -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut parsed = CliArgs {
        text: None,
        size: None,
        mode: OutputMode::Json { pretty: false },
        split_mana_cost: true,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => {
                let value = args.next().ok_or("--text requires a value")?;
                parsed.text = Some(value);
            }
            "--size" => {
                let value = args.next().ok_or("--size requires a value")?;
                parsed.size = Some(value.parse()?);
            }
            "--pretty" => parsed.mode = OutputMode::Json { pretty: true },
            "--debug" => parsed.mode = OutputMode::Debug,
            "--plain" => parsed.mode = OutputMode::Plain,
            "--no-split" => parsed.split_mana_cost = false,
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    Ok(parsed)
}

fn size_from_env() -> Result<Option<SizeHint>, Box<dyn std::error::Error>> {
    match std::env::var(SIZE_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value.parse()?)),
        _ => Ok(None),
    }
}

fn describe_node(node: &RenderNode) -> String {
    match node {
        RenderNode::Header { level, text, .. } => format!("header(h{}) {text:?}", level.level()),
        RenderNode::Symbol {
            glyph, original, ..
        } => format!("symbol {glyph} {original}"),
        RenderNode::Bold { text } => format!("bold {text:?}"),
        RenderNode::Italic { text } => format!("italic {text:?}"),
        RenderNode::Text { text } => format!("text {text:?}"),
        RenderNode::LineBreak => "line_break".to_string(),
        RenderNode::UnresolvedSymbol { original } => format!("unresolved {original}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    manatext::logging::init_from_env();

    let args = parse_args()?;
    let size = match args.size {
        Some(size) => size,
        None => size_from_env()?.unwrap_or_default(),
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let options = RenderOptions {
        size,
        split_mana_cost: args.split_mana_cost,
    };
    let card = render_card(&text, &options);

    match args.mode {
        OutputMode::Json { pretty: false } => println!("{}", serde_json::to_string(&card)?),
        OutputMode::Json { pretty: true } => {
            println!("{}", serde_json::to_string_pretty(&card)?)
        }
        OutputMode::Debug => {
            for (idx, node) in card.nodes.iter().enumerate() {
                println!("{idx:>4}  {}", describe_node(node));
            }
            if let Some(cost) = &card.mana_cost {
                println!(
                    "mana cost {} (mana value {}, colors {})",
                    cost.to_oracle(),
                    cost.mana_value(),
                    cost.colors().letters()
                );
            }
        }
        OutputMode::Plain => println!("{}", plain_text(&card.nodes)),
    }

    Ok(())
}
