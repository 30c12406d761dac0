use std::collections::HashMap;
use std::io::{self, Read};

use manatext::{RenderNode, RenderOptions, SizeHint, reconstruct, render_card};
use serde::Serialize;

const MAX_EXAMPLES: usize = 5;

#[derive(Debug, Default, Serialize)]
struct UnresolvedToken {
    token: String,
    count: u32,
    examples: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
struct AuditReport {
    total: u32,
    clean: u32,
    with_unresolved: u32,
    with_mana_cost: u32,
    lossy_without_cost: Vec<String>,
    unresolved: Vec<UnresolvedToken>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    manatext::logging::init_from_env();

    let mut pattern: Option<String> = None;
    let mut json = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--pattern"
            && let Some(value) = args.next()
        {
            pattern = Some(value.to_ascii_uppercase());
        } else if arg == "--json" {
            json = true;
        }
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let options = RenderOptions::with_size(SizeHint::Medium);
    let mut report = AuditReport::default();
    let mut unresolved: HashMap<String, UnresolvedToken> = HashMap::new();

    for block in input.split("\n---\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let (name_line, text) = block.split_once('\n').unwrap_or((block, ""));
        let name = name_line.strip_prefix("Name: ").unwrap_or(name_line).trim();
        if name.is_empty() {
            continue;
        }
        report.total += 1;

        let card = render_card(text, &options);
        if card.mana_cost.is_some() {
            report.with_mana_cost += 1;
        } else if reconstruct(&card.nodes) != text {
            report.lossy_without_cost.push(name.to_string());
        }

        let mut card_has_unresolved = false;
        for node in &card.nodes {
            let RenderNode::UnresolvedSymbol { original } = node else {
                continue;
            };
            card_has_unresolved = true;
            let key = original.to_ascii_uppercase();
            let entry = unresolved.entry(key.clone()).or_insert_with(|| UnresolvedToken {
                token: key,
                ..UnresolvedToken::default()
            });
            entry.count += 1;
            if entry.examples.len() < MAX_EXAMPLES && !entry.examples.iter().any(|n| n == name) {
                entry.examples.push(name.to_string());
            }
        }

        if card_has_unresolved {
            report.with_unresolved += 1;
        } else {
            report.clean += 1;
        }
    }

    let mut tokens: Vec<UnresolvedToken> = unresolved
        .into_values()
        .filter(|entry| {
            pattern
                .as_deref()
                .is_none_or(|pattern| entry.token.contains(pattern))
        })
        .collect();
    tokens.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    report.unresolved = tokens;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Total: {} Clean: {} With unresolved symbols: {} With mana cost line: {}",
        report.total, report.clean, report.with_unresolved, report.with_mana_cost
    );
    if !report.lossy_without_cost.is_empty() {
        println!("Cards that do not reconstruct exactly:");
        for name in &report.lossy_without_cost {
            println!("- {name}");
        }
    }
    if report.unresolved.is_empty() {
        match pattern {
            Some(pattern) => println!("No unresolved symbols matching: {pattern}"),
            None => println!("No unresolved symbols."),
        }
    } else {
        println!("Unresolved symbols by count:");
        for entry in &report.unresolved {
            println!("- {}x: {} (e.g. {})", entry.count, entry.token, entry.examples.join(", "));
        }
    }

    Ok(())
}
