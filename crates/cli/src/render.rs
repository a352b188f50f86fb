//! Plain-text rendering of result cards and placeholder views.

use std::fmt::Write;

use muso_core::{Card, Field, View};

const INDENT: &str = "  ";

/// Render one card as an indented text block.
pub fn card(card: &Card) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}  [{}]", card.icon.glyph(), card.title, card.type_label);
    if let Some(desc) = &card.description {
        let _ = writeln!(out, "{INDENT}{desc}");
    }
    for field in &card.fields {
        match field {
            Field::Detail { label, value } => {
                let _ = writeln!(out, "{INDENT}{label}: {value}");
            }
            Field::Text { title, body } => {
                let _ = writeln!(out, "{INDENT}{title}:");
                block(&mut out, body);
            }
            Field::Lyrics { body } => {
                let _ = writeln!(out, "{INDENT}Letra:");
                block(&mut out, body);
            }
            Field::Tags { title, items, .. } => {
                let labels: Vec<&str> = items.iter().map(|t| t.label.as_str()).collect();
                let _ = writeln!(out, "{INDENT}{title}: {}", labels.join(", "));
            }
        }
    }
    let _ = writeln!(out, "{INDENT}{}", card.key);
    out
}

fn block(out: &mut String, body: &str) {
    for line in body.lines() {
        let _ = writeln!(out, "{INDENT}{INDENT}{line}");
    }
}

/// Render a whole result area: the placeholder for non-result views, else every card.
pub fn view(view: &View<'_>) -> String {
    if let Some(text) = view.placeholder() {
        return format!("{text}\n");
    }
    view.cards().iter().map(card).collect::<Vec<_>>().join("\n")
}
