//! One result card, laid out from the kind-specific field template.

use dioxus::prelude::*;
use muso_core::{Card, Field, TagStyle};

use crate::icons::IconSvg;

fn badge_class(style: TagStyle) -> &'static str {
    match style {
        TagStyle::Genre => "badge genre",
        TagStyle::Instrument => "badge instrument",
        TagStyle::Song => "badge song",
    }
}

#[component]
pub fn ResultCard(card: Card) -> Element {
    rsx! {
        div {
            class: "result-card",
            "data-kind": "{card.kind}",
            div {
                class: "result-card-header",
                div { class: "result-icon", IconSvg { icon: card.icon, size: 20 } }
                div {
                    h3 { class: "result-card-title", "{card.title}" }
                    small { class: "result-card-type", {card.type_label} }
                }
            }
            if let Some(description) = &card.description {
                p { class: "result-card-description", "{description}" }
            }
            div {
                class: "result-card-details",
                for field in card.fields.iter().filter(|f| matches!(f, Field::Detail { .. })) {
                    {render_field(field)}
                }
            }
            for field in card.fields.iter().filter(|f| !matches!(f, Field::Detail { .. })) {
                {render_field(field)}
            }
        }
    }
}

fn render_field(field: &Field) -> Element {
    match field {
        Field::Detail { label, value } => rsx! {
            div {
                class: "detail-row",
                span { class: "detail-label", {*label} }
                span { class: "detail-value", "{value}" }
            }
        },
        Field::Text { title, body } => rsx! {
            div {
                class: "tags-container",
                div { class: "tags-title", {*title} }
                p { class: "text-content", "{body}" }
            }
        },
        Field::Lyrics { body } => rsx! {
            div {
                class: "tags-container",
                div { class: "tags-title", "Letra" }
                p { class: "lyrics-content", "{body}" }
            }
        },
        Field::Tags { title, style, items } => rsx! {
            div {
                class: "tags-container",
                div { class: "tags-title", {*title} }
                div {
                    class: "tags",
                    for tag in items.iter() {
                        span { key: "{tag.key}", class: badge_class(*style), "{tag.label}" }
                    }
                }
            }
        },
    }
}
