//! Result area — exactly one of loading, error, initial, empty, or the card list.

mod result_card;

use dioxus::prelude::*;
use muso_core::{messages, View};

use crate::state::*;
use result_card::ResultCard;

#[component]
pub fn ResultList() -> Element {
    let search = SEARCH.read();
    let view = View::select(&search);

    match view {
        View::Loading => rsx! {
            div { class: "loading", {format!("\u{23F3} {}", messages::LOADING)} }
        },
        View::Error(message) => rsx! {
            div { class: "error", {format!("\u{274C} {}", messages::error_banner(message))} }
        },
        View::Initial => rsx! {
            div {
                class: "no-results",
                div { class: "no-results-icon", "\u{1F3B5}" }
                p { {messages::INITIAL} }
            }
        },
        View::Empty => rsx! {
            div {
                class: "no-results",
                div { class: "no-results-icon", "\u{1F50D}" }
                p { {messages::NO_RESULTS} }
            }
        },
        View::Results(results) => rsx! {
            div {
                class: "results-meta",
                "{results.len()} resultados"
            }
            div {
                class: "results-container",
                for card in view.cards() {
                    ResultCard { key: "{card.key}", card }
                }
            }
        },
    }
}
