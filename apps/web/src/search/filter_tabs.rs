//! Category toggles: all, artist, album, song, instrument, genre.

use dioxus::prelude::*;
use muso_core::{messages, CategoryFilter, Icon};

use crate::icons::IconSvg;
use crate::state::*;

#[component]
pub fn FilterTabs() -> Element {
    let active = *FILTER.read();
    let is_loading = SEARCH.read().is_loading;

    rsx! {
        div {
            class: "filter-tabs",
            for option in CategoryFilter::OPTIONS {
                button {
                    key: "{option}",
                    class: if option == active { "filter-tab active" } else { "filter-tab" },
                    r#type: "button",
                    disabled: is_loading,
                    onclick: move |_| {
                        *FILTER.write() = option;
                    },
                    span { class: "icon", IconSvg { icon: Icon::for_filter(option), size: 18 } }
                    span { class: "label", {messages::filter_label(option)} }
                }
            }
        }
    }
}
