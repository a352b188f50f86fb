//! Search panel — input form + category toggles.

mod filter_tabs;
mod search_input;

use dioxus::prelude::*;
use filter_tabs::FilterTabs;
use search_input::SearchInput;

#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-bar",
            SearchInput {}
            FilterTabs {}
        }
    }
}
