//! Search form: free-text query plus submit.

use dioxus::prelude::*;
use muso_client::ApiClient;
use muso_core::messages;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let client = use_context::<ApiClient>();
    let query = QUERY.read();
    let is_loading = SEARCH.read().is_loading;
    let can_submit = !is_loading && !query.trim().is_empty();

    rsx! {
        form {
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                run_search(client.clone());
            },
            div {
                class: "search-input-group",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: messages::SEARCH_PLACEHOLDER,
                    value: "{query}",
                    autofocus: true,
                    disabled: is_loading,
                    oninput: move |e: Event<FormData>| {
                        *QUERY.write() = e.value();
                    },
                }
                button {
                    class: "search-button",
                    r#type: "submit",
                    disabled: !can_submit,
                    if is_loading { {messages::SEARCH_BUTTON_BUSY} } else { {messages::SEARCH_BUTTON} }
                }
            }
        }
    }
}

/// Submit the current query and filter; state settles when the request does.
fn run_search(client: ApiClient) {
    let query = QUERY.read().clone();
    let filter = *FILTER.read();

    let Some(ticket) = SEARCH.write().begin(&query, filter) else {
        return;
    };

    spawn(async move {
        let outcome = client.search(ticket.query()).await;
        SEARCH.write().finish(ticket, outcome);
    });
}
