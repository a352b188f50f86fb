//! Root application component — header, search bar, results.

use dioxus::prelude::*;
use muso_client::ApiClient;

use crate::header::Header;
use crate::results::ResultList;
use crate::search::SearchPanel;
use crate::state::*;
use crate::INITIAL_CLIENT;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let client = use_context_provider(|| {
        INITIAL_CLIENT
            .lock()
            .unwrap()
            .take()
            .expect("API client is created before launch")
    });

    // Probe the backend once on mount; never blocks searching.
    use_future(move || {
        let client: ApiClient = client.clone();
        async move {
            let healthy = client.health_check().await;
            tracing::info!(healthy, "Backend health check");
            *API_STATUS.write() = Some(healthy);
        }
    });

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app",
            Header {}
            div {
                class: "container",
                SearchPanel {}
                ResultList {}
            }
        }
    }
}
