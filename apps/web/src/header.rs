//! Page header with the backend connectivity indicator.

use dioxus::prelude::*;
use muso_client::ApiClient;
use muso_core::{messages, Icon};

use crate::icons::IconSvg;
use crate::state::*;

#[component]
pub fn Header() -> Element {
    let client = use_context::<ApiClient>();
    let api_status = *API_STATUS.read();

    rsx! {
        header {
            class: "header",
            div { class: "header-logo", IconSvg { icon: Icon::Music, size: 32 } }
            h1 { class: "header-title", {messages::APP_TITLE} }
            p { class: "header-subtitle", {messages::APP_SUBTITLE} }
            div { class: "header-divider" }
            p { class: "header-description", {messages::APP_DESCRIPTION} }
            if let Some(healthy) = api_status {
                p {
                    class: "status-text",
                    "data-status": if healthy { "connected" } else { "disconnected" },
                    if healthy {
                        {format!("\u{2713} {}", messages::api_connected(client.base_url()))}
                    } else {
                        {format!("\u{2717} {}", messages::API_DISCONNECTED)}
                    }
                }
            }
        }
    }
}
