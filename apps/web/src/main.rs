//! Muso Web — Dioxus-powered music-ontology search.

use std::sync::Mutex;

use dioxus::prelude::*;
use muso_client::ApiClient;
use muso_core::ClientConfig;

mod app;
mod header;
mod icons;
mod results;
mod search;
mod state;

use app::App;

/// Pre-runtime storage — built before Dioxus launches, handed to the root component as context.
pub static INITIAL_CLIENT: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Browser builds bake the backend address in at compile time.
#[cfg(target_arch = "wasm32")]
fn client_config() -> ClientConfig {
    match option_env!("MUSO_API_URL") {
        Some(url) => ClientConfig::new(url).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring MUSO_API_URL");
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn client_config() -> ClientConfig {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return ClientConfig::default(),
    };
    ClientConfig::load(&cwd).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        ClientConfig::default()
    })
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("muso=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = client_config();
    tracing::info!(base_url = config.base_url(), "Using backend");
    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Could not create API client");
            std::process::exit(1);
        }
    };
    *INITIAL_CLIENT.lock().unwrap() = Some(client);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title(muso_core::messages::APP_TITLE)
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(600.0, 500.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
