#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
pub mod context;
mod pages;
mod theme;

use valentine_core::CardConfig;

/// Window title used when the card configuration could not be loaded
const FALLBACK_TITLE: &str = "Valentine Card";

fn main() {
    init_logging();

    // Card content is fixed for the whole session. Without it the app still
    // launches and shows the failure instead of a blank page.
    let title = match CardConfig::builtin() {
        Ok(config) => {
            tracing::info!(
                "Starting '{}' with {} pages",
                config.title,
                config.deck.len()
            );
            let title = config.title.clone();
            context::set_config(config);
            title
        }
        Err(e) => {
            tracing::error!("Invalid card configuration: {}", e);
            FALLBACK_TITLE.to_string()
        }
    };

    launch(&title);
}

#[cfg(feature = "desktop")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(not(feature = "desktop"))]
fn init_logging() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger already initialized: {}", e);
    }
}

#[cfg(feature = "desktop")]
fn launch(title: &str) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    // Room for the 1200x900 final card
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(1280.0, 960.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(_title: &str) {
    dioxus::launch(app::App);
}
