//! Shared state for the card view.
//!
//! The card configuration is loaded once in `main` and read from a
//! process-wide cell. The presentation state is a single signal provided
//! by [`App`](crate::app::App) to every component below it.

use std::sync::OnceLock;

use dioxus::prelude::*;
use valentine_core::{CardConfig, CardEvent, Presentation};

use crate::audio::DomAudio;

/// Card configuration, set once at startup
static CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Store the card configuration. Later calls are ignored.
pub fn set_config(config: CardConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Card configuration was already set");
    }
}

/// Get the card configuration, if `main` managed to load one.
pub fn get_config() -> Option<&'static CardConfig> {
    CONFIG.get()
}

/// Presentation state shared through context
pub type SharedCard = Signal<Presentation>;

/// Hook to access the card state from context.
pub fn use_card() -> SharedCard {
    use_context::<SharedCard>()
}

/// Hook returning a dispatcher that applies events to the card.
///
/// Audio side effects go to the page's `<audio>` element.
pub fn use_dispatch() -> Callback<CardEvent> {
    let mut card = use_card();
    use_callback(move |event: CardEvent| {
        card.write().handle(event, &mut DomAudio);
    })
}
