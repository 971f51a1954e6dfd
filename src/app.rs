use dioxus::prelude::*;
use valentine_core::{CardConfig, CardEvent, Presentation};
use valentine_ui::MuteButton;

use crate::audio::AUDIO_ELEMENT_ID;
use crate::context::{get_config, use_card, use_dispatch, SharedCard};
use crate::pages::CardView;
use crate::theme::GLOBAL_STYLES;

const SCRIPT_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Dancing+Script:wght@600&display=swap";

/// Root application component.
///
/// Provides global styles and the card state, then renders the backdrop,
/// the background track and the active stage.
#[component]
pub fn App() -> Element {
    let Some(config) = get_config() else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            main { class: "card-scene",
                p { class: "card-error", "Card configuration failed to load" }
            }
        };
    };

    rsx! {
        document::Title { "{config.title}" }
        document::Link { rel: "stylesheet", href: SCRIPT_FONT }
        style { {GLOBAL_STYLES} }
        CardScene { config: config }
    }
}

/// Backdrop, audio element and mute toggle around the card stages.
#[component]
fn CardScene(config: &'static CardConfig) -> Element {
    let card: SharedCard = use_signal(|| Presentation::new(config.deck.clone()));
    use_context_provider(|| card);

    rsx! {
        main { class: "card-scene",
            BackgroundAudio { src: config.assets.audio.clone() }
            CardView { config: config }
        }
    }
}

/// Looping background track with its toggle.
#[component]
fn BackgroundAudio(src: String) -> Element {
    let card = use_card();
    let dispatch = use_dispatch();
    let muted = card.read().is_muted();

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            src: "{src}",
            r#loop: true,
            muted: muted,
        }
        MuteButton {
            muted: muted,
            onclick: move |_| dispatch.call(CardEvent::MuteToggled),
        }
    }
}
