//! The card itself: one view per stage.
//!
//! Clicks and animation ends are turned into [`CardEvent`]s; everything shown
//! is read back from the presentation state.

use dioxus::prelude::*;
use valentine_core::{CardConfig, CardEvent, Stage};

use crate::components::{ClosedCard, ContentView, LeavingCard, OpenedCard};
use crate::context::{use_card, use_dispatch};

#[component]
pub fn CardView(config: &'static CardConfig) -> Element {
    let card = use_card();
    let dispatch = use_dispatch();
    let state = card.read();
    let assets = &config.assets;
    let timing = config.timing;

    match state.stage() {
        Stage::ClosedCard if !state.has_flipped() => rsx! {
            ClosedCard {
                src: assets.closed_card.clone(),
                duration_ms: timing.flip_ms,
                flipping: state.is_animating(),
                onclick: move |_| dispatch.call(CardEvent::CardClicked),
                onflipped: move |_| dispatch.call(CardEvent::FlipFinished),
            }
        },
        Stage::ClosedCard => rsx! {
            OpenedCard {
                src: assets.opened_card.clone(),
                onclick: move |_| dispatch.call(CardEvent::OpenedCardClicked),
            }
        },
        Stage::OpeningTransition => rsx! {
            LeavingCard {
                src: assets.opened_card.clone(),
                duration_ms: timing.transition_ms,
                onfinished: move |_| dispatch.call(CardEvent::TransitionFinished),
            }
        },
        Stage::Content => match state.current_page() {
            Some(page) => rsx! {
                ContentView {
                    background: assets.final_card.clone(),
                    page: page.clone(),
                    hint: config.hint.clone(),
                    onadvance: move |_| dispatch.call(CardEvent::ContentClicked),
                }
            },
            None => rsx! {},
        },
    }
}
