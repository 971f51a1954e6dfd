//! Opened card sliding up, shrinking and fading out.

use dioxus::prelude::*;

#[component]
pub fn LeavingCard(
    /// Opened card image path
    src: String,
    /// Animation duration in milliseconds
    duration_ms: u32,
    /// Called once the card is fully gone
    onfinished: EventHandler<()>,
) -> Element {
    rsx! {
        img {
            class: "card-image card-leaving",
            src: "{src}",
            alt: "Transición",
            style: "--leave-duration: {duration_ms}ms;",
            onanimationend: move |_| onfinished.call(()),
        }
    }
}
