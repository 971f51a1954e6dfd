//! Closed card with the one-time flip.

use dioxus::prelude::*;

/// The closed card. A click starts the flip; the end of the CSS animation
/// reports completion.
#[component]
pub fn ClosedCard(
    /// Closed card image path
    src: String,
    /// Flip duration in milliseconds
    duration_ms: u32,
    /// Whether the flip animation is running
    flipping: bool,
    onclick: EventHandler<()>,
    onflipped: EventHandler<()>,
) -> Element {
    let class = if flipping {
        "card-image card-closed flipping"
    } else {
        "card-image card-closed"
    };

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "Carta cerrada",
            style: "--flip-duration: {duration_ms}ms;",
            onclick: move |_| onclick.call(()),
            onanimationend: move |_| onflipped.call(()),
        }
    }
}
